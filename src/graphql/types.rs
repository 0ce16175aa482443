use super::schema::catalog;
use crate::model::{Author as ModelAuthor, Book as ModelBook};
use async_graphql::{Context, ID, Object};

/// GraphQL view of a book. `authorid` stays internal and is reached
/// through the `author` field.
pub struct Book(ModelBook);

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn genre(&self) -> &str {
        &self.0.genre
    }

    /// The author this book refers to, if one exists
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        Ok(catalog(ctx)?.author_of(&self.0)?.map(Author::from))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self(b)
    }
}

pub struct Author(ModelAuthor);

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> i32 {
        self.0.age
    }

    /// Every book written by this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        Ok(catalog(ctx)?
            .books_by(&self.0)?
            .into_iter()
            .map(Book::from)
            .collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self(a)
    }
}
