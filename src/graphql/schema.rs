use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::storage::Catalog;

use super::types::*;

pub type ReadlistSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: Arc<dyn Catalog>) -> ReadlistSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

pub(super) fn catalog<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn Catalog>> {
    ctx.data::<Arc<dyn Catalog>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by ID
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        Ok(catalog(ctx)?.book(&id)?.map(Book::from))
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        Ok(catalog(ctx)?.author(&id)?.map(Author::from))
    }

    /// All books, in insertion order
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        Ok(catalog(ctx)?
            .books()?
            .into_iter()
            .map(Book::from)
            .collect())
    }

    /// All authors, in insertion order
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        Ok(catalog(ctx)?
            .authors()?
            .into_iter()
            .map(Author::from)
            .collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add an author and return it with its generated ID
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> async_graphql::Result<Author> {
        Ok(catalog(ctx)?.add_author(name, age)?.into())
    }

    /// Add a book and return it with its generated ID
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        authorid: ID,
    ) -> async_graphql::Result<Book> {
        Ok(catalog(ctx)?.add_book(name, genre, authorid.0)?.into())
    }
}
