use crate::error::Result;
use crate::model::{Author, Book};

/// Read/append access to the book and author collections.
///
/// Lookups that miss return `Ok(None)`; only failures of the store itself
/// are errors. Collections come back in insertion order.
pub trait Catalog: Send + Sync {
    fn books(&self) -> Result<Vec<Book>>;

    fn authors(&self) -> Result<Vec<Author>>;

    fn book(&self, id: &str) -> Result<Option<Book>> {
        Ok(self.books()?.into_iter().find(|b| b.id == id))
    }

    fn author(&self, id: &str) -> Result<Option<Author>> {
        Ok(self.authors()?.into_iter().find(|a| a.id == id))
    }

    /// The first author whose id equals `book.authorid`.
    fn author_of(&self, book: &Book) -> Result<Option<Author>> {
        self.author(&book.authorid)
    }

    /// Every book whose `authorid` equals `author.id`.
    fn books_by(&self, author: &Author) -> Result<Vec<Book>> {
        Ok(self
            .books()?
            .into_iter()
            .filter(|b| b.is_by(&author.id))
            .collect())
    }

    fn add_author(&self, name: String, age: i32) -> Result<Author>;

    fn add_book(&self, name: String, genre: String, authorid: String) -> Result<Book>;
}
