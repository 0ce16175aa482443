use super::{Catalog, IdGenerator, fixtures};
use crate::error::{ReadlistError, Result};
use crate::model::{Author, Book};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Collections {
    books: Vec<Book>,
    authors: Vec<Author>,
}

/// Catalog held entirely in process memory.
///
/// Lookups are linear scans over the two vectors. Anything added is lost
/// when the process exits.
pub struct MemoryCatalog {
    collections: RwLock<Collections>,
    ids: IdGenerator,
}

impl MemoryCatalog {
    pub fn new(ids: IdGenerator) -> Self {
        Self::from_records(Vec::new(), Vec::new(), ids)
    }

    /// A catalog seeded with the built-in fixture books and authors.
    pub fn with_fixtures(ids: IdGenerator) -> Self {
        Self::from_records(fixtures::books(), fixtures::authors(), ids)
    }

    pub fn from_records(books: Vec<Book>, authors: Vec<Author>, ids: IdGenerator) -> Self {
        Self {
            collections: RwLock::new(Collections { books, authors }),
            ids,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>> {
        self.collections
            .read()
            .map_err(|_| ReadlistError::Storage("Memory catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>> {
        self.collections
            .write()
            .map_err(|_| ReadlistError::Storage("Memory catalog lock poisoned".to_string()))
    }
}

impl Catalog for MemoryCatalog {
    fn books(&self) -> Result<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.read()?.authors.clone())
    }

    fn book(&self, id: &str) -> Result<Option<Book>> {
        tracing::debug!(id = %id, "Looking up book");
        Ok(self.read()?.books.iter().find(|b| b.id == id).cloned())
    }

    fn author(&self, id: &str) -> Result<Option<Author>> {
        tracing::debug!(id = %id, "Looking up author");
        Ok(self.read()?.authors.iter().find(|a| a.id == id).cloned())
    }

    fn books_by(&self, author: &Author) -> Result<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .iter()
            .filter(|b| b.is_by(&author.id))
            .cloned()
            .collect())
    }

    fn add_author(&self, name: String, age: i32) -> Result<Author> {
        let mut collections = self.write()?;
        let id = self
            .ids
            .next_id(collections.authors.iter().map(|a| a.id.as_str()))?;
        let author = Author::new(id, name, age);
        tracing::info!(id = %author.id, name = %author.name, "Adding author");
        collections.authors.push(author.clone());
        Ok(author)
    }

    fn add_book(&self, name: String, genre: String, authorid: String) -> Result<Book> {
        let mut collections = self.write()?;
        let id = self
            .ids
            .next_id(collections.books.iter().map(|b| b.id.as_str()))?;
        let book = Book::new(id, name, genre, authorid);
        tracing::info!(id = %book.id, name = %book.name, "Adding book");
        collections.books.push(book.clone());
        Ok(book)
    }
}
