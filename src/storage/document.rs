use super::{Catalog, IdGenerator};
use crate::error::{ReadlistError, Result};
use crate::model::{Author, Book};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

pub const BOOKS_COLLECTION: &str = "books";
pub const AUTHORS_COLLECTION: &str = "authors";

const LOCK_FILE_NAME: &str = ".readlist.lock";

/// Catalog persisted as JSON documents, one file per collection.
///
/// ```text
/// <root>/books.json    [{"id": "1", "name": ..., "genre": ..., "authorid": "1"}, ...]
/// <root>/authors.json  [{"id": "1", "name": ..., "age": 44}, ...]
/// ```
///
/// Reads go straight to disk, so several instances over the same root see
/// each other's writes. Writes replace the whole file through a temp file
/// and rename. Every read-modify-write holds an exclusive lock on
/// `<root>/.readlist.lock`, which also covers other processes sharing the root.
pub struct DocumentCatalog {
    root: PathBuf,
    ids: IdGenerator,
    write_lock: Mutex<()>,
}

impl DocumentCatalog {
    pub fn open(root: impl Into<PathBuf>, ids: IdGenerator) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "Opened document catalog");
        Ok(Self {
            root,
            ids,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `books` and `authors` if both collections are empty.
    ///
    /// Returns whether anything was written.
    pub fn seed(&self, books: &[Book], authors: &[Author]) -> Result<bool> {
        let _guard = self.lock()?;
        let existing_books: Vec<Book> = self.load(BOOKS_COLLECTION)?;
        let existing_authors: Vec<Author> = self.load(AUTHORS_COLLECTION)?;
        if !existing_books.is_empty() || !existing_authors.is_empty() {
            return Ok(false);
        }

        tracing::info!(
            root = %self.root.display(),
            books = books.len(),
            authors = authors.len(),
            "Seeding document catalog"
        );
        self.store(AUTHORS_COLLECTION, authors)?;
        self.store(BOOKS_COLLECTION, books)?;
        Ok(true)
    }

    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }

    /// Lock out other writers in this process and in other processes.
    ///
    /// The file lock is released when the returned `File` is dropped.
    fn lock(&self) -> Result<(MutexGuard<'_, ()>, File)> {
        let guard = self
            .write_lock
            .lock()
            .map_err(|_| ReadlistError::Storage("Document catalog lock poisoned".to_string()))?;

        let lock_path = self.root.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        file.lock().map_err(|e| {
            ReadlistError::Storage(format!("Failed to lock {}: {}", lock_path.display(), e))
        })?;

        Ok((guard, file))
    }

    fn load<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read collection file");
            ReadlistError::Io(e)
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse collection file");
            ReadlistError::Storage(format!("Corrupt collection {}: {}", path.display(), e))
        })
    }

    fn store<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(records)?;
        self.atomic_write(&self.collection_path(collection), &content)
    }

    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        // Temp file must live next to the target for the rename to be atomic
        let mut temp_file = NamedTempFile::new_in(&self.root)
            .map_err(|e| ReadlistError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| ReadlistError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| ReadlistError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file.persist(target_path).map_err(|e| {
            ReadlistError::Storage(format!(
                "Failed to persist {}: {}",
                target_path.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}

impl Catalog for DocumentCatalog {
    fn books(&self) -> Result<Vec<Book>> {
        self.load(BOOKS_COLLECTION)
    }

    fn authors(&self) -> Result<Vec<Author>> {
        self.load(AUTHORS_COLLECTION)
    }

    fn book(&self, id: &str) -> Result<Option<Book>> {
        tracing::debug!(id = %id, "Looking up book");
        Ok(self.books()?.into_iter().find(|b| b.id == id))
    }

    fn author(&self, id: &str) -> Result<Option<Author>> {
        tracing::debug!(id = %id, "Looking up author");
        Ok(self.authors()?.into_iter().find(|a| a.id == id))
    }

    fn add_author(&self, name: String, age: i32) -> Result<Author> {
        let _guard = self.lock()?;
        let mut authors: Vec<Author> = self.load(AUTHORS_COLLECTION)?;
        let id = self.ids.next_id(authors.iter().map(|a| a.id.as_str()))?;
        let author = Author::new(id, name, age);

        tracing::info!(id = %author.id, name = %author.name, "Adding author");
        authors.push(author.clone());
        self.store(AUTHORS_COLLECTION, &authors)?;
        Ok(author)
    }

    fn add_book(&self, name: String, genre: String, authorid: String) -> Result<Book> {
        let _guard = self.lock()?;
        let mut books: Vec<Book> = self.load(BOOKS_COLLECTION)?;
        let id = self.ids.next_id(books.iter().map(|b| b.id.as_str()))?;
        let book = Book::new(id, name, genre, authorid);

        tracing::info!(id = %book.id, name = %book.name, "Adding book");
        books.push(book.clone());
        self.store(BOOKS_COLLECTION, &books)?;
        Ok(book)
    }
}
