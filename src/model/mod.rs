//! Data models for the reading list.
//!
//! - [`Book`]: a title with a genre and the id of its author
//! - [`Author`]: a writer with a name and an age
//!
//! The two are linked only by value (`Book::authorid` holds an `Author::id`).
//! Navigating the relation goes through the storage layer, see
//! [`Catalog::author_of`](crate::storage::Catalog::author_of) and
//! [`Catalog::books_by`](crate::storage::Catalog::books_by).

mod author;
mod book;

pub use author::Author;
pub use book::Book;
