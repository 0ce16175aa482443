//! Static seed data: six books by three authors.

use crate::model::{Author, Book};

pub fn books() -> Vec<Book> {
    vec![
        Book::new("1", "Name of the wind", "fiction", "1"),
        Book::new("2", "The Final Empire", "fantasy", "2"),
        Book::new("3", "The Long Earth", "sci-fi", "3"),
        Book::new("4", "The Hero of Ages", "fantasy", "2"),
        Book::new("5", "The Color of Magic", "fantasy", "3"),
        Book::new("6", "The Light Fantastic", "fantasy", "3"),
    ]
}

pub fn authors() -> Vec<Author> {
    vec![
        Author::new("1", "Patrick Rothfuss", 44),
        Author::new("2", "Brandon Sanderson", 42),
        Author::new("3", "Terry Pratchett", 66),
    ]
}
