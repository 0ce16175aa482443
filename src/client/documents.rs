//! Named GraphQL documents issued by the reading-list client.
//!
//! Each document is a fixed request shape: it names the operation and the
//! fields it wants back, and carries no logic of its own.

/// A named, static GraphQL request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const GET_BOOKS: Operation = Operation {
    name: "GetBooks",
    document: r#"query GetBooks {
  books {
    name
    id
  }
}"#,
};

pub const GET_AUTHORS: Operation = Operation {
    name: "GetAuthors",
    document: r#"query GetAuthors {
  authors {
    name
    id
  }
}"#,
};

pub const ADD_BOOK: Operation = Operation {
    name: "AddBook",
    document: r#"mutation AddBook($name: String!, $genre: String!, $authorid: ID!) {
  addBook(name: $name, genre: $genre, authorid: $authorid) {
    name
    id
  }
}"#,
};

/// Book details view: the book, its author, and the author's other books.
pub const GET_BOOK: Operation = Operation {
    name: "GetBook",
    document: r#"query GetBook($id: ID!) {
  book(id: $id) {
    id
    name
    genre
    author {
      id
      name
      age
      books {
        name
        id
      }
    }
  }
}"#,
};

pub const GET_AUTHOR: Operation = Operation {
    name: "GetAuthor",
    document: r#"query GetAuthor($id: ID!) {
  author(id: $id) {
    id
    name
    age
    books {
      id
      name
      genre
    }
  }
}"#,
};

pub const ADD_AUTHOR: Operation = Operation {
    name: "AddAuthor",
    document: r#"mutation AddAuthor($name: String!, $age: Int!) {
  addAuthor(name: $name, age: $age) {
    id
    name
    age
  }
}"#,
};

pub const ALL: [Operation; 6] = [
    GET_BOOKS,
    GET_AUTHORS,
    ADD_BOOK,
    GET_BOOK,
    GET_AUTHOR,
    ADD_AUTHOR,
];

impl Operation {
    pub fn is_mutation(&self) -> bool {
        self.document.trim_start().starts_with("mutation")
    }
}
