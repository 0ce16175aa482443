//! GraphQL schema and resolvers for the reading list.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://localhost:4000/graphql)
//! readlist serve --port 4000
//!
//! # Execute a query from CLI
//! readlist query '{ book(id: "2") { name author { name } } }'
//!
//! # Execute a mutation from CLI
//! readlist mutate 'addAuthor(name: "Ursula K. Le Guin", age: 67) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addAuthor`, `addBook`
//! - **Nested**: `Book.author`, `Author.books`

mod schema;
mod types;

pub use schema::{MutationRoot, QueryRoot, ReadlistSchema, build_schema};
pub use types::*;
