//! # Readlist - a reading list served over GraphQL
//!
//! Readlist keeps a small catalog of books and their authors and exposes it
//! through a GraphQL API. Records live either in memory (seeded with a fixed
//! set of fixtures) or in a directory of JSON collection files.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the in-memory fixtures on http://localhost:4000/graphql
//! readlist serve
//!
//! # Use a persistent store instead
//! readlist init
//! readlist add-author "Ursula K. Le Guin" 67
//! readlist authors
//!
//! # Talk to a running server
//! readlist books --endpoint http://localhost:4000/graphql
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`client`]: Named GraphQL documents and a client to run them
//! - [`config`]: Configuration loading and database URLs
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (`Book`, `Author`)
//! - [`server`]: axum routes for `/` and `/graphql`
//! - [`storage`]: The `Catalog` trait and its in-memory and document stores

/// Command-line interface definitions using clap.
pub mod cli;

/// Named query documents (`GetBooks`, `GetAuthors`, `AddBook`, ...) and the
/// client that executes them locally or over HTTP.
pub mod client;

/// Configuration loading and management.
///
/// Handles `.readlist.yml` files and `memory:` / `file:` database URLs.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ReadlistError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

pub mod logging;

/// Data models for books and authors.
pub mod model;

pub mod server;

/// Storage backends behind the `Catalog` trait.
pub mod storage;
