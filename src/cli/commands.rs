use crate::config::DATABASE_URL_ENV;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "readlist")]
#[command(
    author,
    version,
    about = "A reading list of books and authors, served over GraphQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database URL: 'memory:' or 'file:<dir>' (overrides config)
    #[arg(long, global = true, env = DATABASE_URL_ENV)]
    pub database_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a readlist project in the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against the configured store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// List all books
    #[command(visible_alias = "ls")]
    Books {
        #[command(flatten)]
        target: Target,
    },

    /// List all authors
    Authors {
        #[command(flatten)]
        target: Target,
    },

    /// Show a book with its author
    Book {
        /// Book ID
        id: String,

        #[command(flatten)]
        target: Target,
    },

    /// Show an author with their books
    Author {
        /// Author ID
        id: String,

        #[command(flatten)]
        target: Target,
    },

    /// Add a new author
    AddAuthor {
        /// Author name
        name: String,

        /// Author age
        age: i32,

        #[command(flatten)]
        target: Target,
    },

    /// Add a new book
    AddBook {
        /// Book name
        name: String,

        /// Genre
        genre: String,

        /// ID of the book's author
        authorid: String,

        #[command(flatten)]
        target: Target,
    },
}

/// Where an operation runs and how its result is printed.
#[derive(clap::Args, Clone, Default)]
pub struct Target {
    /// Send the operation to a running server instead of the local store
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
