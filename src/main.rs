use anyhow::Result;
use clap::Parser;

use readlist::cli::handlers::{self, CommandContext};
use readlist::cli::{Cli, Commands};
use readlist::logging;

fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let database_url = cli.database_url;
    let context = || CommandContext::load(database_url.clone());

    match cli.command {
        Commands::Init => handlers::handle_init(database_url.clone()),
        Commands::Serve { host, port } => handlers::handle_serve(context()?, host, port),
        Commands::Query { query, variables } => {
            handlers::handle_query(context()?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(context()?, mutation, variables),
        Commands::Books { target } => handlers::handle_books(&context()?, target),
        Commands::Authors { target } => handlers::handle_authors(&context()?, target),
        Commands::Book { id, target } => handlers::handle_book(&context()?, id, target),
        Commands::Author { id, target } => handlers::handle_author(&context()?, id, target),
        Commands::AddAuthor { name, age, target } => {
            handlers::handle_add_author(&context()?, name, age, target)
        }
        Commands::AddBook {
            name,
            genre,
            authorid,
            target,
        } => handlers::handle_add_book(&context()?, name, genre, authorid, target),
    }
}
