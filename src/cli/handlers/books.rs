use crate::cli::Target;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{block_on, print_book, print_listing};

pub fn handle_books(ctx: &CommandContext, target: Target) -> Result<()> {
    let client = ctx.client(target.endpoint.as_deref())?;
    let books = block_on(client.books())??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        print_listing(&books, "No books found.");
    }
    Ok(())
}

pub fn handle_book(ctx: &CommandContext, id: String, target: Target) -> Result<()> {
    let client = ctx.client(target.endpoint.as_deref())?;
    let book = block_on(client.book(&id))??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
        return Ok(());
    }
    match book {
        Some(book) => print_book(&book),
        None => println!("Book {} not found.", id.cyan()),
    }
    Ok(())
}
