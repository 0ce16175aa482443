use crate::cli::Target;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{block_on, print_author, print_listing};

pub fn handle_authors(ctx: &CommandContext, target: Target) -> Result<()> {
    let client = ctx.client(target.endpoint.as_deref())?;
    let authors = block_on(client.authors())??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&authors)?);
    } else {
        print_listing(&authors, "No authors found.");
    }
    Ok(())
}

pub fn handle_author(ctx: &CommandContext, id: String, target: Target) -> Result<()> {
    let client = ctx.client(target.endpoint.as_deref())?;
    let author = block_on(client.author(&id))??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&author)?);
        return Ok(());
    }
    match author {
        Some(author) => print_author(&author),
        None => println!("Author {} not found.", id.cyan()),
    }
    Ok(())
}
