use crate::cli::Target;
use anyhow::Result;

use super::CommandContext;
use super::utils::{block_on, print_added_author, print_added_book};

pub fn handle_add_author(
    ctx: &CommandContext,
    name: String,
    age: i32,
    target: Target,
) -> Result<()> {
    let client = ctx.client(target.endpoint.as_deref())?;
    let author = block_on(client.add_author(&name, age))??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&author)?);
    } else {
        print_added_author(&author);
    }
    Ok(())
}

pub fn handle_add_book(
    ctx: &CommandContext,
    name: String,
    genre: String,
    authorid: String,
    target: Target,
) -> Result<()> {
    let client = ctx.client(target.endpoint.as_deref())?;
    let book = block_on(client.add_book(&name, &genre, &authorid))??;

    if target.json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_added_book(&book);
    }
    Ok(())
}
