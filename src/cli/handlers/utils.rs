use crate::client::{AuthorDetails, BookDetails, Listing};
use crate::graphql::ReadlistSchema;
use crate::model::Author;
use anyhow::{Context, Result};
use colored::Colorize;
use std::future::Future;

/// Run a future to completion on a fresh runtime
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    Ok(tokio::runtime::Runtime::new()?.block_on(future))
}

/// Parse `--variables` JSON, defaulting to no variables
pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => {
            let json: serde_json::Value =
                serde_json::from_str(&v).context("Variables must be a JSON object")?;
            Ok(async_graphql::Variables::from_json(json))
        }
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Execute a raw document in-process and return the full response
pub fn execute_raw(
    schema: &ReadlistSchema,
    query: &str,
    variables: async_graphql::Variables,
) -> Result<async_graphql::Response> {
    let request = async_graphql::Request::new(query).variables(variables);
    block_on(schema.execute(request))
}

/// Print `{ id name }` rows (compact format)
pub fn print_listing(rows: &[Listing], empty: &str) {
    if rows.is_empty() {
        println!("{}", empty);
        return;
    }

    for row in rows {
        println!("{} {}", row.id.cyan(), row.name);
    }
}

pub fn print_book(book: &BookDetails) {
    println!("{} {}", book.id.cyan().bold(), book.name.bold());
    println!("Genre:    {}", book.genre.blue());

    let Some(author) = &book.author else {
        println!("Author:   {}", "unknown".dimmed());
        return;
    };
    println!(
        "Author:   {} {} ({})",
        author.id.cyan(),
        author.name,
        author.age
    );

    let others: Vec<_> = author.books.iter().filter(|b| b.id != book.id).collect();
    if !others.is_empty() {
        println!();
        println!("Also by {}:", author.name);
        for other in others {
            println!("  {} {}", other.id.cyan(), other.name);
        }
    }
}

pub fn print_author(author: &AuthorDetails) {
    println!("{} {}", author.id.cyan().bold(), author.name.bold());
    println!("Age:      {}", author.age);

    if author.books.is_empty() {
        println!("Books:    {}", "none".dimmed());
        return;
    }
    println!("Books:");
    for book in &author.books {
        match &book.genre {
            Some(genre) => println!("  {} {} [{}]", book.id.cyan(), book.name, genre.blue()),
            None => println!("  {} {}", book.id.cyan(), book.name),
        }
    }
}

pub fn print_added_author(author: &Author) {
    println!(
        "{} author {} {} ({})",
        "Added".green(),
        author.id.cyan(),
        author.name,
        author.age
    );
}

pub fn print_added_book(book: &Listing) {
    println!("{} book {} {}", "Added".green(), book.id.cyan(), book.name);
}
