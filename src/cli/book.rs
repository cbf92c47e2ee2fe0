//! Catalog CLI commands

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{Book, Catalog, SearchField};
use crate::storage::CatalogStore;

pub fn add<S: CatalogStore>(
    output: &Output,
    catalog: &mut Catalog<S>,
    title: &str,
    author: &str,
    year: i64,
    genre: &str,
    read: bool,
) -> Result<()> {
    output.verbose_ctx("add", &format!("Adding '{}' by '{}' ({})", title, author, year));

    catalog
        .add(title, author, year, genre, read)
        .context("Could not add book")?;

    output.success("Book added successfully!");
    Ok(())
}

pub fn remove<S: CatalogStore>(output: &Output, catalog: &mut Catalog<S>, title: &str) -> Result<()> {
    let removed = catalog.remove(title).context("Could not remove book")?;
    output.verbose_ctx("remove", &format!("Removed {} book(s) titled '{}'", removed, title));

    if output.is_json() {
        output.data(&serde_json::json!({
            "title": title,
            "removed": removed,
        }));
    } else if removed == 0 {
        output.info(&format!("No book titled '{}' found.", title));
    } else {
        output.success("Book removed successfully!");
    }

    Ok(())
}

pub fn search<S: CatalogStore>(output: &Output, catalog: &Catalog<S>, query: &str, by: SearchField) {
    let results = catalog.search(query, by);
    output.verbose_ctx(
        "search",
        &format!("Found {} match(es) for '{}' by {}", results.len(), query, by),
    );

    if output.is_json() {
        output.data(&results);
    } else if results.is_empty() {
        output.info("No matching books found.");
    } else {
        for book in &results {
            println!("{}", book);
        }
        println!();
        println!("Found {} book(s)", results.len());
    }
}

pub fn list<S: CatalogStore>(output: &Output, catalog: &Catalog<S>) {
    if output.is_json() {
        output.data(&catalog.books());
    } else if catalog.is_empty() {
        output.info("Library is empty.");
    } else {
        print_numbered(catalog.books());
    }
}

fn print_numbered(books: &[Book]) {
    for (i, book) in books.iter().enumerate() {
        println!("{}. {}", i + 1, book);
    }
}

pub fn stats<S: CatalogStore>(output: &Output, catalog: &Catalog<S>) {
    let stats = catalog.statistics();

    if output.is_json() {
        output.data(&stats);
    } else {
        println!("Library Statistics");
        println!("{}", "=".repeat(30));
        println!("Total books:     {}", stats.total);
        println!("  [x] Read:      {}", stats.read);
        println!("  [ ] Unread:    {}", stats.unread());
        println!("Percentage read: {:.1}%", stats.percent_read);
    }
}
