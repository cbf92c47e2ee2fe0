//! Main CLI application structure

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::book;
use super::output::{Output, OutputFormat};
use crate::domain::{Catalog, SearchField};
use crate::storage::{Config, JsonStore};

#[derive(Parser)]
#[command(name = "library")]
#[command(author, version, about = "Personal book catalog manager")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Catalog file to use
    #[arg(long, global = true, env = "LIBRARY_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book title
        title: String,

        /// Author name
        #[arg(long, short, default_value = "")]
        author: String,

        /// Publication year
        #[arg(long, short, default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..=2100))]
        year: i64,

        /// Genre
        #[arg(long, short, default_value = "")]
        genre: String,

        /// Mark the book as read
        #[arg(long, short)]
        read: bool,
    },

    /// Remove every book with this title (case-insensitive)
    Remove {
        /// Title to remove
        title: String,
    },

    /// Search books by title or author
    Search {
        /// Text to look for (case-insensitive substring)
        query: String,

        /// Field to search
        #[arg(long, short = 'b', value_enum, default_value_t = SearchField::Title)]
        by: SearchField,
    },

    /// Show all books in the catalog
    List,

    /// Show read/unread statistics
    Stats,

    /// Show where the catalog and configuration live
    Path,
}

/// Installs the tracing subscriber. `RUST_LOG` wins unless `--verbose` is set.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    let path = config.library_path(cli.file.as_deref());
    output.verbose_ctx("catalog", &format!("Using catalog file: {}", path.display()));

    match cli.command {
        Commands::Path => show_paths(&output, &path)?,
        command => {
            let mut catalog = Catalog::open(JsonStore::new(path));
            output.verbose_ctx("catalog", &format!("Loaded {} book(s)", catalog.len()));
            run_catalog_command(command, &output, &mut catalog)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn run_catalog_command(
    command: Commands,
    output: &Output,
    catalog: &mut Catalog<JsonStore>,
) -> Result<()> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        } => book::add(output, catalog, &title, &author, year, &genre, read)?,
        Commands::Remove { title } => book::remove(output, catalog, &title)?,
        Commands::Search { query, by } => book::search(output, catalog, &query, by),
        Commands::List => book::list(output, catalog),
        Commands::Stats => book::stats(output, catalog),
        Commands::Path => show_paths(output, catalog.store().path())?,
    }

    Ok(())
}

fn show_paths(output: &Output, catalog: &std::path::Path) -> Result<()> {
    let config = Config::config_path();

    if output.is_json() {
        output.data(&serde_json::json!({
            "catalog": catalog,
            "config": config,
        }));
    } else {
        println!("Catalog: {}", catalog.display());
        match config {
            Some(path) => println!("Config:  {}", path.display()),
            None => println!("Config:  (no config directory available)"),
        }
    }

    Ok(())
}
