//! # Command-Line Interface
//!
//! The presentation layer over [`Catalog`](crate::Catalog). Every command
//! opens the catalog, runs one operation and exits.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `add` | Record a new book |
//! | `remove` | Drop every book with a title (case-insensitive) |
//! | `search` | Substring search by title or author |
//! | `list` | Show the whole catalog in insertion order |
//! | `stats` | Total books and percentage read |
//! | `path` | Show the catalog and config locations |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Catalog File
//!
//! `--file` or `LIBRARY_FILE` select the catalog, otherwise `library_file`
//! from the config, otherwise `library.txt` in the working directory.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod book;
mod output;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
