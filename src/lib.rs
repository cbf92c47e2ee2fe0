//! Library Manager - a personal book catalog kept in a single JSON file
//!
//! Books are recorded with a title, author, year, genre and read flag. The
//! [`Catalog`] holds them in insertion order and rewrites the backing file
//! after every change.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Book, Catalog, SearchField, Statistics};
pub use storage::{CatalogStore, Config, JsonStore, StoreError};
