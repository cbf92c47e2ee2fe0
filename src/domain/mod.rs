//! Domain models for the library manager
//!
//! Contains the catalog logic without any knowledge of file formats.

mod book;
mod catalog;

pub use book::{Book, SearchField};
pub use catalog::{Catalog, Statistics};
