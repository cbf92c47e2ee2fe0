//! # Storage Layer
//!
//! Persistence for the catalog and the user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Catalog | JSON array, 4-space indent | `library.txt` (configurable) |
//! | Config | TOML | `<config dir>/library-manager/config.toml` |
//!
//! ## Failure Policy
//!
//! - A missing, unreadable or corrupt catalog loads as empty; the condition
//!   is logged at `warn` and never returned to the caller
//! - Write failures are returned as [`StoreError`]
//! - Writes are atomic (temp file + rename); there is no locking, the last
//!   writer wins
//!
//! ## Key Types
//!
//! - [`CatalogStore`] - Load/save seam the catalog is generic over
//! - [`JsonStore`] - File-backed store
//! - [`Config`] - User configuration

mod config;
mod json;

pub use config::{Config, ConfigError, OutputFormat, CONFIG_ENV, DEFAULT_LIBRARY_FILE};
pub use json::{CatalogStore, JsonStore, StoreError};
