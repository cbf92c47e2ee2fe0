//! JSON file storage for the catalog
//!
//! The whole catalog lives in one file as a JSON array, rewritten in full
//! after every change. Writes go to a temp file first and are renamed into
//! place so a crash mid-write leaves the previous catalog intact.

use std::error::Error as _;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::Book;

/// Errors raised by [`JsonStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read catalog: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse catalog: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize catalog")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write catalog: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable home of a catalog.
///
/// `load` never fails: storage that is missing, unreadable or corrupt is
/// reported as an empty catalog. `save` replaces the stored catalog entirely
/// and surfaces any failure to the caller.
pub trait CatalogStore {
    fn load(&self) -> Vec<Book>;

    fn save(&self, books: &[Book]) -> Result<(), StoreError>;
}

/// Catalog store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store for the file at `path`. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the catalog, reporting why it could not be read.
    ///
    /// A missing file is an empty catalog, not an error.
    pub fn try_load(&self) -> Result<Vec<Book>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Sibling file the catalog is staged in before the rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("library"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
        move |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl CatalogStore for JsonStore {
    fn load(&self) -> Vec<Book> {
        match self.try_load() {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
                books
            }
            Err(err) => {
                let cause = err.source().map(ToString::to_string).unwrap_or_default();
                warn!(error = %err, %cause, "starting with an empty catalog");
                Vec::new()
            }
        }
    }

    fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(Self::write_err(parent))?;
            }
        }

        // Match the 4-space layout the catalog has always been written in
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books
            .serialize(&mut serializer)
            .map_err(StoreError::Serialize)?;

        let temp_path = self.temp_path();
        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(Self::write_err(&temp_path))?;

            let mut writer = BufWriter::new(file);
            writer
                .write_all(&buf)
                .and_then(|_| writer.flush())
                .map_err(Self::write_err(&temp_path))?;
        }

        fs::rename(&temp_path, &self.path).map_err(Self::write_err(&self.path))?;

        debug!(path = %self.path.display(), count = books.len(), "saved catalog");
        Ok(())
    }
}
