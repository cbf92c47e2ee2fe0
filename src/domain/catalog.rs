//! The in-memory catalog
//!
//! [`Catalog`] owns the ordered list of books for one session and writes the
//! whole list back through its [`CatalogStore`] after every change. Reads
//! never touch storage.

use serde::Serialize;
use tracing::debug;

use super::book::{Book, SearchField};
use crate::storage::{CatalogStore, StoreError};

/// Aggregate read/unread counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
    /// Share of read books, 0-100. Zero for an empty catalog.
    pub percent_read: f64,
}

impl Statistics {
    fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read = books.iter().filter(|b| b.read).count();
        let percent_read = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };

        Self {
            total,
            read,
            percent_read,
        }
    }

    pub fn unread(&self) -> usize {
        self.total - self.read
    }
}

/// Ordered collection of books mirrored onto a store
pub struct Catalog<S> {
    books: Vec<Book>,
    store: S,
}

impl<S: CatalogStore> Catalog<S> {
    /// Loads the catalog from `store`. Missing or corrupt storage yields an
    /// empty catalog.
    pub fn open(store: S) -> Self {
        let books = store.load();
        Self { books, store }
    }

    /// Appends a book and persists the catalog.
    ///
    /// No validation and no deduplication: the same title may be added twice.
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        year: i64,
        genre: &str,
        read: bool,
    ) -> Result<(), StoreError> {
        self.add_book(Book::new(title, author, year, genre, read))
    }

    /// Appends an already-built book and persists the catalog
    pub fn add_book(&mut self, book: Book) -> Result<(), StoreError> {
        debug!(title = %book.title, "adding book");
        self.books.push(book);
        self.store.save(&self.books)
    }

    /// Removes every book whose title matches `title` ignoring case and
    /// returns how many were removed.
    ///
    /// The catalog is saved even when nothing matched.
    pub fn remove(&mut self, title: &str) -> Result<usize, StoreError> {
        let before = self.books.len();
        self.books.retain(|b| !b.has_title(title));
        let removed = before - self.books.len();

        debug!(title, removed, "removed books");
        self.store.save(&self.books)?;
        Ok(removed)
    }

    /// Returns books whose `field` contains `query` ignoring case, in
    /// catalog order. An empty query matches everything.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.field_contains(field, &needle))
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_books(&self.books)
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Titles in insertion order, duplicates included
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|b| b.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}
