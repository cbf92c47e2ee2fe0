//! Book domain model
//!
//! A book is a plain value: it has no identity beyond its fields. The title
//! doubles as the lookup key for removal and is always compared without
//! regard to case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year. Not range-checked here; the CLI limits input to 0..=2100.
    pub year: i64,
    pub genre: String,
    /// Whether the owner has read it
    pub read: bool,
}

impl Book {
    /// Creates a new book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Returns true if this book's title equals `title`, ignoring case
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Returns true if the selected field contains `needle` as a substring.
    ///
    /// `needle` must already be lowercased; see [`Catalog::search`](super::Catalog::search).
    pub(crate) fn field_contains(&self, field: SearchField, needle: &str) -> bool {
        self.field(field).to_lowercase().contains(needle)
    }

    /// Returns the value of a searchable field
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        }
    }

    /// Returns a short read-status marker for listings
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "[x] Read"
        } else {
            "[ ] Unread"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Field a search query is matched against
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
    }

    #[test]
    fn title_match_ignores_case() {
        let book = dune();
        assert!(book.has_title("dune"));
        assert!(book.has_title("DUNE"));
        assert!(!book.has_title("Dune Messiah"));
    }

    #[test]
    fn field_contains_substring() {
        let book = dune();
        assert!(book.field_contains(SearchField::Title, "un"));
        assert!(book.field_contains(SearchField::Author, "herb"));
        assert!(!book.field_contains(SearchField::Author, "dune"));
        assert!(book.field_contains(SearchField::Title, ""));
    }

    #[test]
    fn display_includes_status() {
        let mut book = dune();
        assert_eq!(
            book.to_string(),
            "Dune by Frank Herbert (1965) - Sci-Fi - [x] Read"
        );

        book.read = false;
        assert!(book.to_string().ends_with("[ ] Unread"));
    }

    #[test]
    fn serializes_with_plain_keys() {
        let json = serde_json::to_value(dune()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "year": 1965,
                "genre": "Sci-Fi",
                "read": true
            })
        );
    }

    #[test]
    fn rejects_record_missing_fields() {
        let result: Result<Book, _> = serde_json::from_str(r#"{"title": "Dune"}"#);
        assert!(result.is_err());
    }
}
