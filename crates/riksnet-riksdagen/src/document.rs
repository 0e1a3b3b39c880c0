//! Decoded documents and their credited authors

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::Serialize;

/// Party code given to authors the API lists without one
pub const UNKNOWN_PARTY: &str = "-";

/// A person credited on a document.
///
/// Equality and hashing use `id` only: two records with the same
/// `intressent_id` are the same person.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub party: String,
    pub role: String,
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.party)
    }
}

/// One legislative document with its authors in credited order
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: Option<String>,
    pub doc_id: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub authors: Vec<Author>,
}

impl Document {
    /// Publication date, when `datum` starts with a `YYYY-MM-DD` date
    pub fn published(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?;
        let day = date.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document: {}", self.title.as_deref().unwrap_or("(untitled)"))
    }
}
