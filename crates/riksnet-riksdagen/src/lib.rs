//! Riksnet Riksdagen - client for the Riksdagen open-data document API
//!
//! Searches the paged `dokumentlista` endpoint and decodes each record
//! into a [`Document`] with its credited [`Author`]s. Results come back as
//! a lazy iterator that fetches one page per page boundary.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use riksnet_riksdagen::{Client, DocumentQuery};
//!
//! let client = Client::new(riksnet_riksdagen::DEFAULT_BASE_URL);
//! let query = DocumentQuery {
//!     text: "skola".to_string(),
//!     kind: "motion".to_string(),
//!     start: NaiveDate::from_ymd_opt(2020, 1, 1),
//!     end: NaiveDate::from_ymd_opt(2020, 12, 31),
//!     limit: 50,
//!     ..Default::default()
//! };
//!
//! for document in client.search(&query).expect("valid query") {
//!     let document = document.expect("page fetch failed");
//!     println!("{} ({} authors)", document, document.authors.len());
//! }
//! ```

pub mod client;
pub mod document;
pub mod kind;
pub mod pages;
pub mod query;
pub mod schema;
pub mod transport;

// Re-exports for convenience
pub use client::{Client, DEFAULT_BASE_URL};
pub use document::{Author, Document, UNKNOWN_PARTY};
pub use kind::DocumentKind;
pub use pages::{Documents, DocumentsById};
pub use query::DocumentQuery;
pub use transport::{HttpTransport, Transport};
