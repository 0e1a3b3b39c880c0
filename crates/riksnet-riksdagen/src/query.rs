//! Search parameters for the document list endpoint

use chrono::NaiveDate;
use riksnet_core::Error;

use crate::kind::DocumentKind;

/// Default sort key (`datum` = publication date)
pub const DEFAULT_SORT: &str = "datum";

/// Default maximum number of documents per search
pub const DEFAULT_LIMIT: usize = 100;

/// A document search.
///
/// `kind` is a user-facing name or API code (`"motion"`, `"mot"`, ...) and
/// is normalized when the search starts.
#[derive(Debug, Clone)]
pub struct DocumentQuery {
    /// Free-text search (`sok`)
    pub text: String,
    pub kind: String,
    /// Inclusive date range (`from` / `tom`)
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub sort: String,
    /// Exact phrase match (`exakt=1`)
    pub exact: bool,
    /// Maximum number of documents the search yields; must be positive
    pub limit: usize,
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: "motion".to_string(),
            start: None,
            end: None,
            sort: DEFAULT_SORT.to_string(),
            exact: false,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl DocumentQuery {
    /// Check `limit` and normalize `kind`
    pub fn validate(&self) -> Result<DocumentKind, Error> {
        if self.limit == 0 {
            return Err(Error::InvalidArgument(
                "limit must be a positive integer".to_string(),
            ));
        }
        DocumentKind::parse(&self.kind)
    }

    fn base_params(&self, kind: DocumentKind) -> Vec<(&'static str, String)> {
        let mut params = vec![("sok", self.text.clone()), ("doktyp", kind.code().to_string())];
        if let Some(start) = self.start {
            params.push(("from", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            params.push(("tom", end.format("%Y-%m-%d").to_string()));
        }
        params
    }

    /// Parameters for paged JSON search; the page number is added per request
    pub fn search_params(&self, kind: DocumentKind) -> Vec<(&'static str, String)> {
        let mut params = self.base_params(kind);
        params.push(("sort", self.sort.clone()));
        params.push(("exakt", u8::from(self.exact).to_string()));
        params.push(("utformat", "json".to_string()));
        params
    }

    /// Parameters for a single id-dump request (no paging, no sort)
    pub fn id_dump_params(&self, kind: DocumentKind) -> Vec<(&'static str, String)> {
        let mut params = self.base_params(kind);
        params.push(("utformat", "iddump".to_string()));
        params
    }
}
