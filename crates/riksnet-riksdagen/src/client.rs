//! Riksdagen document API client

use riksnet_core::Error;

use crate::document::Document;
use crate::pages::{Documents, DocumentsById};
use crate::query::DocumentQuery;
use crate::schema::{self, Page};
use crate::transport::{HttpTransport, Transport};

/// Public document list endpoint
pub const DEFAULT_BASE_URL: &str = "https://data.riksdagen.se/dokumentlista/";

/// Client over a [`Transport`]; the live one by default.
///
/// Holds no state between calls: every search starts its own page counter
/// and every page fetch is a fresh request.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(base_url))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Start a paged search.
    ///
    /// Fails before any request when `limit` is zero or `kind` is unknown.
    /// The returned iterator fetches pages lazily and yields at most
    /// `query.limit` documents.
    pub fn search(&self, query: &DocumentQuery) -> Result<Documents<'_, T>, Error> {
        let kind = query.validate()?;
        log::debug!(
            "search {kind} {:?} ({:?}..{:?}), limit {}",
            query.text,
            query.start,
            query.end,
            query.limit
        );
        Ok(Documents::new(self, query.search_params(kind), query.limit))
    }

    /// Ids of every document matching `query`, in one unpaged request.
    ///
    /// `sort`, `exact` and `limit` are ignored.
    pub fn ids(&self, query: &DocumentQuery) -> Result<Vec<String>, Error> {
        let kind = query.validate()?;
        let body = self.transport.get(&query.id_dump_params(kind))?;
        let ids = schema::parse_id_dump(&body);
        log::debug!("id dump for {kind} {:?}: {} ids", query.text, ids.len());
        Ok(ids)
    }

    /// Fetch documents one request per id, stopping after `limit`.
    pub fn documents_by_id<I>(
        &self,
        ids: I,
        limit: usize,
    ) -> Result<DocumentsById<'_, T, I::IntoIter>, Error>
    where
        I: IntoIterator<Item = String>,
    {
        if limit == 0 {
            return Err(Error::InvalidArgument(
                "limit must be a positive integer".to_string(),
            ));
        }
        Ok(DocumentsById::new(self, ids.into_iter(), limit))
    }

    /// Fetch and decode one page of a search
    pub(crate) fn fetch_page(
        &self,
        params: &[(&'static str, String)],
        page: u32,
    ) -> Result<Page, Error> {
        let mut params = params.to_vec();
        params.push(("p", page.to_string()));
        let body = self.transport.get(&params)?;
        schema::decode_page(&body)
    }

    /// Fetch the single document with id `id`
    pub(crate) fn fetch_document(&self, id: &str) -> Result<Document, Error> {
        let params = [("id", id.to_string()), ("utformat", "json".to_string())];
        let body = self.transport.get(&params)?;
        schema::decode_page(&body)?
            .documents
            .into_iter()
            .next()
            .ok_or_else(|| Error::Decode(format!("no document returned for id {id}")))
    }
}
