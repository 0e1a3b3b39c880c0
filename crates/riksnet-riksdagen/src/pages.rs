//! Lazy document sequences: paged search and per-id lookup

use std::iter::FusedIterator;

use riksnet_core::Error;

use crate::client::Client;
use crate::document::Document;
use crate::transport::Transport;

/// Paged search results.
///
/// One request per page boundary. After a page is loaded the search goes on
/// only while the documents loaded so far number fewer than `limit` AND the
/// API marked a next page. Never yields more than `limit` documents. The
/// first error is yielded once and ends the sequence.
pub struct Documents<'a, T> {
    client: &'a Client<T>,
    params: Vec<(&'static str, String)>,
    limit: usize,
    page: u32,
    loaded: usize,
    yielded: usize,
    has_more: bool,
    buffer: std::vec::IntoIter<Document>,
}

impl<'a, T: Transport> Documents<'a, T> {
    pub(crate) fn new(
        client: &'a Client<T>,
        params: Vec<(&'static str, String)>,
        limit: usize,
    ) -> Self {
        Self {
            client,
            params,
            limit,
            page: 1,
            loaded: 0,
            yielded: 0,
            has_more: true,
            buffer: Vec::new().into_iter(),
        }
    }

    /// Pages requested so far
    pub fn pages_fetched(&self) -> u32 {
        self.page - 1
    }

    fn load_next_page(&mut self) -> Result<(), Error> {
        let page = self.client.fetch_page(&self.params, self.page)?;
        let count = page.documents.len();
        self.loaded += count;
        self.has_more = self.loaded < self.limit && page.has_next_page;
        log::debug!(
            "page {}: {count} documents ({} total), next page: {}",
            self.page,
            self.loaded,
            page.has_next_page
        );
        self.page += 1;
        self.buffer = page.documents.into_iter();
        Ok(())
    }
}

impl<T: Transport> Iterator for Documents<'_, T> {
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.yielded >= self.limit {
                return None;
            }
            if let Some(document) = self.buffer.next() {
                self.yielded += 1;
                return Some(Ok(document));
            }
            if !self.has_more {
                return None;
            }
            if let Err(e) = self.load_next_page() {
                self.has_more = false;
                log::debug!("page {} failed: {e}", self.page);
                return Some(Err(e));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.yielded;
        let buffered = self.buffer.len().min(remaining);
        if self.has_more {
            (buffered, Some(remaining))
        } else {
            (buffered, Some(buffered))
        }
    }
}

impl<T: Transport> FusedIterator for Documents<'_, T> {}

/// Documents fetched one id at a time, at most `limit` of them.
pub struct DocumentsById<'a, T, I> {
    client: &'a Client<T>,
    ids: I,
    limit: usize,
    count: usize,
    failed: bool,
}

impl<'a, T: Transport, I: Iterator<Item = String>> DocumentsById<'a, T, I> {
    pub(crate) fn new(client: &'a Client<T>, ids: I, limit: usize) -> Self {
        Self {
            client,
            ids,
            limit,
            count: 0,
            failed: false,
        }
    }
}

impl<T: Transport, I: Iterator<Item = String>> Iterator for DocumentsById<'_, T, I> {
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.count >= self.limit {
            return None;
        }
        let id = self.ids.next()?;
        match self.client.fetch_document(&id) {
            Ok(document) => {
                self.count += 1;
                Some(Ok(document))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::DocumentQuery;
    use crate::transport::mock::{MockApi, page_body, page_of};
    use riksnet_core::TransportError;

    fn query(limit: usize) -> DocumentQuery {
        DocumentQuery {
            text: "skola".to_string(),
            limit,
            ..Default::default()
        }
    }

    #[test]
    fn stops_when_api_reports_last_page() {
        // 3 documents on page 1, 2 on page 2, no page 3
        let api = MockApi::new(|params| {
            Ok(match page_of(params) {
                1 => page_body(0, 3, true),
                2 => page_body(3, 2, false),
                p => panic!("unexpected request for page {p}"),
            })
        });
        let client = Client::with_transport(&api);

        let docs: Vec<Document> = client
            .search(&query(100))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 5);
        assert_eq!(api.request_count(), 2);
        assert_eq!(api.param(0, "p").as_deref(), Some("1"));
        assert_eq!(api.param(1, "p").as_deref(), Some("2"));
        let ids: Vec<_> = docs.iter().filter_map(|d| d.id.as_deref()).collect();
        assert_eq!(ids, ["doc0", "doc1", "doc2", "doc3", "doc4"]);
    }

    #[test]
    fn limit_caps_requests_and_output() {
        // Unlimited pages of 10
        let api = MockApi::new(|params| {
            let page = page_of(params) as usize;
            Ok(page_body((page - 1) * 10, 10, true))
        });
        let client = Client::with_transport(&api);

        let mut docs = client.search(&query(15)).unwrap();
        let collected: Vec<Document> = docs.by_ref().map(Result::unwrap).collect();
        assert_eq!(collected.len(), 15);
        assert_eq!(api.request_count(), 2);
        assert_eq!(docs.pages_fetched(), 2);
        assert!(docs.next().is_none());
        assert_eq!(api.request_count(), 2);
    }

    #[test]
    fn limit_on_page_boundary_needs_one_request() {
        let api = MockApi::new(|params| {
            let page = page_of(params) as usize;
            Ok(page_body((page - 1) * 10, 10, true))
        });
        let client = Client::with_transport(&api);

        assert_eq!(client.search(&query(10)).unwrap().count(), 10);
        assert_eq!(api.request_count(), 1);
    }

    #[test]
    fn pages_are_fetched_lazily() {
        let api = MockApi::new(|params| {
            let page = page_of(params) as usize;
            Ok(page_body((page - 1) * 10, 10, true))
        });
        let client = Client::with_transport(&api);

        let mut docs = client.search(&query(100)).unwrap();
        assert_eq!(api.request_count(), 0);
        docs.next();
        assert_eq!(api.request_count(), 1);
        for _ in 0..9 {
            docs.next();
        }
        assert_eq!(api.request_count(), 1);
        docs.next();
        assert_eq!(api.request_count(), 2);
    }

    #[test]
    fn failure_mid_search_is_yielded_then_fused() {
        let api = MockApi::new(|params| match page_of(params) {
            1 | 2 => Ok(page_body(0, 2, true)),
            _ => Err(TransportError::Http {
                status: Some(503),
                message: "unavailable".to_string(),
            }),
        });
        let client = Client::with_transport(&api);

        let results: Vec<_> = client.search(&query(100)).unwrap().collect();
        assert_eq!(results.len(), 5);
        assert!(results[..4].iter().all(Result::is_ok));
        assert!(matches!(
            results[4],
            Err(Error::Transport(ref e)) if e.status() == Some(503)
        ));
        assert_eq!(api.request_count(), 3);
    }

    #[test]
    fn malformed_page_is_decode_error() {
        let api = MockApi::new(|_| Ok(r#"{"unexpected": true}"#.to_string()));
        let client = Client::with_transport(&api);

        let mut docs = client.search(&query(100)).unwrap();
        assert!(matches!(docs.next(), Some(Err(Error::Decode(_)))));
        assert!(docs.next().is_none());
        assert_eq!(api.request_count(), 1);
    }

    #[test]
    fn empty_first_page_without_marker_ends_search() {
        let api = MockApi::new(|_| Ok(page_body(0, 0, false)));
        let client = Client::with_transport(&api);

        assert_eq!(client.search(&query(100)).unwrap().count(), 0);
        assert_eq!(api.request_count(), 1);
    }

    #[test]
    fn size_hint_bounded_by_limit() {
        let api = MockApi::new(|_| Ok(page_body(0, 10, true)));
        let client = Client::with_transport(&api);

        let docs = client.search(&query(15)).unwrap();
        assert_eq!(docs.size_hint(), (0, Some(15)));
    }

    #[test]
    fn by_id_stops_at_limit() {
        let api = MockApi::new(|params| {
            let id = params
                .iter()
                .find(|(k, _)| *k == "id")
                .map(|(_, v)| v.clone())
                .unwrap();
            let n: usize = id.trim_start_matches('D').parse().unwrap();
            Ok(page_body(n, 1, false))
        });
        let client = Client::with_transport(&api);
        let ids = ["D1", "D2", "D3", "D4"].map(String::from);

        let docs: Vec<Document> = client
            .documents_by_id(ids, 2)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].id.as_deref(), Some("doc2"));
        assert_eq!(api.request_count(), 2);
    }

    #[test]
    fn by_id_error_ends_sequence() {
        let api = MockApi::new(|_| Ok("not json".to_string()));
        let client = Client::with_transport(&api);
        let ids = vec!["D1".to_string(), "D2".to_string()];

        let results: Vec<_> = client.documents_by_id(ids, 10).unwrap().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(Error::Decode(_))));
        assert_eq!(api.request_count(), 1);
    }
}
