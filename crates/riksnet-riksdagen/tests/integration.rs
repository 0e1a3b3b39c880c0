//! Integration tests for riksnet-riksdagen
//!
//! These tests hit the live Riksdagen API and are marked #[ignore] by default.
//! Run with: cargo test -p riksnet-riksdagen --test integration -- --ignored

use chrono::NaiveDate;
use riksnet_riksdagen::{Client, DocumentQuery};

fn school_motions(limit: usize) -> DocumentQuery {
    DocumentQuery {
        text: "skola".to_string(),
        kind: "motion".to_string(),
        start: NaiveDate::from_ymd_opt(2019, 1, 1),
        end: NaiveDate::from_ymd_opt(2019, 12, 31),
        limit,
        ..Default::default()
    }
}

/// Run with: cargo test -p riksnet-riksdagen --test integration -- --ignored search_respects_limit
#[test]
#[ignore]
fn search_respects_limit() {
    let client = Client::default();

    let documents: Vec<_> = client
        .search(&school_motions(30))
        .expect("query should be valid")
        .collect::<Result<_, _>>()
        .expect("search should succeed");

    assert!(!documents.is_empty(), "expected some motions about schools");
    assert!(
        documents.len() <= 30,
        "limit exceeded: {} documents",
        documents.len()
    );
    assert!(
        documents.iter().any(|d| !d.authors.is_empty()),
        "motions should carry authors"
    );
}

/// Run with: cargo test -p riksnet-riksdagen --test integration -- --ignored id_dump_then_fetch
#[test]
#[ignore]
fn id_dump_then_fetch() {
    let client = Client::default();

    let ids = client
        .ids(&school_motions(1))
        .expect("id dump should succeed");
    assert!(!ids.is_empty(), "expected at least one id");

    let documents: Vec<_> = client
        .documents_by_id(ids, 3)
        .expect("limit is positive")
        .collect::<Result<_, _>>()
        .expect("per-id fetch should succeed");
    assert!(documents.len() <= 3);
}
