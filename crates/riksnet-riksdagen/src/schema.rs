//! Wire format of the `dokumentlista` endpoint: JSON → Document

use riksnet_core::Error;
use serde::{Deserialize, Deserializer};

use crate::document::{Author, Document, UNKNOWN_PARTY};

// === Row structs (deserialized from JSON) ===

/// Top-level JSON envelope
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub dokumentlista: DocumentList,
}

/// Content of the envelope: one page of records
#[derive(Debug, Deserialize)]
pub struct DocumentList {
    /// Required key; `null` means an empty page
    #[serde(deserialize_with = "one_or_many")]
    pub dokument: Vec<DocumentRow>,

    /// Only its presence matters
    #[serde(rename = "@nasta_sida", default, deserialize_with = "present")]
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
pub struct DocumentRow {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub dok_id: Option<String>,

    #[serde(default)]
    pub datum: Option<String>,

    #[serde(default)]
    pub titel: Option<String>,

    #[serde(default)]
    pub undertitel: Option<String>,

    #[serde(default)]
    pub dokintressent: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorList {
    /// `null` entries are dropped when converting
    #[serde(default, deserialize_with = "one_or_many")]
    pub intressent: Vec<Option<PersonRow>>,
}

#[derive(Debug, Deserialize)]
pub struct PersonRow {
    pub intressent_id: String,

    #[serde(default)]
    pub namn: Option<String>,

    #[serde(default)]
    pub partibet: Option<String>,

    #[serde(default)]
    pub roll: Option<String>,
}

/// The API collapses single-element lists into a bare object
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}

fn present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    serde::de::IgnoredAny::deserialize(deserializer).map(|_| true)
}

// === Conversion ===

impl From<PersonRow> for Author {
    fn from(row: PersonRow) -> Self {
        let party = row
            .partibet
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_PARTY.to_string());
        Self {
            id: row.intressent_id,
            name: row.namn.unwrap_or_default(),
            party,
            role: row.roll.unwrap_or_default(),
        }
    }
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        let authors: Vec<Author> = row
            .dokintressent
            .map(|list| list.intressent.into_iter().flatten().map(Author::from).collect())
            .unwrap_or_default();
        Self {
            id: row.id,
            doc_id: row.dok_id,
            date: row.datum,
            title: row.titel,
            subtitle: row.undertitel,
            authors,
        }
    }
}

/// One decoded page of search results
#[derive(Debug)]
pub struct Page {
    pub documents: Vec<Document>,
    pub has_next_page: bool,
}

/// Decode a JSON response body into a page
pub fn decode_page(body: &str) -> Result<Page, Error> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("document list: {e}")))?;
    let list = envelope.dokumentlista;
    Ok(Page {
        documents: list.dokument.into_iter().map(Document::from).collect(),
        has_next_page: list.has_next_page,
    })
}

/// Split an `utformat=iddump` body into document ids
pub fn parse_id_dump(body: &str) -> Vec<String> {
    body.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
