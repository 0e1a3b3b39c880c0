//! Error taxonomy shared by the API client and the graph tools

use crate::http::TransportError;

/// Errors surfaced by document fetching, decoding and palette lookups.
///
/// Nothing inside the library catches these; every variant reaches the
/// immediate caller (for lazy document sequences, at the item whose fetch
/// or decode failed).
#[derive(Debug)]
pub enum Error {
    /// Network or HTTP status failure
    Transport(TransportError),
    /// Response body is not valid JSON or lacks an expected envelope key
    Decode(String),
    /// Unrecognized code in a static table (document kind, party)
    Lookup { table: &'static str, key: String },
    /// Caller-supplied argument outside its valid range
    InvalidArgument(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn lookup(table: &'static str, key: impl Into<String>) -> Self {
        Self::Lookup {
            table,
            key: key.into(),
        }
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "{e}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Lookup { table, key } => write!(f, "unknown {table}: {key:?}"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lookup_quotes_key() {
        let err = Error::lookup("document kind", "essay");
        assert_eq!(format!("{err}"), "unknown document kind: \"essay\"");
        assert!(err.is_lookup());
    }

    #[test]
    fn display_transport_passes_through() {
        let err = Error::from(TransportError::Http {
            status: Some(503),
            message: "unavailable".to_string(),
        });
        assert_eq!(format!("{err}"), "HTTP 503: unavailable");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn serde_error_becomes_decode() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err = Error::from(parse.unwrap_err());
        assert!(matches!(err, Error::Decode(_)));
        assert!(format!("{err}").starts_with("decode error:"));
    }

    #[test]
    fn invalid_argument_not_lookup() {
        let err = Error::InvalidArgument("limit must be positive".to_string());
        assert!(!err.is_lookup());
        assert_eq!(
            format!("{err}"),
            "invalid argument: limit must be positive"
        );
    }
}
