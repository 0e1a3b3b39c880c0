//! Document kinds accepted by the search endpoint

use riksnet_core::Error;

/// Document types the course tools know how to query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Motion,
    Proposition,
    Report,
    Interpellation,
    WrittenQuestion,
}

impl DocumentKind {
    pub const ALL: [Self; 5] = [
        Self::Motion,
        Self::Proposition,
        Self::Report,
        Self::Interpellation,
        Self::WrittenQuestion,
    ];

    /// Normalize a user-facing name or API code into a kind
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "motion" | "mot" => Some(Self::Motion),
            "proposition" | "prop" => Some(Self::Proposition),
            "betänkande" | "bet" => Some(Self::Report),
            "interpellation" | "ip" => Some(Self::Interpellation),
            "fråga" | "fr" => Some(Self::WrittenQuestion),
            _ => None,
        }
    }

    /// Like [`from_name`](Self::from_name), failing with a lookup error
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::from_name(s).ok_or_else(|| Error::lookup("document kind", s))
    }

    /// `doktyp` code sent to the API
    pub fn code(self) -> &'static str {
        match self {
            Self::Motion => "mot",
            Self::Proposition => "prop",
            Self::Report => "bet",
            Self::Interpellation => "ip",
            Self::WrittenQuestion => "fr",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
