//! Party colours for author nodes

use std::collections::BTreeMap;

use riksnet_core::Error;

use crate::aggregate::Node;

/// Colours of the Riksdag parties, past and present. `-` is the sentinel for
/// authors without a party.
const DEFAULT_COLORS: [(&str, &str); 14] = [
    ("V", "#DA291C"),
    ("S", "#E8112d"),
    ("MP", "#83CF39"),
    ("C", "#009933"),
    ("FP", "#006AB3"),
    ("L", "#006AB3"),
    ("M", "#52BDEC"),
    ("KD", "#000077"),
    ("NYD", "pink"),
    ("KDS", "#000077"),
    ("SD", "#DDDD00"),
    ("FI", "#CD1B68"),
    ("PP", "#572B85"),
    ("-", "gray"),
];

/// Immutable party code → colour mapping.
///
/// Codes are stored upper-case and looked up case-insensitively. Unknown
/// codes are an error, never a fallback colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyPalette {
    colors: BTreeMap<String, String>,
}

impl Default for PartyPalette {
    fn default() -> Self {
        DEFAULT_COLORS.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for PartyPalette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(code, color)| (code.as_ref().to_uppercase(), color.into()))
                .collect(),
        }
    }
}

impl PartyPalette {
    /// Copy of this palette with `overrides` added or replacing entries
    pub fn with_overrides<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut colors = self.colors.clone();
        colors.extend(
            overrides
                .into_iter()
                .map(|(code, color)| (code.as_ref().to_uppercase(), color.into())),
        );
        Self { colors }
    }

    /// Colour for one party code
    pub fn color(&self, party: &str) -> Result<&str, Error> {
        self.colors
            .get(&party.to_uppercase())
            .map(String::as_str)
            .ok_or_else(|| Error::lookup("party", party))
    }

    /// One colour per node, in node order
    pub fn colors(&self, nodes: &[Node]) -> Result<Vec<&str>, Error> {
        nodes.iter().map(|node| self.color(&node.party)).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(party: &str) -> Node {
        Node {
            id: "0111".to_string(),
            name: "Anna Andersson".to_string(),
            party: party.to_string(),
        }
    }

    #[test]
    fn default_palette_lookups() {
        let palette = PartyPalette::default();
        assert_eq!(palette.len(), 14);
        assert_eq!(palette.color("S").unwrap(), "#E8112d");
        assert_eq!(palette.color("-").unwrap(), "gray");
        assert_eq!(palette.color("NYD").unwrap(), "pink");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let palette = PartyPalette::default();
        assert_eq!(palette.color("mp").unwrap(), "#83CF39");
        assert_eq!(palette.color("Kd").unwrap(), "#000077");
    }

    #[test]
    fn unknown_party_is_lookup_error() {
        let palette = PartyPalette::default();
        let err = palette.colors(&[node("S"), node("ZZ")]).unwrap_err();
        assert!(matches!(
            err,
            Error::Lookup { table: "party", ref key } if key == "ZZ"
        ));
    }

    #[test]
    fn colors_follow_node_order() {
        let palette = PartyPalette::default();
        let colors = palette.colors(&[node("V"), node("m"), node("-")]).unwrap();
        assert_eq!(colors, ["#DA291C", "#52BDEC", "gray"]);
    }

    #[test]
    fn overrides_extend_and_replace() {
        let palette = PartyPalette::default().with_overrides([("zz", "#123456"), ("S", "red")]);
        assert_eq!(palette.color("ZZ").unwrap(), "#123456");
        assert_eq!(palette.color("s").unwrap(), "red");
        assert_eq!(palette.len(), 15);
        // The original is untouched
        assert!(PartyPalette::default().color("ZZ").is_err());
    }

    #[test]
    fn iter_in_code_order() {
        let palette: PartyPalette = [("b", "2"), ("a", "1")].into_iter().collect();
        let entries: Vec<_> = palette.iter().collect();
        assert_eq!(entries, [("A", "1"), ("B", "2")]);
    }
}
