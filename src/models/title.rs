use serde::{Deserialize, Serialize};

/// Tagged title identifier, decoded once from the raw id's type prefix.
///
/// Movie ids are `tm`-prefixed, show ids `ts`-prefixed. Downstream code
/// routes rows by this tag instead of re-inspecting the string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleKey {
    Movie(String),
    Show(String),
}

impl TitleKey {
    /// Decodes a raw title id. Returns `None` when the prefix is neither
    /// `tm` nor `ts`, which callers treat as source schema drift.
    #[must_use]
    pub fn parse(raw_id: &str) -> Option<Self> {
        if raw_id.starts_with("tm") {
            Some(Self::Movie(raw_id.to_string()))
        } else if raw_id.starts_with("ts") {
            Some(Self::Show(raw_id.to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Movie(id) | Self::Show(id) => id,
        }
    }

    #[must_use]
    pub const fn is_movie(&self) -> bool {
        matches!(self, Self::Movie(_))
    }

    /// Splits into `(movie_id, show_id)` with exactly one side populated,
    /// matching the bridge-table column pair.
    #[must_use]
    pub fn fk_pair(&self) -> (Option<String>, Option<String>) {
        match self {
            Self::Movie(id) => (Some(id.clone()), None),
            Self::Show(id) => (None, Some(id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_prefix() {
        let key = TitleKey::parse("tm120434").unwrap();
        assert_eq!(key, TitleKey::Movie("tm120434".to_string()));
        assert!(key.is_movie());
        assert_eq!(key.id(), "tm120434");
    }

    #[test]
    fn test_parse_show_prefix() {
        let key = TitleKey::parse("ts20334").unwrap();
        assert_eq!(key, TitleKey::Show("ts20334".to_string()));
        assert!(!key.is_movie());
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert!(TitleKey::parse("xx999").is_none());
        assert!(TitleKey::parse("").is_none());
        assert!(TitleKey::parse("t1234").is_none());
    }

    #[test]
    fn test_fk_pair_is_mutually_exclusive() {
        let (movie_id, show_id) = TitleKey::parse("tm1").unwrap().fk_pair();
        assert_eq!(movie_id.as_deref(), Some("tm1"));
        assert!(show_id.is_none());

        let (movie_id, show_id) = TitleKey::parse("ts1").unwrap().fk_pair();
        assert!(movie_id.is_none());
        assert_eq!(show_id.as_deref(), Some("ts1"));
    }
}
