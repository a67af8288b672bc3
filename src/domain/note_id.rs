//! ULID-based note identity with short display prefix and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use ulid::Ulid;

/// Stable identity of a note, assigned at creation and never changed.
///
/// Backed by a ULID: 26 Crockford Base32 characters, globally unique.
/// Listings and picker menus show the shorter [`prefix`](NoteId::prefix)
/// form; the full string is what gets persisted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a fresh identity.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Returns the 10-character display prefix.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..10].to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid identity string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_creates_valid_id() {
        let id = NoteId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 26);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn prefix_is_first_10_chars() {
        let id = NoteId::new();
        assert_eq!(id.prefix(), id.to_string()[..10].to_string());
    }

    #[test]
    fn parse_roundtrip() {
        let s = "01HQ3K5M7NXJK4QZPW8V2R6T9Y";
        let id: NoteId = s.parse().expect("should parse valid id");
        assert_eq!(id.to_string(), s);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-an-id".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn fresh_ids_are_unique() {
        let ids: Vec<NoteId> = (0..100).map(|_| NoteId::new()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).expect("should serialize");
        assert_eq!(json, format!("\"{}\"", id));
        let parsed: NoteId = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_error_mentions_value() {
        let err = "bad".parse::<NoteId>().unwrap_err();
        assert!(err.to_string().contains("'bad'"));
    }
}
