//! Case-insensitive tag type for categorizing notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A case-insensitive label attached to a note.
///
/// Tags are flat, normalized to lowercase internally, so `Work`, `work`,
/// and `WORK` are equivalent for filtering.
///
/// # Validation rules
/// - Non-empty after trimming
/// - Only alphanumeric characters, hyphens, and underscores
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored lowercase

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag, trimming whitespace and lowercasing.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty after normalization or
    /// contains characters other than alphanumerics, hyphens, and
    /// underscores.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags must contain only alphanumeric characters, hyphens, and underscores",
                normalized
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
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
    fn new_with_valid_tag() {
        let tag = Tag::new("errand").unwrap();
        assert_eq!(tag.as_str(), "errand");
    }

    #[test]
    fn normalizes_to_lowercase() {
        let tag = Tag::new("Work").unwrap();
        assert_eq!(tag.as_str(), "work");
    }

    #[test]
    fn trims_whitespace() {
        let tag = Tag::new("  home  ").unwrap();
        assert_eq!(tag.as_str(), "home");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn allows_hyphens_and_underscores() {
        assert!(Tag::new("needs-review").is_ok());
        assert!(Tag::new("work_in_progress").is_ok());
        assert!(Tag::new("tag123").is_ok());
    }

    #[test]
    fn rejects_spaces_and_special_chars() {
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("tag@home").is_err());
        assert!(Tag::new("path/tag").is_err());
    }

    #[test]
    fn equality_case_insensitive() {
        assert_eq!(Tag::new("Work").unwrap(), Tag::new("WORK").unwrap());
    }

    #[test]
    fn hashset_deduplicates_case_variants() {
        let mut set = HashSet::new();
        set.insert(Tag::new("work").unwrap());
        set.insert(Tag::new("Work").unwrap());
        set.insert(Tag::new("WORK").unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ordering_is_lexicographic_on_normalized_form() {
        let mut tags = vec![Tag::new("Work").unwrap(), Tag::new("home").unwrap()];
        tags.sort();
        assert_eq!(tags[0].as_str(), "home");
        assert_eq!(tags[1].as_str(), "work");
    }

    #[test]
    fn serde_normalizes_on_deserialize() {
        let tag: Tag = serde_json::from_str("\"WORK\"").unwrap();
        assert_eq!(tag.as_str(), "work");
    }

    #[test]
    fn serde_rejects_invalid_on_deserialize() {
        let result: Result<Tag, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
