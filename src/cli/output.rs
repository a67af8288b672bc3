//! Display formatting for listings and picker menus.

use chrono::{DateTime, Local, Utc};

use crate::domain::Tag;

/// Maximum characters of content shown in a listing line.
const PREVIEW_WIDTH: usize = 100;

/// Formats a timestamp the way listings show it, in local time:
/// `3:04PM Tue, Jan 02 2024`.
pub fn pretty_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%-I:%M%p %a, %b %d %Y")
        .to_string()
}

/// First 100 characters of content, flattened to a single line.
pub fn preview(content: &str) -> String {
    content
        .chars()
        .take(PREVIEW_WIDTH)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

/// ` [a,b]` annotation for tagged notes, empty otherwise.
pub fn tag_suffix(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
    format!(" [{}]", names.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("Buy milk\nand eggs"), "Buy milk and eggs");
    }

    #[test]
    fn preview_truncates_long_content() {
        let long = "x".repeat(500);
        assert_eq!(preview(&long).chars().count(), 100);
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let long = "é".repeat(150);
        assert_eq!(preview(&long).chars().count(), 100);
    }

    #[test]
    fn tag_suffix_empty_for_untagged() {
        assert_eq!(tag_suffix(&[]), "");
    }

    #[test]
    fn tag_suffix_joins_with_commas() {
        let tags = vec![Tag::new("work").unwrap(), Tag::new("urgent").unwrap()];
        assert_eq!(tag_suffix(&tags), " [work,urgent]");
    }

    #[test]
    fn pretty_time_has_no_padded_hour() {
        let dt = DateTime::parse_from_rfc3339("2024-01-02T15:04:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let s = pretty_time(dt);
        // Local offset varies; just check the shape is non-empty and
        // carries the year.
        assert!(s.contains("2024"));
        assert!(!s.starts_with('0'));
    }
}
