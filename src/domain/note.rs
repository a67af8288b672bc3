//! The Note record: stable identity, creation time, content, tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{NoteId, Tag};

/// A single persisted note.
///
/// `id` and `created` are fixed at creation; `content` changes through
/// edit/append and is never empty for a persisted note (empty input is
/// discarded before it reaches the store); `tags` are optional labels,
/// stored lowercase with duplicates removed.
///
/// The serde field names match the persisted schema: `created` is written
/// as `timestamp`, and `tags` is omitted when empty so records without
/// labels stay minimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,

    #[serde(rename = "timestamp")]
    created: DateTime<Utc>,

    content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<Tag>,
}

impl Note {
    /// Creates a note with the given identity and creation time.
    ///
    /// Duplicate tags are dropped, keeping first occurrence order.
    pub fn new(id: NoteId, created: DateTime<Utc>, content: String, tags: Vec<Tag>) -> Self {
        let mut deduped: Vec<Tag> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !deduped.contains(&tag) {
                deduped.push(tag);
            }
        }
        Self {
            id,
            created,
            content,
            tags: deduped,
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replaces the content wholesale.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Appends text on a new line, matching `content + "\n" + text`.
    pub fn append(&mut self, text: &str) {
        self.content.push('\n');
        self.content.push_str(text);
    }

    /// Case-insensitive tag membership (tags are stored normalized).
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}
