//! Core note types for notekeeper.
//!
//! This module defines the stored [`Note`], the [`NoteInput`] accepted on
//! create and update, and the [`NoteView`] returned by every read.

use serde::{Deserialize, Serialize};

/// Default number of content characters used when a note has no title.
pub const DEFAULT_TITLE_PREVIEW_CHARS: usize = 5;

/// A stored note.
///
/// The title is kept exactly as the caller supplied it; a missing title is
/// only filled in when a [`NoteView`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier assigned by the store.
    pub id: i64,

    /// Optional caller-supplied title.
    pub title: Option<String>,

    /// The note body.
    pub content: String,
}

impl Note {
    /// Create a new note.
    #[must_use]
    pub fn new(id: i64, title: Option<String>, content: String) -> Self {
        Self { id, title, content }
    }

    /// Check whether this note matches a search query.
    ///
    /// A missing or empty query matches every note. Otherwise the query must
    /// appear (case-sensitive) in the content or in the stored title. The
    /// synthesized title never takes part in matching.
    #[must_use]
    pub fn matches(&self, query: Option<&str>) -> bool {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return true;
        };

        self.content.contains(query)
            || self
                .title
                .as_deref()
                .is_some_and(|title| title.contains(query))
    }

    /// Apply a partial update. Fields absent from `input` are left alone.
    pub fn apply(&mut self, input: NoteInput) {
        if let Some(title) = input.title {
            self.title = Some(title);
        }
        if let Some(content) = input.content {
            self.content = content;
        }
    }

    /// Build the read-side view of this note.
    #[must_use]
    pub fn view(&self, preview_chars: usize) -> NoteView {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => title_preview(&self.content, preview_chars),
        };

        NoteView {
            id: self.id,
            title,
            content: self.content.clone(),
        }
    }
}

/// Request body for creating or updating a note.
///
/// An absent field and an explicit `null` are treated the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    /// New title, if any.
    #[serde(default)]
    pub title: Option<String>,

    /// New content, if any. Required on create.
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteInput {
    /// Input carrying only content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    /// Input carrying both title and content.
    #[must_use]
    pub fn with_title(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// A note as returned to callers, with the title always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    /// Identifier assigned by the store.
    pub id: i64,

    /// Stored title, or a prefix of the content when none was set.
    pub title: String,

    /// The note body.
    pub content: String,
}

/// Take the first `max_chars` characters of `content`.
///
/// Counts Unicode scalar values, so multi-byte text is never cut mid-character.
#[must_use]
pub fn title_preview(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}
