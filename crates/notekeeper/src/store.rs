//! In-memory note store.
//!
//! This module provides [`NoteStore`], the keyed collection behind the HTTP
//! API. Nothing is persisted; every process starts with an empty store.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::note::{Note, NoteInput, NoteView, DEFAULT_TITLE_PREVIEW_CHARS};

/// Thread-safe in-memory store for notes.
///
/// Ids are assigned from a counter starting at 0 that only advances when a
/// note is actually created. All access goes through a single mutex, so the
/// store can be shared between request handlers behind an `Arc`.
#[derive(Debug)]
pub struct NoteStore {
    inner: Mutex<Inner>,
    /// Characters of content used as the title of untitled notes.
    title_preview_chars: usize,
}

#[derive(Debug, Default)]
struct Inner {
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Create an empty store with the default title preview length.
    #[must_use]
    pub fn new() -> Self {
        Self::with_title_preview(DEFAULT_TITLE_PREVIEW_CHARS)
    }

    /// Create an empty store that synthesizes titles from the first
    /// `title_preview_chars` characters of content.
    ///
    /// # Panics
    ///
    /// Panics if `title_preview_chars` is 0.
    #[must_use]
    pub fn with_title_preview(title_preview_chars: usize) -> Self {
        assert!(title_preview_chars > 0, "title_preview_chars must be greater than 0");
        Self {
            inner: Mutex::new(Inner::default()),
            title_preview_chars,
        }
    }

    /// Number of content characters used for synthesized titles.
    #[must_use]
    pub fn title_preview_chars(&self) -> usize {
        self.title_preview_chars
    }

    /// List notes matching `query`, in ascending id order.
    ///
    /// A missing or empty query returns every note.
    #[must_use]
    pub fn list(&self, query: Option<&str>) -> Vec<NoteView> {
        let inner = self.inner.lock();
        inner
            .notes
            .values()
            .filter(|note| note.matches(query))
            .map(|note| note.view(self.title_preview_chars))
            .collect()
    }

    /// Get a note by its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoteNotFound`] if no note has this id.
    pub fn get(&self, id: i64) -> Result<NoteView> {
        let inner = self.inner.lock();
        inner
            .notes
            .get(&id)
            .map(|note| note.view(self.title_preview_chars))
            .ok_or(Error::NoteNotFound { id })
    }

    /// Create a note and return its view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `input` has no content. No id is
    /// consumed in that case.
    pub fn create(&self, input: NoteInput) -> Result<NoteView> {
        let content = input
            .content
            .ok_or_else(|| Error::invalid_input("note content is required"))?;

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let note = Note::new(id, input.title, content);
        let view = note.view(self.title_preview_chars);
        inner.notes.insert(id, note);

        debug!("Created note with id {}", id);
        Ok(view)
    }

    /// Partially update a note and return its new view.
    ///
    /// Only the fields present in `input` are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoteNotFound`] if no note has this id.
    pub fn update(&self, id: i64, input: NoteInput) -> Result<NoteView> {
        let mut inner = self.inner.lock();
        let note = inner
            .notes
            .get_mut(&id)
            .ok_or(Error::NoteNotFound { id })?;

        note.apply(input);

        debug!("Updated note with id {}", id);
        Ok(note.view(self.title_preview_chars))
    }

    /// Delete a note.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoteNotFound`] if no note has this id.
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.notes.remove(&id).is_none() {
            return Err(Error::NoteNotFound { id });
        }

        debug!("Deleted note with id {}", id);
        Ok(())
    }

    /// Number of stored notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().notes.len()
    }

    /// Whether the store holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().notes.is_empty()
    }
}
