//! Editor state machine: the live document plus its linear undo/redo history.
//!
//! # Model
//!
//! The state is fully described by the live [`Document`], the undo sequence,
//! the redo sequence and the [`HistoryCursor`]. There is no separate mode
//! flag.
//!
//! - [`Editor::add_content`] mutates the live document and never touches
//!   history.
//! - [`Editor::save`] is the only operation that grows the undo sequence and
//!   the only one that discards the redo sequence. It also ends any undo walk.
//! - [`Editor::undo`] steps the cursor back and restores the snapshot *before*
//!   the cursor, then moves the undo tail over to the redo sequence. The first
//!   undo after a series of saves therefore lands on the next-to-last save.
//! - [`Editor::redo`] moves the redo tail back onto the undo sequence, makes it
//!   live, and parks the cursor on it.
//!
//! # Example
//!
//! ```
//! use the_history::Editor;
//!
//! let mut editor = Editor::new();
//! editor.add_content("Hello, ");
//! editor.save();
//! editor.add_content("world!");
//! editor.save();
//!
//! assert!(editor.undo());
//! assert_eq!(editor.current_content(), "Hello, ");
//! assert!(editor.redo());
//! assert_eq!(editor.current_content(), "Hello, world!");
//! ```

use serde::Serialize;

use crate::{
  cursor::HistoryCursor,
  document::Document,
  sequence::SnapshotSequence,
};

#[derive(Debug, Default, Clone)]
pub struct Editor {
  document: Document,
  undo:     SnapshotSequence<Document>,
  redo:     SnapshotSequence<Document>,
  cursor:   HistoryCursor,
}

impl Editor {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append `text` to the live document.
  pub fn add_content(&mut self, text: &str) {
    self.document.push_str(text);
    log::trace!("appended {} bytes to live document", text.len());
  }

  /// Commit the live document to the undo history.
  ///
  /// Discards everything that could have been redone and ends any undo walk
  /// in progress.
  pub fn save(&mut self) {
    self.undo.append(self.document.clone());
    if !self.redo.is_empty() {
      log::debug!("save discarded {} redo snapshot(s)", self.redo.len());
    }
    self.redo.clear();
    self.cursor.clear();
    log::debug!(
      "saved snapshot #{} ({} bytes)",
      self.undo.len(),
      self.document.len()
    );
  }

  /// Step one snapshot back in history.
  ///
  /// Returns `false` without changing any state when the undo history is
  /// empty or when no snapshot precedes the cursor's new position.
  pub fn undo(&mut self) -> bool {
    let Some(target) = self.cursor.step_back(&self.undo) else {
      log::trace!("undo ignored: history is empty");
      return false;
    };
    let Some(restore) = self.undo.prev(target) else {
      log::debug!("undo ignored: nothing precedes snapshot {target:?}");
      return false;
    };

    self.cursor.set(target);
    self.document = self.undo[restore].clone();

    if let Some(tail) = self.undo.tail()
      && let Some(snapshot) = self.undo.remove_last()
    {
      self.redo.append(snapshot);
      self.cursor.forget(tail);
    }

    log::debug!(
      "undo restored snapshot {restore:?}; undo depth {}, redo depth {}",
      self.undo.len(),
      self.redo.len()
    );
    true
  }

  /// Re-apply the most recently undone snapshot.
  ///
  /// Returns `false` when there is nothing to redo.
  pub fn redo(&mut self) -> bool {
    let Some(snapshot) = self.redo.remove_last() else {
      log::trace!("redo ignored: nothing to redo");
      return false;
    };

    self.document = snapshot.clone();
    let tail = self.undo.append(snapshot);
    self.cursor.set(tail);

    log::debug!(
      "redo restored snapshot {tail:?}; undo depth {}, redo depth {}",
      self.undo.len(),
      self.redo.len()
    );
    true
  }

  pub fn current_content(&self) -> &str {
    self.document.text()
  }

  pub fn document(&self) -> &Document {
    &self.document
  }

  pub fn cursor(&self) -> HistoryCursor {
    self.cursor
  }

  pub fn undo_history(&self) -> &SnapshotSequence<Document> {
    &self.undo
  }

  pub fn redo_history(&self) -> &SnapshotSequence<Document> {
    &self.redo
  }

  #[inline]
  pub fn undo_depth(&self) -> usize {
    self.undo.len()
  }

  #[inline]
  pub fn redo_depth(&self) -> usize {
    self.redo.len()
  }

  /// Whether [`undo`](Self::undo) would change anything.
  pub fn can_undo(&self) -> bool {
    self
      .cursor
      .step_back(&self.undo)
      .and_then(|target| self.undo.prev(target))
      .is_some()
  }

  pub fn can_redo(&self) -> bool {
    !self.redo.is_empty()
  }

  /// Both sequences are well formed and the cursor names a live undo node.
  pub fn is_consistent(&self) -> bool {
    let cursor_valid = match self.cursor.node() {
      Some(id) => self.undo.contains(id),
      None => true,
    };
    cursor_valid && self.undo.is_well_formed() && self.redo.is_well_formed()
  }

  /// Owned, serializable view of the whole state.
  pub fn state(&self) -> EditorState {
    EditorState {
      content: self.document.text().to_owned(),
      undo:    self.undo.iter().cloned().collect(),
      redo:    self.redo.iter().cloned().collect(),
      cursor:  self.cursor.node().and_then(|id| self.undo.position(id)),
    }
  }
}

/// Snapshot of an [`Editor`] for inspection.
///
/// Histories are listed from oldest to newest; `cursor` is the offset of the
/// cursor node from the head of `undo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EditorState {
  pub content: String,
  pub undo:    Vec<Document>,
  pub redo:    Vec<Document>,
  pub cursor:  Option<usize>,
}
