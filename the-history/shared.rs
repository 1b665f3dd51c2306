//! Thread-safe handle to a single [`Editor`].
//!
//! Every operation reads and writes the cursor and both sequences together,
//! so the whole editor sits behind one lock that is held for the duration of
//! each call.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
  document::Document,
  editor::{
    Editor,
    EditorState,
  },
};

#[derive(Debug, Default, Clone)]
pub struct SharedEditor {
  inner: Arc<Mutex<Editor>>,
}

impl SharedEditor {
  pub fn new(editor: Editor) -> Self {
    Self {
      inner: Arc::new(Mutex::new(editor)),
    }
  }

  pub fn add_content(&self, text: &str) {
    self.inner.lock().add_content(text);
  }

  pub fn save(&self) {
    self.inner.lock().save();
  }

  pub fn undo(&self) -> bool {
    self.inner.lock().undo()
  }

  pub fn redo(&self) -> bool {
    self.inner.lock().redo()
  }

  pub fn current_content(&self) -> String {
    self.inner.lock().current_content().to_owned()
  }

  pub fn document(&self) -> Document {
    self.inner.lock().document().clone()
  }

  pub fn state(&self) -> EditorState {
    self.inner.lock().state()
  }

  /// Run `f` with exclusive access, for sequences that must not interleave
  /// with other callers.
  pub fn with<R>(&self, f: impl FnOnce(&mut Editor) -> R) -> R {
    f(&mut self.inner.lock())
  }
}

impl From<Editor> for SharedEditor {
  fn from(editor: Editor) -> Self {
    Self::new(editor)
  }
}

#[cfg(test)]
mod tests {
  use std::thread;

  use super::*;

  #[test]
  fn handles_share_one_editor() {
    let editor = SharedEditor::default();
    let other = editor.clone();

    editor.add_content("a");
    editor.save();
    other.add_content("b");
    other.save();

    assert_eq!(editor.current_content(), "ab");
    assert!(other.undo());
    assert_eq!(editor.current_content(), "a");
    assert!(editor.redo());
    assert_eq!(other.document(), Document::from("ab"));
  }

  #[test]
  fn concurrent_edits_keep_history_consistent() {
    let editor = SharedEditor::default();
    let workers: Vec<_> = (0..4)
      .map(|worker| {
        let editor = editor.clone();
        thread::spawn(move || {
          for step in 0..50 {
            editor.with(|editor| {
              editor.add_content(&worker.to_string());
              editor.save();
            });
            if step % 3 == 0 {
              editor.undo();
            }
            if step % 5 == 0 {
              editor.redo();
            }
          }
        })
      })
      .collect();

    for worker in workers {
      worker.join().unwrap();
    }

    assert!(editor.with(|editor| editor.is_consistent()));
    let state = editor.state();
    assert_eq!(state.undo.len(), editor.with(|editor| editor.undo_depth()));
  }
}
