//! Linear undo/redo history over whole-document snapshots.
//!
//! [`Editor`] owns a live [`Document`], an undo and a redo
//! [`SnapshotSequence`], and a [`HistoryCursor`] marking how far an undo walk
//! has progressed. Saving commits the live document and forgets the redo
//! future; undo and redo shuttle snapshots between the two sequences.

pub mod cursor;
pub mod document;
pub mod editor;
pub mod sequence;
pub mod shared;

pub use cursor::HistoryCursor;
pub use document::Document;
pub use editor::{
  Editor,
  EditorState,
};
pub use sequence::{
  NodeId,
  SnapshotSequence,
};
pub use shared::SharedEditor;
