//! Position of an in-progress undo walk.

use crate::sequence::{
  NodeId,
  SnapshotSequence,
};

/// Marks where a multi-step undo walk currently sits in the undo sequence.
///
/// The cursor is independent from the sequence's own head and tail. When set
/// it must name a node that is still a member of the undo sequence, so any
/// removal of that node has to [`clear`](Self::clear) or reassign it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCursor {
  /// Not in the middle of an undo walk.
  #[default]
  Unset,
  At(NodeId),
}

impl HistoryCursor {
  #[inline]
  pub const fn is_set(self) -> bool {
    matches!(self, Self::At(_))
  }

  #[inline]
  pub const fn node(self) -> Option<NodeId> {
    match self {
      Self::Unset => None,
      Self::At(id) => Some(id),
    }
  }

  pub fn set(&mut self, id: NodeId) {
    *self = Self::At(id);
  }

  pub fn clear(&mut self) {
    *self = Self::Unset;
  }

  /// The position one undo step further back, without moving the cursor.
  ///
  /// An unset cursor starts at the tail. A set cursor moves to its
  /// predecessor, or stays put when it already sits on the head. Returns
  /// `None` only for an empty sequence.
  pub fn step_back<T>(self, sequence: &SnapshotSequence<T>) -> Option<NodeId> {
    match self {
      Self::Unset => sequence.tail(),
      Self::At(id) => {
        assert!(
          sequence.contains(id),
          "history cursor points at removed node {id:?}"
        );
        Some(sequence.prev(id).unwrap_or(id))
      },
    }
  }

  /// Reset the cursor if `removed` was the node it pointed at.
  ///
  /// The removed node was always the tail, and its predecessor is the new
  /// tail, so the next [`step_back`](Self::step_back) from `Unset` lands
  /// exactly where stepping back from the removed node would have.
  pub fn forget(&mut self, removed: NodeId) {
    if *self == Self::At(removed) {
      log::trace!("history cursor released removed node {removed:?}");
      self.clear();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unset_steps_to_tail() {
    let mut seq = SnapshotSequence::new();
    seq.append("a");
    let b = seq.append("b");
    assert_eq!(HistoryCursor::Unset.step_back(&seq), Some(b));
  }

  #[test]
  fn set_steps_to_predecessor() {
    let mut seq = SnapshotSequence::new();
    let a = seq.append("a");
    let b = seq.append("b");
    assert_eq!(HistoryCursor::At(b).step_back(&seq), Some(a));
  }

  #[test]
  fn head_stays_put() {
    let mut seq = SnapshotSequence::new();
    let a = seq.append("a");
    seq.append("b");
    assert_eq!(HistoryCursor::At(a).step_back(&seq), Some(a));
  }

  #[test]
  fn empty_sequence_has_nowhere_to_go() {
    let seq: SnapshotSequence<&str> = SnapshotSequence::new();
    assert_eq!(HistoryCursor::Unset.step_back(&seq), None);
  }

  #[test]
  #[should_panic(expected = "removed node")]
  fn stale_cursor_is_a_defect() {
    let mut seq = SnapshotSequence::new();
    seq.append("a");
    let b = seq.append("b");
    seq.remove_last();
    HistoryCursor::At(b).step_back(&seq);
  }

  #[test]
  fn forget_only_clears_matching_node() {
    let mut seq = SnapshotSequence::new();
    let a = seq.append("a");
    let b = seq.append("b");

    let mut cursor = HistoryCursor::At(a);
    cursor.forget(b);
    assert_eq!(cursor.node(), Some(a));

    cursor.set(b);
    cursor.forget(b);
    assert!(!cursor.is_set());
  }
}
