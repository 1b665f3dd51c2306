//! Doubly linked sequence of snapshots stored in a contiguous arena.
//!
//! Nodes live in a `Vec` and refer to their neighbours by [`NodeId`] instead
//! of by pointer, so the backward links carry no ownership. The sequence only
//! ever grows and shrinks at its tail, which keeps the arena dense: the tail
//! node always occupies the last slot.

use std::{
  iter::FusedIterator,
  ops::Index,
};

/// Position of a node inside a [`SnapshotSequence`].
///
/// An id stays valid until the node it names is removed. Indexing a sequence
/// with a stale id is a logic error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
  #[inline]
  pub const fn index(self) -> usize {
    self.0
  }
}

#[derive(Debug, Clone)]
struct Node<T> {
  value: T,
  prev:  Option<NodeId>,
  next:  Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct SnapshotSequence<T> {
  nodes: Vec<Node<T>>,
  head:  Option<NodeId>,
  tail:  Option<NodeId>,
}

impl<T> Default for SnapshotSequence<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> SnapshotSequence<T> {
  pub const fn new() -> Self {
    Self {
      nodes: Vec::new(),
      head:  None,
      tail:  None,
    }
  }

  /// Link a new node holding `value` after the current tail.
  pub fn append(&mut self, value: T) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node {
      value,
      prev: self.tail,
      next: None,
    });

    match self.tail {
      Some(tail) => self.nodes[tail.0].next = Some(id),
      None => self.head = Some(id),
    }
    self.tail = Some(id);
    id
  }

  /// Unlink and return the tail value. Does nothing on an empty sequence.
  pub fn remove_last(&mut self) -> Option<T> {
    let tail = self.tail?;
    debug_assert_eq!(tail.0 + 1, self.nodes.len(), "tail must occupy the last slot");

    let node = self.nodes.pop()?;
    match node.prev {
      Some(prev) => {
        self.nodes[prev.0].next = None;
        self.tail = Some(prev);
      },
      None => {
        self.head = None;
        self.tail = None;
      },
    }
    Some(node.value)
  }

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.head = None;
    self.tail = None;
  }

  #[inline]
  pub fn head(&self) -> Option<NodeId> {
    self.head
  }

  #[inline]
  pub fn tail(&self) -> Option<NodeId> {
    self.tail
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Whether `id` names a node that is still part of the sequence.
  #[inline]
  pub fn contains(&self, id: NodeId) -> bool {
    id.0 < self.nodes.len()
  }

  pub fn get(&self, id: NodeId) -> Option<&T> {
    self.nodes.get(id.0).map(|node| &node.value)
  }

  /// The node before `id`, towards the head.
  pub fn prev(&self, id: NodeId) -> Option<NodeId> {
    self.node(id).prev
  }

  /// The node after `id`, towards the tail.
  pub fn next(&self, id: NodeId) -> Option<NodeId> {
    self.node(id).next
  }

  pub fn first(&self) -> Option<&T> {
    self.head.map(|id| &self[id])
  }

  pub fn last(&self) -> Option<&T> {
    self.tail.map(|id| &self[id])
  }

  /// Number of `next` links between the head and `id`.
  pub fn position(&self, id: NodeId) -> Option<usize> {
    let mut current = self.head;
    let mut steps = 0;
    while let Some(node) = current {
      if node == id {
        return Some(steps);
      }
      current = self.nodes[node.0].next;
      steps += 1;
    }
    None
  }

  /// Walk the values from head to tail. Use `.rev()` to follow the `prev`
  /// links from the tail instead.
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      sequence:  self,
      front:     self.head,
      back:      self.tail,
      remaining: self.nodes.len(),
    }
  }

  /// Checks the structural invariants of the links.
  ///
  /// Head and tail are either both set or both unset, the head has no
  /// predecessor, the tail has no successor, and walking `next` from the
  /// head or `prev` from the tail visits every node exactly once.
  pub fn is_well_formed(&self) -> bool {
    if self.head.is_none() != self.tail.is_none() {
      return false;
    }
    if self.head.is_none() {
      return self.nodes.is_empty();
    }

    let (Some(head), Some(tail)) = (self.head, self.tail) else {
      return false;
    };
    if !self.contains(head) || !self.contains(tail) {
      return false;
    }
    if self.nodes[head.0].prev.is_some() || self.nodes[tail.0].next.is_some() {
      return false;
    }

    let walk = |start: NodeId, end: NodeId, step: fn(&Node<T>) -> Option<NodeId>| {
      let mut current = start;
      for _ in 1..self.nodes.len() {
        match self.nodes.get(current.0).and_then(step) {
          Some(id) => current = id,
          None => return false,
        }
      }
      current == end
    };

    walk(head, tail, |node| node.next) && walk(tail, head, |node| node.prev)
  }

  fn node(&self, id: NodeId) -> &Node<T> {
    match self.nodes.get(id.0) {
      Some(node) => node,
      None => panic!("stale snapshot node {id:?} (sequence holds {})", self.nodes.len()),
    }
  }
}

impl<T> Index<NodeId> for SnapshotSequence<T> {
  type Output = T;

  fn index(&self, id: NodeId) -> &T {
    &self.node(id).value
  }
}

impl<'a, T> IntoIterator for &'a SnapshotSequence<T> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

/// Double-ended iterator over the values of a [`SnapshotSequence`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
  sequence:  &'a SnapshotSequence<T>,
  front:     Option<NodeId>,
  back:      Option<NodeId>,
  remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    if self.remaining == 0 {
      return None;
    }
    let id = self.front?;
    let node = &self.sequence.nodes[id.0];
    self.front = node.next;
    self.remaining -= 1;
    Some(&node.value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  fn next_back(&mut self) -> Option<&'a T> {
    if self.remaining == 0 {
      return None;
    }
    let id = self.back?;
    let node = &self.sequence.nodes[id.0];
    self.back = node.prev;
    self.remaining -= 1;
    Some(&node.value)
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
  use super::*;

  fn collect(sequence: &SnapshotSequence<&'static str>) -> Vec<&'static str> {
    sequence.iter().copied().collect()
  }

  #[test]
  fn append_links_both_directions() {
    let mut seq = SnapshotSequence::new();
    let a = seq.append("a");
    let b = seq.append("b");
    let c = seq.append("c");

    assert_eq!(seq.head(), Some(a));
    assert_eq!(seq.tail(), Some(c));
    assert_eq!(seq.next(a), Some(b));
    assert_eq!(seq.next(c), None);
    assert_eq!(seq.prev(c), Some(b));
    assert_eq!(seq.prev(a), None);
    assert_eq!(seq[b], "b");
    assert_eq!(collect(&seq), ["a", "b", "c"]);
    assert!(seq.is_well_formed());
  }

  #[test]
  fn single_element_is_head_and_tail() {
    let mut seq = SnapshotSequence::new();
    let only = seq.append(1);
    assert_eq!(seq.head(), Some(only));
    assert_eq!(seq.tail(), Some(only));
    assert!(seq.is_well_formed());
  }

  #[test]
  fn remove_last_moves_tail_back() {
    let mut seq = SnapshotSequence::new();
    let a = seq.append("a");
    let b = seq.append("b");
    seq.append("c");

    assert_eq!(seq.remove_last(), Some("c"));
    assert_eq!(seq.tail(), Some(b));
    assert_eq!(seq.next(b), None);
    assert!(!seq.contains(NodeId(2)));

    assert_eq!(seq.remove_last(), Some("b"));
    assert_eq!(seq.remove_last(), Some("a"));
    assert!(seq.is_empty());
    assert_eq!(seq.head(), None);
    assert_eq!(seq.tail(), None);
    assert!(!seq.contains(a));
    assert!(seq.is_well_formed());
  }

  #[test]
  fn remove_last_on_empty_is_noop() {
    let mut seq: SnapshotSequence<u8> = SnapshotSequence::new();
    assert_eq!(seq.remove_last(), None);
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert!(seq.is_well_formed());
  }

  #[test]
  fn append_after_remove_reuses_slot() {
    let mut seq = SnapshotSequence::new();
    seq.append("a");
    let b = seq.append("b");
    seq.remove_last();
    let c = seq.append("c");

    assert_eq!(b, c);
    assert_eq!(collect(&seq), ["a", "c"]);
    assert!(seq.is_well_formed());
  }

  #[test]
  fn iter_walks_both_ways() {
    let mut seq = SnapshotSequence::new();
    for value in ["a", "b", "c", "d"] {
      seq.append(value);
    }

    let backwards: Vec<_> = seq.iter().rev().copied().collect();
    assert_eq!(backwards, ["d", "c", "b", "a"]);

    let mut iter = seq.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&"a"));
    assert_eq!(iter.next_back(), Some(&"d"));
    assert_eq!(iter.next(), Some(&"b"));
    assert_eq!(iter.next_back(), Some(&"c"));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
  }

  #[test]
  fn position_counts_from_head() {
    let mut seq = SnapshotSequence::new();
    let a = seq.append('a');
    let b = seq.append('b');
    assert_eq!(seq.position(a), Some(0));
    assert_eq!(seq.position(b), Some(1));
    seq.remove_last();
    assert_eq!(seq.position(b), None);
  }

  #[test]
  #[should_panic(expected = "stale snapshot node")]
  fn indexing_removed_node_panics() {
    let mut seq = SnapshotSequence::new();
    seq.append(1);
    let gone = seq.append(2);
    seq.remove_last();
    let _value = seq[gone];
  }

  #[test]
  fn clear_empties_sequence() {
    let mut seq = SnapshotSequence::new();
    seq.append(1);
    seq.append(2);
    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.first(), None);
    assert_eq!(seq.last(), None);
    assert!(seq.is_well_formed());
  }

  quickcheck::quickcheck! {
    fn links_stay_consistent(ops: Vec<Option<u8>>) -> bool {
      let mut seq = SnapshotSequence::new();
      let mut model = Vec::new();
      for op in ops {
        match op {
          Some(value) => {
            seq.append(value);
            model.push(value);
          },
          None => {
            if seq.remove_last() != model.pop() {
              return false;
            }
          },
        }
        if !seq.is_well_formed() || seq.head().is_none() != seq.tail().is_none() {
          return false;
        }
      }
      seq.iter().copied().eq(model.iter().copied())
        && seq.iter().rev().copied().eq(model.iter().rev().copied())
    }
  }
}
