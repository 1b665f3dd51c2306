//! The document value tracked by the editor history.

use std::fmt;

use serde::{
  Deserialize,
  Serialize,
};

/// Full text content of a document.
///
/// A document has no identity beyond its text: two documents are equal when
/// their contents are. Once a document is stored in a history sequence it is
/// never mutated again; only the editor's live document grows in place.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
  content: String,
}

impl Document {
  pub const fn new() -> Self {
    Self {
      content: String::new(),
    }
  }

  pub fn text(&self) -> &str {
    &self.content
  }

  /// Append `text` to the end of the content.
  pub fn push_str(&mut self, text: &str) {
    self.content.push_str(text);
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.content.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.content.is_empty()
  }

  pub fn into_string(self) -> String {
    self.content
  }
}

impl From<String> for Document {
  fn from(content: String) -> Self {
    Self { content }
  }
}

impl From<&str> for Document {
  fn from(content: &str) -> Self {
    Self {
      content: content.to_owned(),
    }
  }
}

impl AsRef<str> for Document {
  fn as_ref(&self) -> &str {
    &self.content
  }
}

impl PartialEq<str> for Document {
  fn eq(&self, other: &str) -> bool {
    self.content == other
  }
}

impl PartialEq<&str> for Document {
  fn eq(&self, other: &&str) -> bool {
    self.content == *other
  }
}

impl fmt::Display for Document {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.content)
  }
}
