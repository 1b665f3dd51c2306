//! Line-oriented editing scripts.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! add <text>   append text to the live document
//! save         commit the live document to history
//! undo
//! redo
//! print        write the live document
//! dump         write the full editor state as JSON
//! ```
//!
//! The text of `add` is everything after the single space that follows the
//! command. It understands the escapes `\s` (space), `\n`, `\t` and `\\`, so
//! trailing whitespace can be spelled out.

use thiserror::Error;

/// Built-in script replaying the reference session.
pub const DEMO: &str = include_str!("demo.undo");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Add(String),
  Save,
  Undo,
  Redo,
  Print,
  Dump,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
  #[error("line {line}: unknown command `{command}`")]
  UnknownCommand { line: usize, command: String },
  #[error("line {line}: `add` needs some text")]
  MissingText { line: usize },
  #[error("line {line}: `{command}` takes no arguments")]
  UnexpectedArgument { line: usize, command: String },
  #[error("line {line}: unknown escape `\\{escape}`")]
  InvalidEscape { line: usize, escape: char },
  #[error("line {line}: dangling `\\` at end of line")]
  DanglingEscape { line: usize },
}

pub type Result<T> = std::result::Result<T, ScriptError>;

pub fn parse(source: &str) -> Result<Vec<Command>> {
  let mut commands = Vec::new();
  for (index, raw) in source.lines().enumerate() {
    if let Some(command) = parse_line(index + 1, raw)? {
      commands.push(command);
    }
  }
  log::debug!("parsed {} script command(s)", commands.len());
  Ok(commands)
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Command>> {
  let trimmed = raw.trim_start();
  if trimmed.is_empty() || trimmed.starts_with('#') {
    return Ok(None);
  }

  let (name, argument) = match trimmed.split_once(' ') {
    Some((name, rest)) => (name, Some(rest)),
    None => (trimmed.trim_end(), None),
  };

  let command = match name {
    "add" => {
      let text = argument.filter(|text| !text.is_empty());
      let Some(text) = text else {
        return Err(ScriptError::MissingText { line });
      };
      return unescape(line, text).map(|text| Some(Command::Add(text)));
    },
    "save" => Command::Save,
    "undo" => Command::Undo,
    "redo" => Command::Redo,
    "print" => Command::Print,
    "dump" => Command::Dump,
    _ => {
      return Err(ScriptError::UnknownCommand {
        line,
        command: name.to_owned(),
      });
    },
  };

  if argument.is_some_and(|rest| !rest.trim().is_empty()) {
    return Err(ScriptError::UnexpectedArgument {
      line,
      command: name.to_owned(),
    });
  }
  Ok(Some(command))
}

fn unescape(line: usize, text: &str) -> Result<String> {
  let mut out = String::with_capacity(text.len());
  let mut chars = text.chars();
  while let Some(ch) = chars.next() {
    if ch != '\\' {
      out.push(ch);
      continue;
    }
    match chars.next() {
      Some('s') => out.push(' '),
      Some('n') => out.push('\n'),
      Some('t') => out.push('\t'),
      Some('\\') => out.push('\\'),
      Some(escape) => return Err(ScriptError::InvalidEscape { line, escape }),
      None => return Err(ScriptError::DanglingEscape { line }),
    }
  }
  Ok(out)
}
