//! Drives an [`Editor`] through a parsed script.

use std::io::{
  self,
  Write,
};

use the_history::Editor;

use crate::{
  config::Config,
  script::Command,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
  pub echo:       bool,
  pub show_depth: bool,
}

impl From<&Config> for SessionOptions {
  fn from(config: &Config) -> Self {
    Self {
      echo:       config.echo,
      show_depth: config.show_depth,
    }
  }
}

#[derive(Debug)]
pub struct Session<W> {
  editor:  Editor,
  out:     W,
  options: SessionOptions,
}

impl<W: Write> Session<W> {
  pub fn new(options: SessionOptions, out: W) -> Self {
    Self {
      editor: Editor::new(),
      out,
      options,
    }
  }

  pub fn editor(&self) -> &Editor {
    &self.editor
  }

  pub fn run(&mut self, commands: &[Command]) -> io::Result<()> {
    for command in commands {
      self.execute(command)?;
    }
    self.out.flush()
  }

  pub fn execute(&mut self, command: &Command) -> io::Result<()> {
    log::trace!("executing {command:?}");
    match command {
      Command::Add(text) => self.editor.add_content(text),
      Command::Save => self.editor.save(),
      Command::Undo => {
        if !self.editor.undo() {
          log::info!("nothing to undo");
        }
        if self.options.echo {
          self.print()?;
        }
      },
      Command::Redo => {
        if !self.editor.redo() {
          log::info!("nothing to redo");
        }
        if self.options.echo {
          self.print()?;
        }
      },
      Command::Print => self.print()?,
      Command::Dump => {
        serde_json::to_writer_pretty(&mut self.out, &self.editor.state())?;
        writeln!(self.out)?;
      },
    }
    Ok(())
  }

  fn print(&mut self) -> io::Result<()> {
    let content = self.editor.current_content();
    if self.options.show_depth {
      writeln!(
        self.out,
        "{content} [undo {} | redo {}]",
        self.editor.undo_depth(),
        self.editor.redo_depth()
      )
    } else {
      writeln!(self.out, "{content}")
    }
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}
