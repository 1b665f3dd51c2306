//! Command line host for the-history.
//!
//! Replays an editing script (or the built-in demo) against one editor and
//! prints the live document as the script asks for it.

mod cli;
mod config;
mod logging;
mod script;
mod session;

use std::{
  fs,
  io::{
    self,
    BufWriter,
    Read,
  },
};

use anyhow::{
  Context,
  Result,
};

use crate::{
  cli::{
    CliOptions,
    ScriptSource,
  },
  config::Config,
  session::{
    Session,
    SessionOptions,
  },
};

fn main() -> Result<()> {
  let options = CliOptions::parse()?;
  let config = Config::load(options.config_file.as_deref()).context("failed to load config")?;

  let level = logging::level_for(options.verbosity, config.log_level);
  logging::setup(level, options.log_file.as_deref())?;

  let source = read_script(&options.script)?;
  let commands = script::parse(&source).context("failed to parse script")?;

  let mut session_options = SessionOptions::from(&config);
  if let Some(echo) = options.echo {
    session_options.echo = echo;
  }

  let stdout = BufWriter::new(io::stdout().lock());
  let mut session = Session::new(session_options, stdout);
  session.run(&commands).context("failed to write output")?;
  log::info!(
    "finished with undo depth {}, redo depth {}",
    session.editor().undo_depth(),
    session.editor().redo_depth()
  );
  Ok(())
}

fn read_script(source: &ScriptSource) -> Result<String> {
  match source {
    ScriptSource::Demo => Ok(script::DEMO.to_owned()),
    ScriptSource::Stdin => {
      let mut buf = String::new();
      io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read script from stdin")?;
      Ok(buf)
    },
    ScriptSource::File(path) => {
      fs::read_to_string(path)
        .with_context(|| format!("failed to read script '{}'", path.display()))
    },
  }
}
