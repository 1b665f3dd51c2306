use std::path::PathBuf;

use anyhow::Result;
use clap::{
  ArgAction,
  Parser,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptSource {
  /// The built-in demo session.
  Demo,
  Stdin,
  File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct CliOptions {
  pub script:      ScriptSource,
  pub verbosity:   u8,
  pub log_file:    Option<PathBuf>,
  pub config_file: Option<PathBuf>,
  pub echo:        Option<bool>,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }
}

#[derive(Parser, Debug)]
#[command(
  name = "the-undo",
  about = "Replay an editing script against a linear undo/redo history",
  version
)]
struct RawCli {
  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(short = 'c', long = "config", value_name = "FILE")]
  config_file: Option<PathBuf>,

  /// Print the document after every undo and redo
  #[arg(long = "echo", conflicts_with = "no_echo")]
  echo: bool,

  /// Only print the document on `print`
  #[arg(long = "no-echo")]
  no_echo: bool,

  /// Script to run, `-` for stdin (runs the demo when omitted)
  #[arg(value_name = "SCRIPT")]
  script: Option<PathBuf>,
}

impl TryFrom<RawCli> for CliOptions {
  type Error = anyhow::Error;

  fn try_from(raw: RawCli) -> Result<Self> {
    let script = match raw.script {
      None => ScriptSource::Demo,
      Some(path) if path.as_os_str() == "-" => ScriptSource::Stdin,
      Some(path) => ScriptSource::File(path),
    };

    let echo = match (raw.echo, raw.no_echo) {
      (true, _) => Some(true),
      (_, true) => Some(false),
      _ => None,
    };

    Ok(CliOptions {
      script,
      verbosity: raw.verbosity,
      log_file: raw.log_file,
      config_file: raw.config_file,
      echo,
    })
  }
}
