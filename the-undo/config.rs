use std::{
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
  str::FromStr,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Print the live document after every undo and redo.
  pub echo:       bool,
  /// Suffix echoed lines with the undo/redo depths.
  pub show_depth: bool,
  /// Log level used when no `-v` flag is given.
  pub log_level:  Option<LevelFilter>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      echo:       true,
      show_depth: false,
      log_level:  None,
    }
  }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigRaw {
  echo:       Option<bool>,
  show_depth: Option<bool>,
  log_level:  Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file '{}'", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("bad config: {0}")]
  BadConfig(#[from] toml::de::Error),
  #[error("bad config: unknown log level `{0}`")]
  LogLevel(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl TryFrom<ConfigRaw> for Config {
  type Error = ConfigError;

  fn try_from(raw: ConfigRaw) -> Result<Self> {
    let defaults = Self::default();
    let log_level = raw
      .log_level
      .map(|level| LevelFilter::from_str(&level).map_err(|_| ConfigError::LogLevel(level)))
      .transpose()?;

    Ok(Self {
      echo: raw.echo.unwrap_or(defaults.echo),
      show_depth: raw.show_depth.unwrap_or(defaults.show_depth),
      log_level,
    })
  }
}

impl FromStr for Config {
  type Err = ConfigError;

  fn from_str(source: &str) -> Result<Self> {
    let raw: ConfigRaw = toml::from_str(source)?;
    raw.try_into()
  }
}

impl Config {
  /// Load `specified` if given, otherwise the default config file.
  ///
  /// A missing default file yields the built-in defaults; a missing
  /// explicitly requested file is an error.
  pub fn load(specified: Option<&Path>) -> Result<Self> {
    if let Some(path) = specified {
      return Self::load_file(path);
    }

    let Some(path) = default_config_file() else {
      log::warn!("could not determine config directory, using defaults");
      return Ok(Self::default());
    };
    if !path.exists() {
      return Ok(Self::default());
    }
    Self::load_file(&path)
  }

  fn load_file(path: &Path) -> Result<Self> {
    let source = fs::read_to_string(path).map_err(|source| {
      ConfigError::Read {
        path: path.to_path_buf(),
        source,
      }
    })?;
    source.parse()
  }
}

pub fn default_config_file() -> Option<PathBuf> {
  let strategy = choose_base_strategy().ok()?;
  Some(strategy.config_dir().join("the-undo").join("config.toml"))
}
