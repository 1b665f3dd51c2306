use std::path::Path;

use anyhow::{
  Context,
  Result,
};
use log::LevelFilter;

/// Level picked from the `-v` count, falling back to the configured level.
pub fn level_for(verbosity: u8, configured: Option<LevelFilter>) -> LevelFilter {
  match verbosity {
    0 => configured.unwrap_or(LevelFilter::Warn),
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

/// Install the global logger, writing to `log_file` or stderr.
pub fn setup(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
  let dispatch = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        message
      ))
    })
    .level(level);

  let dispatch = match log_file {
    Some(path) => {
      let file = fern::log_file(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;
      dispatch.chain(file)
    },
    None => dispatch.chain(std::io::stderr()),
  };

  dispatch.apply().context("failed to install logger")?;
  Ok(())
}
