use std::io::IsTerminal;

use anyhow::anyhow;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global fmt subscriber.
/// `RUST_LOG` wins over `log.level`;
/// `log.ansi` forces colours on or off.
/// Calling this twice is harmless.
pub fn init_tracing(
  cfg: &Config
) -> anyhow::Result<()> {
  let default_level = cfg.log_level();
  let env_filter =
    EnvFilter::try_from_default_env()
      .or_else(|_| {
        EnvFilter::try_new(&default_level)
      })
      .map_err(|e| {
        anyhow!(
          "invalid RUST_LOG / log.level \
           filter: {e}"
        )
      })?;

  let ansi = cfg
    .get_bool("log.ansi")
    .unwrap_or_else(|| {
      std::io::stderr().is_terminal()
    });

  let init_result =
    tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_target(true)
      .with_level(true)
      .with_ansi(ansi)
      .with_writer(std::io::stderr)
      .try_init();

  if let Err(err) = init_result {
    debug!(error = %err, "tracing subscriber already set, continuing");
  }

  Ok(())
}
