//! Settings the chart reads: the storage
//! slot name, where native files live, and
//! logging. Embedders start from
//! `Config::defaults()` and layer their own
//! values on with `apply_overrides`.

use std::collections::HashMap;
#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::path::{
  Path,
  PathBuf
};

#[cfg(feature = "native")]
use anyhow::{
  Context,
  anyhow
};
use tracing::debug;
#[cfg(feature = "native")]
use tracing::info;

pub const DEFAULT_STORAGE_KEY: &str =
  "sticker-chart-settings";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
  map: HashMap<String, String>
}

impl Config {
  pub fn defaults() -> Self {
    let map = [
      ("data.location", "~/.sticker-chart"),
      ("storage.key", DEFAULT_STORAGE_KEY),
      ("log.level", DEFAULT_LOG_LEVEL)
    ]
    .into_iter()
    .map(|(k, v)| {
      (k.to_string(), v.to_string())
    })
    .collect();

    Config { map }
  }

  /// Sets each `(key, value)`; an `rc.`
  /// prefix on the key is dropped.
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_bool(
    &self,
    key: &str
  ) -> Option<bool> {
    self
      .map
      .get(key)
      .map(|v| parse_bool(v))
  }

  /// Name of the slot the chart is saved
  /// under. Blank values fall back to the
  /// default key.
  pub fn storage_key(&self) -> String {
    self
      .get("storage.key")
      .map(|key| key.trim().to_string())
      .filter(|key| !key.is_empty())
      .unwrap_or_else(|| {
        DEFAULT_STORAGE_KEY.to_string()
      })
  }

  pub fn log_level(&self) -> String {
    self
      .get("log.level")
      .unwrap_or_else(|| {
        DEFAULT_LOG_LEVEL.to_string()
      })
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::defaults()
  }
}

/// Directory the file store lives in,
/// created if missing.
#[cfg(feature = "native")]
#[tracing::instrument(skip(
  cfg,
  override_dir
))]
pub fn resolve_data_dir(
  cfg: &Config,
  override_dir: Option<&Path>
) -> anyhow::Result<PathBuf> {
  let dir = if let Some(path) =
    override_dir
  {
    path.to_path_buf()
  } else if let Some(cfg_value) =
    cfg.get("data.location")
  {
    expand_tilde(Path::new(&cfg_value))
  } else {
    dirs::home_dir()
      .ok_or_else(|| {
        anyhow!(
          "cannot determine home \
           directory"
        )
      })?
      .join(".sticker-chart")
  };

  if !dir.exists() {
    info!(dir = %dir.display(), "creating data directory");
    fs::create_dir_all(&dir)
      .with_context(|| {
        format!(
          "failed to create {}",
          dir.display()
        )
      })?;
  }

  Ok(dir)
}

#[cfg(feature = "native")]
fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

fn parse_bool(s: &str) -> bool {
  matches!(
    s.trim()
      .to_ascii_lowercase()
      .as_str(),
    "1" | "y" | "yes" | "on" | "true"
  )
}
