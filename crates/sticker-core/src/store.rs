//! Durable slots holding one serialized chart snapshot each.

#[cfg(feature = "native")]
use std::fs;
#[cfg(feature = "native")]
use std::io::Write;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

#[cfg(feature = "native")]
use anyhow::{Context, anyhow};
#[cfg(feature = "native")]
use tempfile::NamedTempFile;
#[cfg(feature = "native")]
use tracing::{debug, info};

#[cfg(feature = "native")]
use crate::config::Config;

/// A single named key/value slot. Every save replaces the whole payload.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> anyhow::Result<Option<String>>;

    fn write(&mut self, payload: &str) -> anyhow::Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn read(&self) -> anyhow::Result<Option<String>> {
        (**self).read()
    }

    fn write(&mut self, payload: &str) -> anyhow::Result<()> {
        (**self).write(payload)
    }
}

/// In-memory slot, for tests and for running without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payload: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_string()),
            writes: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> anyhow::Result<()> {
        self.payload = Some(payload.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Slot backed by `<data dir>/<key>.json`, replaced atomically on write.
#[cfg(feature = "native")]
#[derive(Debug)]
pub struct FileStore {
    pub data_dir: PathBuf,
    pub path: PathBuf,
}

#[cfg(feature = "native")]
impl FileStore {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path, key: &str) -> anyhow::Result<Self> {
        if key.trim().is_empty() || key.contains(['/', '\\']) {
            return Err(anyhow!("invalid storage key: {key:?}"));
        }

        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;
        let path = data_dir.join(format!("{key}.json"));

        info!(
            data_dir = %data_dir.display(),
            slot = %path.display(),
            "opened snapshot store"
        );

        Ok(Self { data_dir, path })
    }

    /// Opens the slot named by `storage.key` under the configured data
    /// directory.
    pub fn from_config(cfg: &Config, data_override: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = crate::config::resolve_data_dir(cfg, data_override)
            .context("failed to resolve data directory")?;
        Self::open(&data_dir, &cfg.storage_key())
    }
}

#[cfg(feature = "native")]
impl SnapshotStore for FileStore {
    #[tracing::instrument(skip(self))]
    fn read(&self) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            debug!(file = %self.path.display(), "no snapshot on disk");
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(raw))
    }

    #[tracing::instrument(skip(self, payload))]
    fn write(&mut self, payload: &str) -> anyhow::Result<()> {
        debug!(file = %self.path.display(), bytes = payload.len(), "saving snapshot atomically");

        let mut temp = NamedTempFile::new_in(&self.data_dir)?;
        temp.write_all(payload.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|err| anyhow!("failed to persist {}: {}", self.path.display(), err))?;
        Ok(())
    }
}
