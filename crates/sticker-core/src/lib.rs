pub mod chart;
pub mod config;
pub mod coordinator;
pub mod drag;
pub mod grid;
#[cfg(feature = "native")]
pub mod logging;
pub mod snapshot;
pub mod store;
pub mod tasks;
pub mod view;

#[cfg(feature = "native")]
use std::path::Path;

#[cfg(feature = "native")]
use anyhow::Context;
#[cfg(feature = "native")]
use tracing::info;

pub use chart::{
  CellCoord,
  ChartState
};
pub use coordinator::Coordinator;
pub use drag::{
  DragStart,
  DragState,
  EntryBox,
  Placement
};
pub use store::{
  MemoryStore,
  SnapshotStore
};
pub use tasks::EntryId;

/// Opens the chart saved under the
/// configured data directory, falling back
/// to a fresh chart when nothing usable is
/// stored there.
#[cfg(feature = "native")]
#[tracing::instrument(skip_all)]
pub fn open(
  cfg: &config::Config,
  data_override: Option<&Path>
) -> anyhow::Result<
  Coordinator<store::FileStore>
> {
  let store = store::FileStore::from_config(
    cfg,
    data_override
  )
  .with_context(|| {
    format!(
      "failed to open chart storage \
       '{}'",
      cfg.storage_key()
    )
  })?;

  info!(
    slot = %store.path.display(),
    "opening chart"
  );
  Ok(Coordinator::load(store))
}
