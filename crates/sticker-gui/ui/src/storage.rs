use anyhow::anyhow;
use sticker_core::SnapshotStore;

/// The browser's `localStorage`, one key
/// per chart.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
  key: String
}

impl LocalStorageStore {
  pub fn new(key: String) -> Self {
    Self {
      key
    }
  }
}

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .ok_or_else(|| {
      anyhow!(
        "local storage is not available"
      )
    })
}

impl SnapshotStore for LocalStorageStore {
  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(&self.key)
      .map_err(|error| {
        anyhow!(
          "failed reading {}: {error:?}",
          self.key
        )
      })
  }

  fn write(
    &mut self,
    payload: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(&self.key, payload)
      .map_err(|error| {
        anyhow!(
          "failed writing {}: {error:?}",
          self.key
        )
      })
  }
}
