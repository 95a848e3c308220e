use std::collections::BTreeSet;

use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::chart::{
  CellCoord,
  ChartState
};
use crate::store::SnapshotStore;

/// Stored form of a chart. Stickers are
/// kept as `"row-column"` strings; any
/// field missing from a stored snapshot
/// takes its default.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartSnapshot {
  pub child_name:     String,
  pub goal:           String,
  pub sticker_symbol: String,
  pub sticker_color:  String,
  pub rows:           i64,
  pub columns:        i64,
  pub tasks:          Vec<String>,
  pub stickers:       Vec<String>
}

impl Default for ChartSnapshot {
  fn default() -> Self {
    Self::from_state(
      &ChartState::default()
    )
  }
}

impl ChartSnapshot {
  pub fn from_state(
    state: &ChartState
  ) -> Self {
    Self {
      child_name:     state
        .child_name
        .clone(),
      goal:           state.goal.clone(),
      sticker_symbol: state
        .sticker_symbol
        .clone(),
      sticker_color:  state
        .sticker_color
        .clone(),
      rows:           state.rows as i64,
      columns:        state.columns
        as i64,
      tasks:          state.tasks.clone(),
      stickers:       state
        .stickers
        .iter()
        .map(CellCoord::to_string)
        .collect()
    }
  }

  /// Rebuilds the in-memory state,
  /// clamping the grid size, dropping
  /// blank tasks and skipping sticker
  /// keys that do not parse.
  pub fn into_state(self) -> ChartState {
    let mut stickers = BTreeSet::new();
    for key in &self.stickers {
      match key.parse::<CellCoord>() {
        | Ok(coord) => {
          stickers.insert(coord);
        }
        | Err(error) => {
          warn!(%key, %error, "skipping unreadable sticker key");
        }
      }
    }

    let mut state = ChartState {
      child_name: self.child_name,
      goal: self.goal,
      sticker_symbol: String::new(),
      sticker_color: self.sticker_color,
      rows: 0,
      columns: 0,
      tasks: self
        .tasks
        .iter()
        .map(|task| task.trim())
        .filter(|task| !task.is_empty())
        .map(str::to_string)
        .collect(),
      stickers
    };
    state.set_sticker_symbol(
      &self.sticker_symbol
    );
    state.resize(self.rows, self.columns);
    state
  }
}

pub fn encode(
  state: &ChartState
) -> anyhow::Result<String> {
  serde_json::to_string(
    &ChartSnapshot::from_state(state)
  )
  .context("failed to encode chart snapshot")
}

pub fn decode(
  raw: &str
) -> anyhow::Result<ChartState> {
  let snapshot: ChartSnapshot =
    serde_json::from_str(raw).context(
      "failed to parse chart snapshot"
    )?;
  Ok(snapshot.into_state())
}

/// Loads the chart from `store`. A
/// missing, unreadable or malformed
/// snapshot yields the default chart.
#[tracing::instrument(skip(store))]
pub fn load_state<S>(
  store: &S
) -> ChartState
where
  S: SnapshotStore + ?Sized
{
  let raw = match store.read() {
    | Ok(Some(raw)) => raw,
    | Ok(None) => {
      debug!("no saved chart; using defaults");
      return ChartState::default();
    }
    | Err(error) => {
      warn!(error = %format!("{error:#}"), "could not read saved chart");
      return ChartState::default();
    }
  };

  match decode(&raw) {
    | Ok(state) => {
      debug!(
        tasks = state.tasks.len(),
        stickers = state.stickers.len(),
        "loaded saved chart"
      );
      state
    }
    | Err(error) => {
      warn!(error = %format!("{error:#}"), "could not load saved chart");
      ChartState::default()
    }
  }
}

#[tracing::instrument(skip(store, state))]
pub fn save_state<S>(
  store: &mut S,
  state: &ChartState
) -> anyhow::Result<()>
where
  S: SnapshotStore + ?Sized
{
  let payload = encode(state)?;
  store
    .write(&payload)
    .context("failed to save chart snapshot")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::MemoryStore;

  fn sample_state() -> ChartState {
    let mut state = ChartState::default();
    state.child_name = "Ada".to_string();
    state.tasks = vec![
      "Brush teeth".to_string(),
      "Read".to_string(),
      "Read".to_string()
    ];
    state.resize(4, 4);
    state.toggle(CellCoord::new(0, 1));
    state.toggle(CellCoord::new(3, 2));
    state
  }

  #[test]
  fn snapshot_round_trips() {
    let state = sample_state();
    let decoded = decode(
      &encode(&state).expect("encode")
    )
    .expect("decode");
    assert_eq!(decoded, state);
  }

  #[test]
  fn wire_shape_uses_camel_case_keys() {
    let raw =
      encode(&sample_state()).expect("encode");
    let value: serde_json::Value =
      serde_json::from_str(&raw)
        .expect("json");
    assert_eq!(value["childName"], "Ada");
    assert_eq!(value["stickerSymbol"], "⭐");
    assert_eq!(value["rows"], 4);
    assert_eq!(
      value["stickers"],
      serde_json::json!(["0-1", "3-2"])
    );
  }

  #[test]
  fn partial_snapshot_merges_with_defaults()
  {
    let state = decode(
      r#"{"childName":"Sam","rows":99,"stickers":["1-1","bogus"]}"#
    )
    .expect("decode");
    let defaults = ChartState::default();
    assert_eq!(state.child_name, "Sam");
    assert_eq!(state.goal, defaults.goal);
    assert_eq!(state.tasks, defaults.tasks);
    assert_eq!(state.rows, 12);
    assert_eq!(state.columns, 5);
    assert_eq!(
      state.stickers.len(),
      1
    );
  }

  #[test]
  fn blank_tasks_and_symbol_are_cleaned_on_load()
  {
    let state = decode(
      r#"{"tasks":["  ","Read",""],"stickerSymbol":"  "}"#
    )
    .expect("decode");
    assert_eq!(state.tasks, vec!["Read".to_string()]);
    assert_eq!(state.sticker_symbol, "⭐");
  }

  #[test]
  fn corrupted_snapshot_falls_back() {
    let store = MemoryStore::with_payload(
      "{not json at all",
    );
    assert_eq!(
      load_state(&store),
      ChartState::default()
    );
  }

  #[test]
  fn missing_snapshot_falls_back() {
    let store = MemoryStore::default();
    assert_eq!(
      load_state(&store),
      ChartState::default()
    );
  }

  #[test]
  fn save_overwrites_whole_snapshot() {
    let mut store = MemoryStore::default();
    let mut state = sample_state();
    save_state(&mut store, &state)
      .expect("save");
    state.clear_all();
    save_state(&mut store, &state)
      .expect("save again");
    assert_eq!(load_state(&store), state);
    assert_eq!(store.writes(), 2);
  }
}
