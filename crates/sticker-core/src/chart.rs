use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::{
  Context,
  anyhow
};

pub const MIN_ROWS: u32 = 3;
pub const MAX_ROWS: u32 = 12;
pub const MIN_COLUMNS: u32 = 3;
pub const MAX_COLUMNS: u32 = 10;

pub const DEFAULT_STICKER: &str = "⭐";
pub const DEFAULT_COLOR: &str =
  "#ffcc00";
pub const DEFAULT_GOAL: &str =
  "Earn 10 stars for a weekend treat";

const DEFAULT_TASKS: [&str; 6] = [
  "Brush teeth",
  "Pack backpack",
  "Finish homework",
  "Put toys away",
  "Take a shower",
  "Lights out on time"
];

/// One grid position. Ordered row-major
/// so the sticker set iterates the way
/// the grid is drawn.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct CellCoord {
  pub row:    u32,
  pub column: u32
}

impl CellCoord {
  pub fn new(
    row: u32,
    column: u32
  ) -> Self {
    Self {
      row,
      column
    }
  }

  pub fn within(
    &self,
    rows: u32,
    columns: u32
  ) -> bool {
    self.row < rows
      && self.column < columns
  }
}

/// Wire form used by snapshots:
/// `"row-column"`.
impl fmt::Display for CellCoord {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{}-{}",
      self.row, self.column
    )
  }
}

impl FromStr for CellCoord {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let (row, column) = s
      .trim()
      .split_once('-')
      .ok_or_else(|| {
        anyhow!(
          "cell key missing '-': {s}"
        )
      })?;
    let row = row
      .parse::<u32>()
      .with_context(|| {
        format!("invalid row in {s}")
      })?;
    let column = column
      .parse::<u32>()
      .with_context(|| {
        format!(
          "invalid column in {s}"
        )
      })?;
    Ok(Self::new(row, column))
  }
}

/// The whole chart for one child. Owned
/// by the coordinator; everything else
/// borrows it.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ChartState {
  pub child_name:     String,
  pub goal:           String,
  pub sticker_symbol: String,
  pub sticker_color:  String,
  pub rows:           u32,
  pub columns:        u32,
  pub tasks:          Vec<String>,
  pub stickers:
    BTreeSet<CellCoord>
}

impl Default for ChartState {
  fn default() -> Self {
    Self {
      child_name:     String::new(),
      goal:           DEFAULT_GOAL
        .to_string(),
      sticker_symbol: DEFAULT_STICKER
        .to_string(),
      sticker_color:  DEFAULT_COLOR
        .to_string(),
      rows:           6,
      columns:        5,
      tasks:          default_tasks(),
      stickers:       BTreeSet::new()
    }
  }
}

impl ChartState {
  pub fn set_child_name(
    &mut self,
    name: &str
  ) {
    self.child_name = name.to_string();
  }

  pub fn set_goal(&mut self, goal: &str) {
    self.goal = goal.to_string();
  }

  /// Blank input falls back to the
  /// default star. Length is not checked
  /// here: one symbol per cell is the
  /// entry field's job (`maxlength`), so a
  /// stored `"⭐⭐⭐"` is kept as written.
  pub fn set_sticker_symbol(
    &mut self,
    symbol: &str
  ) {
    let trimmed = symbol.trim();
    self.sticker_symbol =
      if trimmed.is_empty() {
        DEFAULT_STICKER.to_string()
      } else {
        trimmed.to_string()
      };
  }

  pub fn set_sticker_color(
    &mut self,
    color: &str
  ) {
    self.sticker_color =
      color.to_string();
  }

  /// Labels shown beside the grid: one
  /// per row, extra tasks are not shown.
  pub fn row_labels(&self) -> &[String] {
    let shown = self
      .tasks
      .len()
      .min(self.rows as usize);
    &self.tasks[..shown]
  }
}

pub fn default_tasks() -> Vec<String> {
  DEFAULT_TASKS
    .iter()
    .map(|task| task.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cell_coord_parses_wire_form() {
    let coord: CellCoord = "5-4"
      .parse()
      .expect("parse coord");
    assert_eq!(
      coord,
      CellCoord::new(5, 4)
    );
    assert_eq!(coord.to_string(), "5-4");
  }

  #[test]
  fn cell_coord_rejects_garbage() {
    assert!(
      "5".parse::<CellCoord>().is_err()
    );
    assert!(
      "a-1"
        .parse::<CellCoord>()
        .is_err()
    );
    assert!(
      "-1-2"
        .parse::<CellCoord>()
        .is_err()
    );
  }

  #[test]
  fn blank_symbol_falls_back_to_star() {
    let mut state =
      ChartState::default();
    state.set_sticker_symbol("  🦄 ");
    assert_eq!(
      state.sticker_symbol,
      "🦄"
    );
    state.set_sticker_symbol("   ");
    assert_eq!(
      state.sticker_symbol,
      DEFAULT_STICKER
    );
  }

  #[test]
  fn symbol_length_is_left_to_the_field() {
    let mut state =
      ChartState::default();
    state.set_sticker_symbol("⭐⭐⭐");
    assert_eq!(
      state.sticker_symbol,
      "⭐⭐⭐"
    );
  }

  #[test]
  fn row_labels_truncate_to_rows() {
    let mut state =
      ChartState::default();
    state.rows = 3;
    assert_eq!(
      state.row_labels(),
      &[
        "Brush teeth".to_string(),
        "Pack backpack".to_string(),
        "Finish homework".to_string()
      ]
    );

    state.tasks =
      vec!["Only one".to_string()];
    assert_eq!(
      state.row_labels().len(),
      1
    );
  }
}
