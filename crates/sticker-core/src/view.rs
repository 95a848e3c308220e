//! Derived, display-ready views of the
//! chart. Nothing here is stored.

use crate::chart::{
  CellCoord,
  ChartState,
  DEFAULT_GOAL,
  DEFAULT_STICKER
};
use crate::drag::{
  DragEngine,
  DragState
};
use crate::tasks::{
  EntryId,
  TaskList
};

pub const CHILD_FALLBACK: &str =
  "Your child";
pub const CHART_GOAL_FALLBACK: &str =
  "Celebrate with a small reward after \
   filling the chart.";

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct ChartView {
  pub editor:  Vec<EntryView>,
  pub labels:  Vec<String>,
  pub grid:    GridView,
  pub preview: PreviewView
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
  pub id:   EntryId,
  pub text: String,
  pub drag: DragState
}

impl EntryView {
  /// Blank rows get a hint style in the
  /// editor.
  pub fn is_blank(&self) -> bool {
    self.text.trim().is_empty()
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct GridView {
  pub rows:    u32,
  pub columns: u32,
  pub color:   String,
  pub cells:   Vec<Cell>
}

impl GridView {
  pub fn row(
    &self,
    row: u32
  ) -> &[Cell] {
    let width = self.columns as usize;
    let start = row as usize * width;
    let end =
      (start + width).min(self.cells.len());
    self.cells.get(start..end).unwrap_or(&[])
  }

  pub fn filled(&self) -> usize {
    self
      .cells
      .iter()
      .filter(|cell| cell.filled)
      .count()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
  pub coord:      CellCoord,
  pub filled:     bool,
  /// Sticker shown in the cell, empty
  /// for unfilled cells.
  pub symbol:     String,
  pub aria_label: String
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct PreviewView {
  pub child:      String,
  pub goal:       String,
  pub sticker:    String,
  pub color:      String,
  pub title:      String,
  pub chart_goal: String
}

pub fn editor(
  list: &TaskList,
  engine: &DragEngine
) -> Vec<EntryView> {
  list
    .entries()
    .iter()
    .map(|entry| EntryView {
      id:   entry.id,
      text: entry.text.clone(),
      drag: engine.state_of(entry.id)
    })
    .collect()
}

pub fn labels(
  state: &ChartState
) -> Vec<String> {
  state.row_labels().to_vec()
}

pub fn grid(state: &ChartState) -> GridView {
  let symbol = sticker_or_default(state);
  let mut cells = Vec::with_capacity(
    (state.rows * state.columns) as usize
  );
  for row in 0..state.rows {
    for column in 0..state.columns {
      let coord = CellCoord::new(row, column);
      let filled =
        state.is_filled(coord);
      cells.push(Cell {
        coord,
        filled,
        symbol: if filled {
          symbol.to_string()
        } else {
          String::new()
        },
        aria_label: format!(
          "Row {}, column {}",
          row + 1,
          column + 1
        )
      });
    }
  }

  GridView {
    rows: state.rows,
    columns: state.columns,
    color: state.sticker_color.clone(),
    cells
  }
}

pub fn preview(
  state: &ChartState
) -> PreviewView {
  let child = or_fallback(
    &state.child_name,
    CHILD_FALLBACK
  );
  PreviewView {
    title: format!("{child}'s chart"),
    goal: or_fallback(
      &state.goal,
      DEFAULT_GOAL
    ),
    chart_goal: or_fallback(
      &state.goal,
      CHART_GOAL_FALLBACK
    ),
    sticker: sticker_or_default(state)
      .to_string(),
    color: state.sticker_color.clone(),
    child
  }
}

fn sticker_or_default(
  state: &ChartState
) -> &str {
  if state.sticker_symbol.is_empty() {
    DEFAULT_STICKER
  } else {
    &state.sticker_symbol
  }
}

fn or_fallback(
  value: &str,
  fallback: &str
) -> String {
  if value.is_empty() {
    fallback.to_string()
  } else {
    value.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grid_marks_only_in_bounds_stickers() {
    let mut state = ChartState::default();
    state.resize(3, 3);
    state.toggle(CellCoord::new(1, 2));
    state.toggle(CellCoord::new(7, 7));

    let view = grid(&state);
    assert_eq!(view.cells.len(), 9);
    assert_eq!(view.filled(), 1);
    let cell = &view.row(1)[2];
    assert!(cell.filled);
    assert_eq!(cell.symbol, DEFAULT_STICKER);
    assert_eq!(
      cell.aria_label,
      "Row 2, column 3"
    );
    assert!(view.row(0)[0].symbol.is_empty());
    assert!(view.row(9).is_empty());
  }

  #[test]
  fn preview_falls_back_when_blank() {
    let mut state = ChartState::default();
    state.goal = String::new();
    let view = preview(&state);
    assert_eq!(view.child, CHILD_FALLBACK);
    assert_eq!(
      view.title,
      "Your child's chart"
    );
    assert_eq!(view.goal, DEFAULT_GOAL);
    assert_eq!(
      view.chart_goal,
      CHART_GOAL_FALLBACK
    );

    state.child_name = "Mo".to_string();
    state.goal = "Zoo trip".to_string();
    let view = preview(&state);
    assert_eq!(view.title, "Mo's chart");
    assert_eq!(view.chart_goal, "Zoo trip");
  }
}
