use tracing::debug;

use crate::chart::{
  CellCoord,
  ChartState,
  MAX_COLUMNS,
  MAX_ROWS,
  MIN_COLUMNS,
  MIN_ROWS
};

/// Reads the leading integer of `raw`
/// (whitespace, optional sign, digits;
/// anything after is ignored) and clamps
/// it into `[min, max]`. Input with no
/// leading integer clamps to `min`.
pub fn clamp_dimension(
  raw: &str,
  min: u32,
  max: u32
) -> u32 {
  match leading_integer(raw) {
    | Some(value) => {
      clamp_value(value, min, max)
    }
    | None => min
  }
}

fn clamp_value(
  value: i64,
  min: u32,
  max: u32
) -> u32 {
  value.clamp(min as i64, max as i64)
    as u32
}

fn leading_integer(
  raw: &str
) -> Option<i64> {
  let text = raw.trim_start();
  let (negative, digits) =
    match text.as_bytes().first() {
      | Some(b'-') => (true, &text[1..]),
      | Some(b'+') => {
        (false, &text[1..])
      }
      | _ => (false, text)
    };

  let mut seen = false;
  let mut value: i64 = 0;
  for ch in digits.chars() {
    let Some(digit) = ch.to_digit(10)
    else {
      break;
    };
    seen = true;
    value = value
      .saturating_mul(10)
      .saturating_add(digit as i64);
  }

  if !seen {
    return None;
  }
  Some(if negative {
    -value
  } else {
    value
  })
}

impl ChartState {
  /// Sets the grid size. Stickers are
  /// left alone: cells that fall outside
  /// the new bounds stay in the set and
  /// show up again if the grid grows.
  pub fn resize(
    &mut self,
    rows: i64,
    columns: i64
  ) {
    self.rows =
      clamp_value(rows, MIN_ROWS, MAX_ROWS);
    self.columns = clamp_value(
      columns,
      MIN_COLUMNS,
      MAX_COLUMNS
    );
    debug!(
      rows = self.rows,
      columns = self.columns,
      stickers = self.stickers.len(),
      "resized grid"
    );
  }

  /// `resize` for raw field text; anything
  /// that does not start with a number
  /// counts as the minimum.
  pub fn resize_from_input(
    &mut self,
    rows: &str,
    columns: &str
  ) {
    self.resize(
      i64::from(clamp_rows(rows)),
      i64::from(clamp_columns(columns))
    );
  }

  /// Flips one cell. Returns whether the
  /// cell is filled afterwards.
  pub fn toggle(
    &mut self,
    coord: CellCoord
  ) -> bool {
    if self.stickers.remove(&coord) {
      false
    } else {
      self.stickers.insert(coord);
      true
    }
  }

  pub fn clear_all(&mut self) {
    self.stickers.clear();
  }

  pub fn is_filled(
    &self,
    coord: CellCoord
  ) -> bool {
    coord.within(self.rows, self.columns)
      && self.stickers.contains(&coord)
  }

  pub fn visible_stickers(
    &self
  ) -> impl Iterator<Item = &CellCoord> {
    self.stickers.iter().filter(
      |coord| {
        coord.within(
          self.rows,
          self.columns
        )
      }
    )
  }
}

pub fn clamp_rows(raw: &str) -> u32 {
  clamp_dimension(raw, MIN_ROWS, MAX_ROWS)
}

pub fn clamp_columns(raw: &str) -> u32 {
  clamp_dimension(
    raw,
    MIN_COLUMNS,
    MAX_COLUMNS
  )
}
