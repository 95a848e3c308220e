//! Pointer-driven reordering of task
//! entries.
//!
//! The engine only sees three kinds of
//! input: a press on an entry's handle, a
//! pointer position while moving, and a
//! release. Whoever delivers pointer
//! events measures the entries and hands
//! their vertical extents in as
//! `EntryBox`es.

use tracing::{
  debug,
  trace
};

use crate::tasks::{
  EntryId,
  TaskList
};

/// Pointer travel, in pixels, before an
/// armed press turns into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct EntryBox {
  pub id:     EntryId,
  pub top:    f64,
  pub height: f64
}

impl EntryBox {
  pub fn new(
    id: EntryId,
    top: f64,
    height: f64
  ) -> Self {
    Self {
      id,
      top,
      height
    }
  }

  pub fn midpoint(&self) -> f64 {
    self.top + self.height / 2.0
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum DragState {
  #[default]
  Idle,
  Armed,
  Dragging
}

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
enum DragPhase {
  Idle,
  Armed { entry: EntryId, origin_y: f64 },
  Dragging { entry: EntryId }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DragStart {
  Started,
  Rejected
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Placement {
  Before(EntryId),
  End
}

#[derive(Debug, Clone)]
pub struct DragEngine {
  phase: DragPhase
}

impl Default for DragEngine {
  fn default() -> Self {
    Self {
      phase: DragPhase::Idle
    }
  }
}

impl DragEngine {
  pub fn state_of(
    &self,
    entry: EntryId
  ) -> DragState {
    match self.phase {
      | DragPhase::Armed {
        entry: armed,
        ..
      } if armed == entry => {
        DragState::Armed
      }
      | DragPhase::Dragging {
        entry: dragged
      } if dragged == entry => {
        DragState::Dragging
      }
      | _ => DragState::Idle
    }
  }

  pub fn dragging(
    &self
  ) -> Option<EntryId> {
    match self.phase {
      | DragPhase::Dragging { entry } => {
        Some(entry)
      }
      | _ => None
    }
  }

  pub fn is_dragging(&self) -> bool {
    self.dragging().is_some()
  }

  pub fn armed(
    &self
  ) -> Option<EntryId> {
    match self.phase {
      | DragPhase::Armed {
        entry,
        ..
      } => Some(entry),
      | _ => None
    }
  }

  /// IDLE → ARMED. Pressing a handle
  /// while something else is being
  /// dragged does nothing.
  pub fn press_handle(
    &mut self,
    entry: EntryId,
    y: f64
  ) -> bool {
    if self.is_dragging() {
      trace!(%entry, "handle press ignored during drag");
      return false;
    }
    self.phase = DragPhase::Armed {
      entry,
      origin_y: y
    };
    trace!(%entry, y, "armed entry");
    true
  }

  /// ARMED → IDLE when the pointer comes
  /// up before any drag started.
  pub fn release_handle(
    &mut self,
    entry: EntryId
  ) -> bool {
    self.disarm(entry)
  }

  /// ARMED → IDLE when the pointer leaves
  /// the handle before any drag started.
  pub fn leave_handle(
    &mut self,
    entry: EntryId
  ) -> bool {
    self.disarm(entry)
  }

  fn disarm(
    &mut self,
    entry: EntryId
  ) -> bool {
    match self.phase {
      | DragPhase::Armed {
        entry: armed,
        ..
      } if armed == entry => {
        self.phase = DragPhase::Idle;
        trace!(%entry, "disarmed entry");
        true
      }
      | _ => false
    }
  }

  /// Whether an armed press has moved far
  /// enough to count as a drag.
  pub fn should_begin(
    &self,
    y: f64
  ) -> bool {
    match self.phase {
      | DragPhase::Armed {
        origin_y,
        ..
      } => {
        (y - origin_y).abs()
          > DRAG_THRESHOLD_PX
      }
      | _ => false
    }
  }

  /// ARMED → DRAGGING. Only the armed
  /// entry may start a drag; anything
  /// else is rejected and the current
  /// phase is left as it was.
  pub fn begin_drag(
    &mut self,
    entry: EntryId
  ) -> DragStart {
    match self.phase {
      | DragPhase::Armed {
        entry: armed,
        ..
      } if armed == entry => {
        self.phase =
          DragPhase::Dragging { entry };
        debug!(%entry, "drag started");
        DragStart::Started
      }
      | _ => {
        debug!(%entry, phase = ?self.phase, "drag rejected");
        DragStart::Rejected
      }
    }
  }

  /// Relocates the dragged entry for a
  /// pointer at `y`. `boxes` are the
  /// measured entries in their current
  /// order; the dragged one is skipped.
  pub fn drag_over(
    &mut self,
    list: &mut TaskList,
    y: f64,
    boxes: &[EntryBox]
  ) -> Option<Placement> {
    let dragged = self.dragging()?;
    let placement =
      match drop_target(y, boxes, dragged)
      {
        | Some(sibling) => {
          Placement::Before(sibling)
        }
        | None => Placement::End
      };

    let before = match placement {
      | Placement::Before(sibling) => {
        Some(sibling)
      }
      | Placement::End => None
    };
    list.move_before(dragged, before);
    trace!(%dragged, y, ?placement, "drag over");
    Some(placement)
  }

  /// DRAGGING → IDLE, whether the drop
  /// landed or was cancelled. The order
  /// reached so far stands.
  pub fn finish(
    &mut self
  ) -> Option<EntryId> {
    let entry = self.dragging();
    self.phase = DragPhase::Idle;
    if let Some(entry) = entry {
      debug!(%entry, "drag finished");
    }
    entry
  }
}

/// The sibling the dragged entry should be
/// placed in front of: among entries whose
/// midpoint lies below `y`, the closest
/// one. `None` means the pointer is below
/// every other entry.
pub fn drop_target(
  y: f64,
  boxes: &[EntryBox],
  dragged: EntryId
) -> Option<EntryId> {
  boxes
    .iter()
    .filter(|entry| entry.id != dragged)
    .fold(
      (f64::NEG_INFINITY, None),
      |(closest, found), entry| {
        let offset = y - entry.midpoint();
        if offset < 0.0 && offset > closest
        {
          (offset, Some(entry.id))
        } else {
          (closest, found)
        }
      }
    )
    .1
}

#[cfg(test)]
mod tests {
  use super::*;

  fn three_entries()
  -> (TaskList, Vec<EntryId>, Vec<EntryBox>)
  {
    let list = TaskList::from_tasks(&[
      "P1".to_string(),
      "P2".to_string(),
      "P3".to_string()
    ]);
    let ids: Vec<EntryId> = list
      .entries()
      .iter()
      .map(|entry| entry.id)
      .collect();
    let boxes = ids
      .iter()
      .enumerate()
      .map(|(idx, id)| {
        EntryBox::new(
          *id,
          idx as f64 * 40.0,
          40.0
        )
      })
      .collect();
    (list, ids, boxes)
  }

  #[test]
  fn drag_between_second_and_third() {
    let (mut list, ids, boxes) =
      three_entries();
    let mut engine = DragEngine::default();

    assert!(engine.press_handle(ids[0], 20.0));
    assert_eq!(
      engine.begin_drag(ids[0]),
      DragStart::Started
    );
    // midpoints are 20, 60, 100
    let placement = engine.drag_over(
      &mut list, 80.0, &boxes,
    );
    assert_eq!(
      placement,
      Some(Placement::Before(ids[2]))
    );
    assert_eq!(engine.finish(), Some(ids[0]));
    assert_eq!(
      list.reconcile(),
      vec!["P2", "P1", "P3"]
    );
  }

  #[test]
  fn pointer_below_everything_moves_to_end()
  {
    let (mut list, ids, boxes) =
      three_entries();
    let mut engine = DragEngine::default();
    engine.press_handle(ids[0], 0.0);
    engine.begin_drag(ids[0]);
    assert_eq!(
      engine.drag_over(
        &mut list, 500.0, &boxes
      ),
      Some(Placement::End)
    );
    assert_eq!(
      list.reconcile(),
      vec!["P2", "P3", "P1"]
    );
  }

  #[test]
  fn nearest_midpoint_below_wins() {
    let (_, ids, boxes) = three_entries();
    assert_eq!(
      drop_target(10.0, &boxes, ids[2]),
      Some(ids[0])
    );
    assert_eq!(
      drop_target(21.0, &boxes, ids[2]),
      Some(ids[1])
    );
    // exactly on a midpoint is not "above" it
    assert_eq!(
      drop_target(60.0, &boxes, ids[0]),
      Some(ids[2])
    );
  }

  #[test]
  fn begin_without_arm_is_rejected() {
    let (mut list, ids, boxes) =
      three_entries();
    let mut engine = DragEngine::default();
    assert_eq!(
      engine.begin_drag(ids[1]),
      DragStart::Rejected
    );
    assert_eq!(
      engine.drag_over(
        &mut list, 0.0, &boxes
      ),
      None
    );
    assert_eq!(
      list.reconcile(),
      vec!["P1", "P2", "P3"]
    );
  }

  #[test]
  fn release_or_leave_disarms() {
    let (_, ids, _) = three_entries();
    let mut engine = DragEngine::default();

    engine.press_handle(ids[0], 0.0);
    assert_eq!(
      engine.state_of(ids[0]),
      DragState::Armed
    );
    assert!(engine.release_handle(ids[0]));
    assert_eq!(
      engine.begin_drag(ids[0]),
      DragStart::Rejected
    );

    engine.press_handle(ids[0], 0.0);
    assert!(!engine.leave_handle(ids[1]));
    assert!(engine.leave_handle(ids[0]));
    assert_eq!(
      engine.state_of(ids[0]),
      DragState::Idle
    );
  }

  #[test]
  fn other_handles_are_inert_while_dragging()
  {
    let (_, ids, _) = three_entries();
    let mut engine = DragEngine::default();
    engine.press_handle(ids[0], 0.0);
    engine.begin_drag(ids[0]);

    assert!(!engine.press_handle(ids[1], 0.0));
    assert!(!engine.release_handle(ids[1]));
    assert_eq!(
      engine.begin_drag(ids[1]),
      DragStart::Rejected
    );
    assert_eq!(
      engine.dragging(),
      Some(ids[0])
    );
    assert_eq!(
      engine.state_of(ids[1]),
      DragState::Idle
    );
  }

  #[test]
  fn threshold_gates_drag_start() {
    let (_, ids, _) = three_entries();
    let mut engine = DragEngine::default();
    assert!(!engine.should_begin(100.0));
    engine.press_handle(ids[0], 10.0);
    assert!(!engine.should_begin(14.0));
    assert!(engine.should_begin(16.0));
    assert!(engine.should_begin(4.0));
  }
}
