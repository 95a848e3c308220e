//! Editable task entries.
//!
//! The editor keeps its own ordered list
//! of entries so that half-typed or empty
//! rows can exist without touching the
//! chart. `reconcile` turns the entries
//! back into the chart's task sequence.

use std::fmt;

use tracing::{
  debug,
  trace
};

use crate::chart::ChartState;

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
pub struct EntryId(u64);

impl EntryId {
  pub fn raw(self) -> u64 {
    self.0
  }
}

impl fmt::Display for EntryId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "entry-{}", self.0)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskEntry {
  pub id:   EntryId,
  pub text: String
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
  entries: Vec<TaskEntry>,
  next_id: u64
}

impl TaskList {
  /// Builds the editor for a task
  /// sequence, with one blank entry when
  /// there are no tasks.
  pub fn from_tasks(
    tasks: &[String]
  ) -> Self {
    let mut list = Self::default();
    list.rebuild(tasks);
    list
  }

  pub fn entries(&self) -> &[TaskEntry] {
    &self.entries
  }

  pub fn get(
    &self,
    id: EntryId
  ) -> Option<&TaskEntry> {
    self
      .entries
      .iter()
      .find(|entry| entry.id == id)
  }

  pub fn position(
    &self,
    id: EntryId
  ) -> Option<usize> {
    self
      .entries
      .iter()
      .position(|entry| entry.id == id)
  }

  /// Appends an entry. The chart's tasks
  /// are untouched until the next
  /// reconcile.
  pub fn insert(
    &mut self,
    text: &str
  ) -> EntryId {
    let id = EntryId(self.next_id);
    self.next_id += 1;
    self.entries.push(TaskEntry {
      id,
      text: text.to_string()
    });
    trace!(%id, "inserted task entry");
    id
  }

  pub fn remove(
    &mut self,
    id: EntryId
  ) -> bool {
    let Some(idx) = self.position(id)
    else {
      return false;
    };
    self.entries.remove(idx);
    self.ensure_placeholder();
    debug!(%id, remaining = self.entries.len(), "removed task entry");
    true
  }

  pub fn set_text(
    &mut self,
    id: EntryId,
    text: &str
  ) -> bool {
    match self
      .entries
      .iter_mut()
      .find(|entry| entry.id == id)
    {
      | Some(entry) => {
        entry.text = text.to_string();
        true
      }
      | None => false
    }
  }

  /// Moves `id` so it sits directly
  /// before `before`, or at the end when
  /// `before` is `None`. Returns false if
  /// either id is unknown or the two are
  /// the same entry.
  pub fn move_before(
    &mut self,
    id: EntryId,
    before: Option<EntryId>
  ) -> bool {
    if before == Some(id) {
      return false;
    }
    if let Some(target) = before
      && self.position(target).is_none()
    {
      return false;
    }
    let Some(from) = self.position(id)
    else {
      return false;
    };

    let entry = self.entries.remove(from);
    let to = match before {
      | Some(target) => self
        .position(target)
        .unwrap_or(self.entries.len()),
      | None => self.entries.len()
    };
    self.entries.insert(to, entry);
    trace!(%id, from, to, "moved task entry");
    true
  }

  /// Entry texts in order, trimmed, with
  /// blank ones dropped.
  pub fn reconcile(&self) -> Vec<String> {
    self
      .entries
      .iter()
      .map(|entry| entry.text.trim())
      .filter(|text| !text.is_empty())
      .map(str::to_string)
      .collect()
  }

  pub fn reconcile_into(
    &self,
    state: &mut ChartState
  ) {
    state.tasks = self.reconcile();
    debug!(
      tasks = state.tasks.len(),
      entries = self.entries.len(),
      "reconciled tasks"
    );
  }

  /// Throws away all entries and starts
  /// over from `tasks`.
  pub fn rebuild(
    &mut self,
    tasks: &[String]
  ) {
    self.entries.clear();
    for task in tasks {
      self.insert(task);
    }
    self.ensure_placeholder();
  }

  /// Like `rebuild`, but keeps the
  /// current entries (and their ids) when
  /// they already describe `tasks`. Rows
  /// being typed into keep their identity
  /// across a re-render.
  pub fn refresh(
    &mut self,
    tasks: &[String]
  ) {
    if self.reconcile() == tasks {
      self.ensure_placeholder();
    } else {
      self.rebuild(tasks);
    }
  }

  fn ensure_placeholder(&mut self) {
    if self.entries.is_empty() {
      self.insert("");
    }
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  fn texts(list: &TaskList) -> Vec<&str> {
    list
      .entries()
      .iter()
      .map(|entry| entry.text.as_str())
      .collect()
  }

  fn tasks(items: &[&str]) -> Vec<String> {
    items
      .iter()
      .map(|item| item.to_string())
      .collect()
  }

  #[test]
  fn insert_does_not_touch_chart() {
    let mut state =
      ChartState::default();
    let before = state.tasks.clone();
    let mut list =
      TaskList::from_tasks(&state.tasks);
    list.insert("");
    assert_eq!(state.tasks, before);

    list.reconcile_into(&mut state);
    assert_eq!(state.tasks, before);
  }

  #[test]
  fn reconcile_trims_and_drops_blanks() {
    let mut list = TaskList::default();
    list.insert("  Feed cat ");
    list.insert("   ");
    list.insert("");
    list.insert("Read");
    assert_eq!(
      list.reconcile(),
      tasks(&["Feed cat", "Read"])
    );
  }

  #[test]
  fn empty_tasks_still_offer_one_entry() {
    let list = TaskList::from_tasks(&[]);
    assert_eq!(texts(&list), vec![""]);
    assert!(list.reconcile().is_empty());
  }

  #[test]
  fn removing_last_entry_leaves_blank() {
    let mut list =
      TaskList::from_tasks(&tasks(&[
        "Read"
      ]));
    let id = list.entries()[0].id;
    assert!(list.remove(id));
    assert_eq!(texts(&list), vec![""]);
    assert!(!list.remove(id));
  }

  #[test]
  fn move_before_splices_order() {
    let mut list =
      TaskList::from_tasks(&tasks(&[
        "a", "b", "c"
      ]));
    let ids: Vec<EntryId> = list
      .entries()
      .iter()
      .map(|entry| entry.id)
      .collect();

    assert!(
      list.move_before(ids[0], Some(ids[2]))
    );
    assert_eq!(
      texts(&list),
      vec!["b", "a", "c"]
    );

    assert!(list.move_before(ids[1], None));
    assert_eq!(
      texts(&list),
      vec!["a", "c", "b"]
    );

    assert!(
      !list.move_before(ids[1], Some(ids[1]))
    );
    assert!(!list.move_before(
      ids[1],
      Some(EntryId(99))
    ));
  }

  #[test]
  fn refresh_keeps_ids_when_consistent() {
    let mut list =
      TaskList::from_tasks(&tasks(&[
        "a", "b"
      ]));
    let blank = list.insert("");
    let current = list.reconcile();
    list.refresh(&current);
    assert!(list.get(blank).is_some());

    list.refresh(&tasks(&["z"]));
    assert!(list.get(blank).is_none());
    assert_eq!(texts(&list), vec!["z"]);
  }

  proptest! {
    #[test]
    fn reconcile_is_idempotent(
      raw in proptest::collection::vec(
        "[ a-z]{0,6}",
        0..12
      )
    ) {
      let mut list = TaskList::default();
      for text in &raw {
        list.insert(text);
      }
      let mut state = ChartState::default();
      list.reconcile_into(&mut state);
      let first = state.tasks.clone();
      list.reconcile_into(&mut state);
      prop_assert_eq!(first, state.tasks);
    }

    #[test]
    fn reconcile_filters_blanks_in_order(
      raw in proptest::collection::vec(
        "[ a-z]{0,6}",
        0..12
      )
    ) {
      let mut list = TaskList::default();
      for text in &raw {
        list.insert(text);
      }
      let expected: Vec<String> = raw
        .iter()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
      let reconciled = list.reconcile();
      prop_assert!(
        reconciled.iter().all(|t| !t.trim().is_empty())
      );
      prop_assert_eq!(reconciled, expected);
    }
  }
}
