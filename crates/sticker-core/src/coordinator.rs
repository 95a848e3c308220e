//! Single mutation entry point for a
//! chart.
//!
//! Every operation here changes the model,
//! re-derives the views and saves a full
//! snapshot before returning.

use tracing::{
  debug,
  info,
  trace,
  warn
};

use crate::chart::{
  CellCoord,
  ChartState
};
use crate::drag::{
  DragEngine,
  DragStart,
  EntryBox,
  Placement
};
use crate::snapshot;
use crate::store::SnapshotStore;
use crate::tasks::{
  EntryId,
  TaskList
};
use crate::view::{
  self,
  ChartView
};

#[derive(Debug)]
pub struct Coordinator<S> {
  state:  ChartState,
  editor: TaskList,
  drag:   DragEngine,
  view:   ChartView,
  store:  S
}

impl<S: SnapshotStore> Coordinator<S> {
  /// Loads whatever `store` holds (or the
  /// defaults) and renders it once.
  #[tracing::instrument(skip(store))]
  pub fn load(store: S) -> Self {
    let state = snapshot::load_state(&store);
    info!(
      rows = state.rows,
      columns = state.columns,
      tasks = state.tasks.len(),
      stickers = state.stickers.len(),
      visible = state.visible_stickers().count(),
      "chart loaded"
    );
    let mut coordinator = Self {
      editor: TaskList::from_tasks(
        &state.tasks
      ),
      state,
      drag: DragEngine::default(),
      view: ChartView::default(),
      store
    };
    coordinator.render_all();
    coordinator
  }

  pub fn state(&self) -> &ChartState {
    &self.state
  }

  pub fn view(&self) -> &ChartView {
    &self.view
  }

  pub fn tasks(&self) -> &TaskList {
    &self.editor
  }

  pub fn drag(&self) -> &DragEngine {
    &self.drag
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn into_parts(
    self
  ) -> (ChartState, S) {
    (self.state, self.store)
  }

  /// Recomputes the editor list, labels,
  /// grid and preview, then persists.
  #[tracing::instrument(skip(self))]
  pub fn render_all(&mut self) -> &ChartView {
    self.editor.refresh(&self.state.tasks);
    self.view.editor =
      view::editor(&self.editor, &self.drag);
    self.render_labels();
    self.view.grid = view::grid(&self.state);
    self.view.preview =
      view::preview(&self.state);
    self.persist();
    &self.view
  }

  pub fn set_child_name(&mut self, name: &str) {
    self.state.set_child_name(name);
    self.render_all();
  }

  pub fn set_goal(&mut self, goal: &str) {
    self.state.set_goal(goal);
    self.render_all();
  }

  pub fn set_sticker_symbol(
    &mut self,
    symbol: &str
  ) {
    self.state.set_sticker_symbol(symbol);
    self.render_all();
  }

  pub fn set_sticker_color(
    &mut self,
    color: &str
  ) {
    self.state.set_sticker_color(color);
    self.render_all();
  }

  /// Returns the clamped value so the
  /// field can show it back.
  pub fn set_rows(&mut self, raw: &str) -> u32 {
    let columns = self.state.columns.to_string();
    self.state.resize_from_input(raw, &columns);
    self.render_all();
    self.state.rows
  }

  pub fn set_columns(
    &mut self,
    raw: &str
  ) -> u32 {
    let rows = self.state.rows.to_string();
    self.state.resize_from_input(&rows, raw);
    self.render_all();
    self.state.columns
  }

  /// Adds a blank row to the editor. The
  /// chart's tasks only change once text
  /// is typed into it.
  pub fn add_task(&mut self) -> EntryId {
    let id = self.editor.insert("");
    self.view.editor =
      view::editor(&self.editor, &self.drag);
    id
  }

  pub fn edit_task(
    &mut self,
    id: EntryId,
    text: &str
  ) {
    if !self.editor.set_text(id, text) {
      warn!(%id, "edit for unknown task entry");
      return;
    }
    self.editor.reconcile_into(&mut self.state);
    self.render_all();
  }

  pub fn remove_task(&mut self, id: EntryId) {
    if !self.editor.remove(id) {
      warn!(%id, "remove for unknown task entry");
      return;
    }
    self.editor.reconcile_into(&mut self.state);
    self.render_all();
  }

  /// Editor lost focus: fold entries back
  /// into the chart and refresh labels.
  pub fn commit_tasks(&mut self) {
    self.editor.reconcile_into(&mut self.state);
    self.render_labels();
    self.persist();
  }

  pub fn toggle_sticker(
    &mut self,
    coord: CellCoord
  ) -> bool {
    let filled = self.state.toggle(coord);
    debug!(%coord, filled, "toggled sticker");
    self.view.grid = view::grid(&self.state);
    self.persist();
    filled
  }

  /// Removes every sticker. Callers wanting
  /// a confirmation step ask before
  /// calling.
  pub fn clear_stickers(&mut self) {
    self.state.clear_all();
    self.view.grid = view::grid(&self.state);
    self.persist();
  }

  pub fn press_handle(
    &mut self,
    id: EntryId,
    y: f64
  ) {
    if self.drag.press_handle(id, y) {
      self.refresh_editor_view();
    }
  }

  pub fn release_handle(&mut self, id: EntryId) {
    if self.drag.release_handle(id) {
      self.refresh_editor_view();
    }
  }

  pub fn leave_handle(&mut self, id: EntryId) {
    if self.drag.leave_handle(id) {
      self.refresh_editor_view();
    }
  }

  /// The pointer left an entry's handle.
  /// While the button is still `held` the
  /// press is on its way to a drag, so the
  /// entry stays armed.
  pub fn handle_left(
    &mut self,
    id: EntryId,
    held: bool
  ) {
    if held {
      trace!(%id, "pointer left handle mid-press");
      return;
    }
    self.leave_handle(id);
  }

  pub fn should_begin_drag(&self, y: f64) -> bool {
    self.drag.should_begin(y)
  }

  /// Pointer movement over the editor.
  /// Turns an armed press into a drag once
  /// it passes the threshold, then places
  /// the dragged entry.
  pub fn pointer_moved(
    &mut self,
    y: f64,
    boxes: &[EntryBox]
  ) -> Option<Placement> {
    if !self.drag.is_dragging() {
      let armed = self.drag.armed()?;
      if !self.drag.should_begin(y)
        || self.begin_drag(armed)
          == DragStart::Rejected
      {
        return None;
      }
    }
    self.drag_over(y, boxes)
  }

  pub fn begin_drag(
    &mut self,
    id: EntryId
  ) -> DragStart {
    let started = self.drag.begin_drag(id);
    self.refresh_editor_view();
    started
  }

  pub fn drag_over(
    &mut self,
    y: f64,
    boxes: &[EntryBox]
  ) -> Option<Placement> {
    let placement = self.drag.drag_over(
      &mut self.editor,
      y,
      boxes
    )?;
    self.refresh_editor_view();
    Some(placement)
  }

  /// Ends the drag, dropped or cancelled
  /// alike, and commits whatever order the
  /// editor now has.
  #[tracing::instrument(skip(self))]
  pub fn end_drag(&mut self) -> bool {
    let Some(id) = self.drag.finish() else {
      self.refresh_editor_view();
      return false;
    };
    self.editor.reconcile_into(&mut self.state);
    self.refresh_editor_view();
    self.render_labels();
    self.persist();
    debug!(%id, tasks = ?self.state.tasks, "committed drag order");
    true
  }

  fn refresh_editor_view(&mut self) {
    self.view.editor =
      view::editor(&self.editor, &self.drag);
  }

  fn render_labels(&mut self) {
    self.view.labels = view::labels(&self.state);
  }

  fn persist(&mut self) {
    if let Err(error) =
      snapshot::save_state(&mut self.store, &self.state)
    {
      warn!(error = %format!("{error:#}"), "could not save chart");
    }
  }
}
