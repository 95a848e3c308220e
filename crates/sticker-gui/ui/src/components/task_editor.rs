use sticker_core::drag::{
  DragState,
  EntryBox
};
use sticker_core::tasks::EntryId;
use sticker_core::view::EntryView;
use web_sys::{
  Element,
  FocusEvent,
  PointerEvent
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  function_component,
  html,
  use_node_ref
};

use super::TaskEntryRow;

#[derive(Properties, PartialEq)]
pub struct TaskEditorProps {
  pub entries:    Vec<EntryView>,
  pub on_add:     Callback<()>,
  pub on_edit:    Callback<(EntryId, String)>,
  pub on_remove:  Callback<EntryId>,
  pub on_commit:  Callback<()>,
  pub on_press:   Callback<(EntryId, f64)>,
  pub on_release: Callback<EntryId>,
  pub on_leave:
    Callback<(EntryId, bool)>,
  pub on_move:
    Callback<(f64, Vec<EntryBox>)>,
  pub on_finish:  Callback<()>
}

/// Reads the on-screen extent of every
/// row, in document order.
fn measure_rows(
  list_ref: &NodeRef,
  entries: &[EntryView]
) -> Vec<EntryBox> {
  let Some(list) =
    list_ref.cast::<Element>()
  else {
    return vec![];
  };
  let rows = list.children();
  (0..rows.length())
    .filter_map(|idx| rows.item(idx))
    .filter_map(|row| {
      let raw = row
        .get_attribute("data-entry")?
        .parse::<u64>()
        .ok()?;
      let entry = entries
        .iter()
        .find(|entry| entry.id.raw() == raw)?;
      let rect =
        row.get_bounding_client_rect();
      Some(EntryBox::new(
        entry.id,
        rect.top(),
        rect.height()
      ))
    })
    .collect()
}

#[function_component(TaskEditor)]
pub fn task_editor(
  props: &TaskEditorProps
) -> Html {
  let list_ref = use_node_ref();
  let active = props
    .entries
    .iter()
    .find(|entry| {
      entry.drag != DragState::Idle
    })
    .map(|entry| (entry.id, entry.drag));

  let on_row_press = {
    let on_press = props.on_press.clone();
    let list_ref = list_ref.clone();
    Callback::from(
      move |(id, event): (
        EntryId,
        PointerEvent
      )| {
        // the list keeps the pointer while
        // rows are shuffled around under it
        if let Some(list) =
          list_ref.cast::<Element>()
          && let Err(error) = list
            .set_pointer_capture(
              event.pointer_id()
            )
        {
          tracing::warn!(
            ?error,
            "failed to capture pointer"
          );
        }
        on_press.emit((
          id,
          event.client_y() as f64
        ));
      }
    )
  };

  let onpointermove = {
    let on_move = props.on_move.clone();
    let list_ref = list_ref.clone();
    let entries = props.entries.clone();
    Callback::from(
      move |event: PointerEvent| {
        if active.is_none() {
          return;
        }
        on_move.emit((
          event.client_y() as f64,
          measure_rows(&list_ref, &entries)
        ));
      }
    )
  };

  let onpointerup = {
    let on_release =
      props.on_release.clone();
    let on_finish =
      props.on_finish.clone();
    Callback::from(
      move |_: PointerEvent| match active {
        | Some((_, DragState::Dragging)) => {
          on_finish.emit(())
        }
        | Some((id, _)) => {
          on_release.emit(id)
        }
        | None => {}
      }
    )
  };
  let onpointercancel = onpointerup.clone();

  let onfocusout = {
    let on_commit =
      props.on_commit.clone();
    Callback::from(
      move |_: FocusEvent| {
        on_commit.emit(())
      }
    )
  };

  let on_add = props.on_add.clone();

  html! {
      <section class="panel task-editor">
          <div class="header">
              <span>{ "Tasks" }</span>
              <button id="addTask" type="button" onclick={move |_| on_add.emit(())}>
                  { "+ Add task" }
              </button>
          </div>
          <ul
              id="taskList"
              class="task-list"
              ref={list_ref}
              {onpointermove}
              {onpointerup}
              {onpointercancel}
              {onfocusout}
          >
              {
                  for props.entries.iter().cloned().map(|entry| html! {
                      <TaskEntryRow
                          key={entry.id.raw()}
                          entry={entry.clone()}
                          on_edit={props.on_edit.clone()}
                          on_remove={props.on_remove.clone()}
                          on_press={on_row_press.clone()}
                          on_leave={props.on_leave.clone()}
                      />
                  })
              }
          </ul>
      </section>
  }
}
