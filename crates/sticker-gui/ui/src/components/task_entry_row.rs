use sticker_core::drag::DragState;
use sticker_core::tasks::EntryId;
use sticker_core::view::EntryView;
use web_sys::{
  HtmlElement,
  HtmlInputElement,
  KeyboardEvent,
  PointerEvent
};
use yew::{
  Callback,
  Html,
  InputEvent,
  NodeRef,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskEntryRowProps {
  pub entry:     EntryView,
  pub on_edit:   Callback<(EntryId, String)>,
  pub on_remove: Callback<EntryId>,
  pub on_press:
    Callback<(EntryId, PointerEvent)>,
  pub on_leave:
    Callback<(EntryId, bool)>
}

#[function_component(TaskEntryRow)]
pub fn task_entry_row(
  props: &TaskEntryRowProps
) -> Html {
  let id = props.entry.id;
  let row_ref = use_node_ref();

  let onpointerdown = {
    let on_press = props.on_press.clone();
    Callback::from(
      move |event: PointerEvent| {
        if event.button() == 0 {
          on_press.emit((id, event));
        }
      }
    )
  };

  let onpointerleave = {
    let on_leave = props.on_leave.clone();
    Callback::from(
      move |event: PointerEvent| {
        // a held primary button means the
        // press is turning into a drag
        let held = event.buttons() & 1 != 0;
        on_leave.emit((id, held))
      }
    )
  };

  let onkeydown = {
    let row_ref = row_ref.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == " "
          || event.key() == "Enter"
        {
          event.prevent_default();
          focus_row(&row_ref);
        }
      }
    )
  };

  let oninput = {
    let on_edit = props.on_edit.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_edit.emit((id, input.value()));
      }
    )
  };

  let onremove = {
    let on_remove =
      props.on_remove.clone();
    Callback::from(move |_| {
      on_remove.emit(id)
    })
  };

  let dragging =
    props.entry.drag == DragState::Dragging;

  html! {
      <li
          ref={row_ref}
          class={classes!(
              "task-item",
              dragging.then_some("dragging")
          )}
          tabindex="-1"
          data-entry={id.raw().to_string()}
          data-empty={props.entry.is_blank().to_string()}
      >
          <span
              class="drag-handle"
              role="button"
              tabindex="0"
              aria-label="Drag to reorder"
              {onpointerdown}
              {onpointerleave}
              {onkeydown}
          >
              { "⋮⋮" }
          </span>
          <input
              class="task-input"
              type="text"
              placeholder="Add a task"
              value={props.entry.text.clone()}
              {oninput}
          />
          <button type="button" class="remove-task" aria-label="Remove task" onclick={onremove}>
              { "✕" }
          </button>
      </li>
  }
}

fn focus_row(row_ref: &NodeRef) {
  if let Some(row) =
    row_ref.cast::<HtmlElement>()
    && let Err(error) = row.focus()
  {
    tracing::debug!(
      ?error,
      "failed to focus task row"
    );
  }
}
