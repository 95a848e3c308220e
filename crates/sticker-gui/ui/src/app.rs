use std::cell::RefCell;
use std::rc::Rc;

use sticker_core::config::Config;
use sticker_core::drag::EntryBox;
use sticker_core::{
  CellCoord,
  Coordinator,
  EntryId
};
use yew::{
  Callback,
  Html,
  UseForceUpdateHandle,
  function_component,
  html,
  use_force_update,
  use_mut_ref
};

use crate::components::{
  ChartActions,
  ChartForm,
  ChartGrid,
  ChartPreview,
  TaskEditor
};
use crate::storage::LocalStorageStore;

type Chart = Coordinator<LocalStorageStore>;

fn open_chart() -> Chart {
  let key = Config::defaults().storage_key();
  tracing::info!(%key, "opening chart from local storage");
  Coordinator::load(LocalStorageStore::new(key))
}

/// Wraps a chart operation as a callback
/// that re-renders once it has run.
fn mutate<IN, F>(
  chart: &Rc<RefCell<Chart>>,
  refresh: &UseForceUpdateHandle,
  op: F
) -> Callback<IN>
where
  IN: 'static,
  F: Fn(&mut Chart, IN) + 'static
{
  let chart = chart.clone();
  let refresh = refresh.clone();
  Callback::from(move |input: IN| {
    op(&mut *chart.borrow_mut(), input);
    refresh.force_update();
  })
}

fn print_chart() {
  match web_sys::window() {
    | Some(window) => {
      if let Err(error) = window.print() {
        tracing::warn!(
          ?error,
          "print request failed"
        );
      }
    }
    | None => {
      tracing::warn!(
        "no window to print from"
      )
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let chart = use_mut_ref(open_chart);
  let refresh = use_force_update();

  let (state, view) = {
    let chart = chart.borrow();
    (chart.state().clone(), chart.view().clone())
  };

  let on_child_name =
    mutate(&chart, &refresh, |c, v: String| {
      c.set_child_name(&v)
    });
  let on_goal =
    mutate(&chart, &refresh, |c, v: String| {
      c.set_goal(&v)
    });
  let on_sticker_symbol =
    mutate(&chart, &refresh, |c, v: String| {
      c.set_sticker_symbol(&v)
    });
  let on_sticker_color =
    mutate(&chart, &refresh, |c, v: String| {
      c.set_sticker_color(&v)
    });
  let on_rows =
    mutate(&chart, &refresh, |c, v: String| {
      c.set_rows(&v);
    });
  let on_columns =
    mutate(&chart, &refresh, |c, v: String| {
      c.set_columns(&v);
    });

  let on_add = mutate(&chart, &refresh, |c, ()| {
    c.add_task();
  });
  let on_edit = mutate(
    &chart,
    &refresh,
    |c, (id, text): (EntryId, String)| {
      c.edit_task(id, &text)
    }
  );
  let on_remove =
    mutate(&chart, &refresh, |c, id: EntryId| {
      c.remove_task(id)
    });
  let on_commit =
    mutate(&chart, &refresh, |c, ()| {
      c.commit_tasks()
    });

  let on_press = mutate(
    &chart,
    &refresh,
    |c, (id, y): (EntryId, f64)| {
      c.press_handle(id, y)
    }
  );
  let on_release =
    mutate(&chart, &refresh, |c, id: EntryId| {
      c.release_handle(id)
    });
  let on_leave = mutate(
    &chart,
    &refresh,
    |c, (id, held): (EntryId, bool)| {
      c.handle_left(id, held)
    }
  );
  let on_move = mutate(
    &chart,
    &refresh,
    |c, (y, boxes): (f64, Vec<EntryBox>)| {
      c.pointer_moved(y, &boxes);
    }
  );
  let on_finish =
    mutate(&chart, &refresh, |c, ()| {
      c.end_drag();
    });

  let on_toggle = mutate(
    &chart,
    &refresh,
    |c, coord: CellCoord| {
      c.toggle_sticker(coord);
    }
  );
  let on_clear =
    mutate(&chart, &refresh, |c, ()| {
      c.clear_stickers()
    });
  let on_print =
    Callback::from(|()| print_chart());

  html! {
      <main class="app-layout">
          <aside class="controls">
              <h1>{ "Sticker Chart" }</h1>
              <ChartForm
                  child_name={state.child_name.clone()}
                  goal={state.goal.clone()}
                  sticker_symbol={state.sticker_symbol.clone()}
                  sticker_color={state.sticker_color.clone()}
                  rows={state.rows}
                  columns={state.columns}
                  {on_child_name}
                  {on_goal}
                  {on_sticker_symbol}
                  {on_sticker_color}
                  {on_rows}
                  {on_columns}
              />
              <TaskEditor
                  entries={view.editor.clone()}
                  {on_add}
                  {on_edit}
                  {on_remove}
                  {on_commit}
                  {on_press}
                  {on_release}
                  {on_leave}
                  {on_move}
                  {on_finish}
              />
          </aside>
          <section class="panel chart">
              <ChartPreview preview={view.preview.clone()} />
              <ChartGrid
                  labels={view.labels.clone()}
                  grid={view.grid.clone()}
                  {on_toggle}
              />
              <ChartActions
                  filled={view.grid.filled()}
                  {on_print}
                  {on_clear}
              />
          </section>
      </main>
  }
}
