use sticker_core::CellCoord;
use sticker_core::view::GridView;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ChartGridProps {
  pub labels:    Vec<String>,
  pub grid:      GridView,
  pub on_toggle: Callback<CellCoord>
}

#[function_component(ChartGrid)]
pub fn chart_grid(
  props: &ChartGridProps
) -> Html {
  let grid_style = format!(
    "grid-template-columns: repeat({}, \
     minmax(80px, 1fr)); \
     --sticker-color: {};",
    props.grid.columns, props.grid.color
  );

  html! {
      <div class="chart-body">
          <div id="taskLabels" class="task-labels">
              {
                  for props.labels.iter().map(|label| html! {
                      <div class="task-label">{ label }</div>
                  })
              }
          </div>
          <div id="chartGrid" class="chart-grid" style={grid_style}>
              {
                  for props.grid.cells.iter().map(|cell| {
                      let coord = cell.coord;
                      let on_toggle = props.on_toggle.clone();
                      html! {
                          <button
                              type="button"
                              key={coord.to_string()}
                              class={classes!("chart-cell", cell.filled.then_some("filled"))}
                              data-key={coord.to_string()}
                              aria-label={cell.aria_label.clone()}
                              onclick={move |_| on_toggle.emit(coord)}
                          >
                              { &cell.symbol }
                          </button>
                      }
                  })
              }
          </div>
      </div>
  }
}
