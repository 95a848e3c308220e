use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ChartActionsProps {
  pub filled:   usize,
  pub on_print: Callback<()>,
  pub on_clear: Callback<()>
}

#[function_component(ChartActions)]
pub fn chart_actions(
  props: &ChartActionsProps
) -> Html {
  let on_print = props.on_print.clone();
  let on_clear = props.on_clear.clone();

  html! {
      <div class="chart-actions">
          <span class="badge">{ format!("{} stickers", props.filled) }</span>
          <button id="printBtn" type="button" onclick={move |_| on_print.emit(())}>
              { "Print chart" }
          </button>
          <button id="clearBtn" type="button" onclick={move |_| on_clear.emit(())}>
              { "Clear stickers" }
          </button>
      </div>
  }
}
