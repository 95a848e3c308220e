use sticker_core::chart::{
  MAX_COLUMNS,
  MAX_ROWS,
  MIN_COLUMNS,
  MIN_ROWS
};
use sticker_core::grid::{
  clamp_columns,
  clamp_rows
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ChartFormProps {
  pub child_name:        String,
  pub goal:              String,
  pub sticker_symbol:    String,
  pub sticker_color:     String,
  pub rows:              u32,
  pub columns:           u32,
  pub on_child_name:     Callback<String>,
  pub on_goal:           Callback<String>,
  pub on_sticker_symbol: Callback<String>,
  pub on_sticker_color:  Callback<String>,
  pub on_rows:           Callback<String>,
  pub on_columns:        Callback<String>
}

fn text_input(
  on_change: &Callback<String>
) -> Callback<InputEvent> {
  let on_change = on_change.clone();
  Callback::from(move |e: InputEvent| {
    let input: HtmlInputElement =
      e.target_unchecked_into();
    on_change.emit(input.value());
  })
}

/// Number fields show the clamped value
/// straight away, whatever was typed.
fn bounded_input(
  on_change: &Callback<String>,
  clamp: fn(&str) -> u32
) -> Callback<InputEvent> {
  let on_change = on_change.clone();
  Callback::from(move |e: InputEvent| {
    let input: HtmlInputElement =
      e.target_unchecked_into();
    let raw = input.value();
    input.set_value(
      &clamp(&raw).to_string()
    );
    on_change.emit(raw);
  })
}

#[function_component(ChartForm)]
pub fn chart_form(
  props: &ChartFormProps
) -> Html {
  html! {
      <form class="panel chart-form" onsubmit={|e: yew::SubmitEvent| e.prevent_default()}>
          <label>
              { "Child's name" }
              <input id="childName" type="text"
                  value={props.child_name.clone()}
                  oninput={text_input(&props.on_child_name)} />
          </label>
          <label>
              { "Goal" }
              <input id="goal" type="text"
                  value={props.goal.clone()}
                  oninput={text_input(&props.on_goal)} />
          </label>
          <div class="form-row">
              <label>
                  { "Sticker" }
                  <input id="stickerSymbol" type="text" maxlength="2"
                      value={props.sticker_symbol.clone()}
                      oninput={text_input(&props.on_sticker_symbol)} />
              </label>
              <label>
                  { "Color" }
                  <input id="stickerColor" type="color"
                      value={props.sticker_color.clone()}
                      oninput={text_input(&props.on_sticker_color)} />
              </label>
          </div>
          <div class="form-row">
              <label>
                  { "Rows" }
                  <input id="rows" type="number"
                      min={MIN_ROWS.to_string()} max={MAX_ROWS.to_string()}
                      value={props.rows.to_string()}
                      oninput={bounded_input(&props.on_rows, clamp_rows)} />
              </label>
              <label>
                  { "Columns" }
                  <input id="columns" type="number"
                      min={MIN_COLUMNS.to_string()} max={MAX_COLUMNS.to_string()}
                      value={props.columns.to_string()}
                      oninput={bounded_input(&props.on_columns, clamp_columns)} />
              </label>
          </div>
      </form>
  }
}
