use sticker_core::view::PreviewView;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ChartPreviewProps {
  pub preview: PreviewView
}

#[function_component(ChartPreview)]
pub fn chart_preview(
  props: &ChartPreviewProps
) -> Html {
  let preview = &props.preview;
  let sticker_style =
    format!("color: {};", preview.color);

  html! {
      <header class="chart-header">
          <div class="preview">
              <span id="previewChild">{ &preview.child }</span>
              <span id="previewGoal">{ &preview.goal }</span>
              <span id="previewSticker" style={sticker_style}>{ &preview.sticker }</span>
          </div>
          <h2 id="chartTitle">{ &preview.title }</h2>
          <p id="chartGoal">{ &preview.chart_goal }</p>
      </header>
  }
}
