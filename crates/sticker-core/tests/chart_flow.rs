use std::fs;

use sticker_core::config::Config;
use sticker_core::logging::init_tracing;
use sticker_core::store::FileStore;
use sticker_core::{
  CellCoord,
  ChartState,
  Coordinator,
  DragStart,
  EntryBox
};
use tempfile::tempdir;

fn test_config() -> Config {
  let mut cfg = Config::defaults();
  cfg.apply_overrides(vec![(
    "rc.storage.key".to_string(),
    "flow-test".to_string()
  )]);
  init_tracing(&cfg).expect("init tracing");
  cfg
}

#[test]
fn chart_survives_reopen() {
  let temp = tempdir().expect("tempdir");
  let cfg = test_config();

  let mut chart =
    sticker_core::open(&cfg, Some(temp.path()))
      .expect("open chart");
  chart.set_child_name("Ada");
  chart.set_rows("4");
  chart.set_columns("4");

  let ids: Vec<_> = chart
    .view()
    .editor
    .iter()
    .map(|entry| entry.id)
    .collect();
  for id in &ids[3..] {
    chart.remove_task(*id);
  }
  chart.toggle_sticker(CellCoord::new(0, 0));
  chart.toggle_sticker(CellCoord::new(3, 3));
  let (saved, _) = chart.into_parts();

  assert!(temp.path().join("flow-test.json").exists());

  let reopened =
    sticker_core::open(&cfg, Some(temp.path()))
      .expect("reopen chart");
  assert_eq!(reopened.state(), &saved);
  assert_eq!(reopened.state().tasks.len(), 3);
  assert_eq!(reopened.state().stickers.len(), 2);
  assert_eq!(reopened.view().preview.title, "Ada's chart");
}

#[test]
fn corrupted_file_loads_defaults() {
  let temp = tempdir().expect("tempdir");
  fs::write(
    temp.path().join("sticker-chart-settings.json"),
    "]]] definitely not a chart"
  )
  .expect("write corrupt snapshot");

  let store =
    FileStore::open(temp.path(), "sticker-chart-settings")
      .expect("open store");
  let chart = Coordinator::load(store);
  assert_eq!(chart.state(), &ChartState::default());

  // the fallback is written back over the bad payload
  let raw = fs::read_to_string(
    temp.path().join("sticker-chart-settings.json")
  )
  .expect("read snapshot");
  assert!(raw.contains("\"stickerSymbol\""));
}

#[test]
fn hidden_stickers_come_back_after_regrow() {
  let temp = tempdir().expect("tempdir");
  let cfg = test_config();
  let mut chart =
    sticker_core::open(&cfg, Some(temp.path()))
      .expect("open chart");

  chart.set_rows("6");
  chart.set_columns("5");
  assert!(chart.toggle_sticker(CellCoord::new(5, 4)));
  chart.set_rows("3");
  chart.set_columns("3");
  assert_eq!(chart.view().grid.filled(), 0);

  drop(chart);
  let mut chart =
    sticker_core::open(&cfg, Some(temp.path()))
      .expect("reopen chart");
  chart.set_rows("6");
  chart.set_columns("5");
  assert!(
    chart
      .view()
      .grid
      .row(5)
      .get(4)
      .is_some_and(|cell| cell.filled)
  );
}

#[test]
fn cancelled_drag_still_commits_order() {
  let temp = tempdir().expect("tempdir");
  let cfg = test_config();
  let mut chart =
    sticker_core::open(&cfg, Some(temp.path()))
      .expect("open chart");

  let boxes: Vec<EntryBox> = chart
    .view()
    .editor
    .iter()
    .enumerate()
    .map(|(idx, entry)| {
      EntryBox::new(entry.id, idx as f64 * 20.0, 20.0)
    })
    .collect();
  let last = boxes[boxes.len() - 1].id;

  chart.press_handle(last, 110.0);
  assert_eq!(chart.begin_drag(last), DragStart::Started);
  chart.drag_over(0.0, &boxes);
  // pointer released outside the list: still a finish
  assert!(chart.end_drag());

  let reopened =
    sticker_core::open(&cfg, Some(temp.path()))
      .expect("reopen chart");
  assert_eq!(
    reopened.state().tasks.first().map(String::as_str),
    Some("Lights out on time")
  );
}
