//! Tests for `WidgetCollector`.

use super::{CONFIG_PADS_CATEGORY, WidgetCollector};
use crate::node::{GraphNode, InputValues};

#[test]
fn schema_has_no_pads() {
  let schema = WidgetCollector.schema();
  assert_eq!(schema.node_id, "WidgetCollector");
  assert_eq!(schema.display_name, "Widget Collector");
  assert_eq!(schema.category, CONFIG_PADS_CATEGORY);
  assert!(schema.inputs.is_empty());
  assert!(schema.outputs.is_empty());
}

#[test]
fn execute_returns_empty_output() {
  let output = WidgetCollector.execute(&InputValues::new()).unwrap();
  assert!(output.values.is_empty());
}
