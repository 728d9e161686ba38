//! Node Collector node: UI anchor with no pads and no computation.

use crate::node::{GraphNode, InputValues, NodeExecutionError, NodeOutput};
use crate::nodes::CONFIG_PADS_CATEGORY;
use crate::types::Schema;

/// Anchor point for the host UI's node grouping; declares nothing and does nothing.
pub struct NodeCollector;

impl GraphNode for NodeCollector {
  fn schema(&self) -> Schema {
    Schema::new("NodeCollector", "Node Collector", CONFIG_PADS_CATEGORY)
  }

  fn execute(&self, _inputs: &InputValues) -> Result<NodeOutput, NodeExecutionError> {
    Ok(NodeOutput::empty())
  }
}
