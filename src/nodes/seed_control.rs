//! Seed Control node: labeled pass-through pad for a graph-routed seed value.

use crate::node::{GraphNode, InputValues, NodeExecutionError, NodeOutput, require_u64};
use crate::nodes::CONFIG_PADS_CATEGORY;
use crate::types::{IntInput, OutputSpec, Schema};

/// Forwards its seed input to its seed output unchanged, so the host graph
/// can route one seed value through a named pad.
pub struct SeedControl;

impl GraphNode for SeedControl {
  fn schema(&self) -> Schema {
    Schema::new("SeedControl", "Seed Control", CONFIG_PADS_CATEGORY)
      .add_input(IntInput::new("seed", 0, 0, u64::MAX))
      .add_output(OutputSpec::int("seed"))
  }

  fn execute(&self, inputs: &InputValues) -> Result<NodeOutput, NodeExecutionError> {
    let seed = require_u64(inputs, "seed")?;
    Ok(NodeOutput::new(vec![seed.into()]))
  }
}
