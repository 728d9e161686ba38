//! Node schema: the declared interface the host collects at registration.

use super::{InputSpec, OutputSpec};
use serde::{Deserialize, Serialize};

/// A node's declared interface: identity plus typed inputs and outputs.
///
/// The host renders inputs in declaration order and routes output values
/// positionally against the declared outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
  /// Unique node type id (e.g. `SizeCanvas`).
  pub node_id: String,
  /// Human-readable name shown by the host UI.
  pub display_name: String,
  /// Menu category path (e.g. `A1R Workspace/Config Pads`).
  pub category: String,
  pub inputs: Vec<InputSpec>,
  pub outputs: Vec<OutputSpec>,
}

impl Schema {
  pub fn new(
    node_id: impl Into<String>,
    display_name: impl Into<String>,
    category: impl Into<String>,
  ) -> Self {
    Self {
      node_id: node_id.into(),
      display_name: display_name.into(),
      category: category.into(),
      inputs: Vec::new(),
      outputs: Vec::new(),
    }
  }

  /// Appends a typed input.
  pub fn add_input(mut self, input: impl Into<InputSpec>) -> Self {
    self.inputs.push(input.into());
    self
  }

  /// Appends a typed output.
  pub fn add_output(mut self, output: OutputSpec) -> Self {
    self.outputs.push(output);
    self
  }

  /// Looks up a declared input by name.
  pub fn input(&self, name: &str) -> Option<&InputSpec> {
    self.inputs.iter().find(|input| input.name() == name)
  }
}
