//! Node contract: the schema/execute capability a node registers with the host.
//!
//! The host owns invocation ordering, UI layout, and value propagation
//! between pads; a node only declares its interface and maps inputs to
//! outputs in one pure, synchronous step.

use crate::types::Schema;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Input values for one node execution, keyed by declared input name.
pub type InputValues = HashMap<String, Value>;

/// Error raised from a node execution into the host's error path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeExecutionError {
  /// Selection label is neither `Custom` nor a known preset.
  #[error("unknown preset '{0}'")]
  UnknownPreset(String),
  #[error("missing input '{0}'")]
  MissingInput(String),
  #[error("input '{name}' is not {expected}")]
  WrongType { name: String, expected: &'static str },
}

/// Ordered output values, positionally matching the node's declared outputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeOutput {
  pub values: Vec<Value>,
}

impl NodeOutput {
  /// Output of a node with no declared output pads.
  pub fn empty() -> Self {
    Self { values: Vec::new() }
  }

  pub fn new(values: Vec<Value>) -> Self {
    Self { values }
  }
}

/// A node type this extension registers into the host graph.
pub trait GraphNode: Send + Sync {
  /// Declared interface: id, display name, category, typed inputs/outputs.
  fn schema(&self) -> Schema;

  /// Executes the node with host-validated inputs.
  fn execute(&self, inputs: &InputValues) -> Result<NodeOutput, NodeExecutionError>;
}

/// Reads an unsigned integer input by name.
pub(crate) fn require_u64(inputs: &InputValues, name: &str) -> Result<u64, NodeExecutionError> {
  let value = inputs
    .get(name)
    .ok_or_else(|| NodeExecutionError::MissingInput(name.to_string()))?;
  value.as_u64().ok_or_else(|| NodeExecutionError::WrongType {
    name: name.to_string(),
    expected: "an unsigned integer",
  })
}

/// Reads a string input by name.
pub(crate) fn require_str<'a>(
  inputs: &'a InputValues,
  name: &str,
) -> Result<&'a str, NodeExecutionError> {
  let value = inputs
    .get(name)
    .ok_or_else(|| NodeExecutionError::MissingInput(name.to_string()))?;
  value.as_str().ok_or_else(|| NodeExecutionError::WrongType {
    name: name.to_string(),
    expected: "a string",
  })
}
