//! Typed input declarations for node schemas.

use super::NumberDisplay;
use serde::{Deserialize, Serialize};

fn default_step() -> u64 {
  1
}

/// Integer input with an inclusive range, default value, and display mode.
///
/// Bounds are declared for the host's input-validation layer; nodes receive
/// already-validated values and do not re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntInput {
  pub name: String,
  pub default: u64,
  pub min: u64,
  pub max: u64,
  #[serde(default = "default_step")]
  pub step: u64,
  #[serde(default)]
  pub display: NumberDisplay,
}

impl IntInput {
  /// Integer input named `name` with the given default and inclusive bounds.
  /// Step starts at 1 and display at a plain number field.
  pub fn new(name: impl Into<String>, default: u64, min: u64, max: u64) -> Self {
    Self {
      name: name.into(),
      default,
      min,
      max,
      step: default_step(),
      display: NumberDisplay::default(),
    }
  }

  pub fn with_step(mut self, step: u64) -> Self {
    self.step = step;
    self
  }

  pub fn with_display(mut self, display: NumberDisplay) -> Self {
    self.display = display;
    self
  }
}

/// Closed selection input: exactly one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboInput {
  pub name: String,
  pub options: Vec<String>,
  pub default: String,
}

impl ComboInput {
  pub fn new(name: impl Into<String>, options: Vec<String>, default: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      options,
      default: default.into(),
    }
  }
}

/// A typed input a node declares in its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputSpec {
  Int(IntInput),
  Combo(ComboInput),
}

impl InputSpec {
  /// Declared input name (the key the host populates in execution inputs).
  pub fn name(&self) -> &str {
    match self {
      InputSpec::Int(input) => &input.name,
      InputSpec::Combo(input) => &input.name,
    }
  }
}

impl From<IntInput> for InputSpec {
  fn from(input: IntInput) -> Self {
    InputSpec::Int(input)
  }
}

impl From<ComboInput> for InputSpec {
  fn from(input: ComboInput) -> Self {
    InputSpec::Combo(input)
  }
}
