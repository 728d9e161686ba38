//! Typed output declarations for node schemas.

use serde::{Deserialize, Serialize};

/// A named, typed output pad a node declares in its schema.
///
/// `data_type` is the host's pad type tag; values are routed between pads
/// of matching type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
  pub name: String,
  pub data_type: String,
}

impl OutputSpec {
  /// Integer output pad named `name`.
  pub fn int(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      data_type: "INT".to_string(),
    }
  }
}
