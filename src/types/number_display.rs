//! Display mode for integer inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the host UI renders an integer input widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberDisplay {
  /// Plain number entry field.
  #[default]
  Number,
  /// Slider between the declared min and max.
  Slider,
}

impl fmt::Display for NumberDisplay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NumberDisplay::Number => write!(f, "number"),
      NumberDisplay::Slider => write!(f, "slider"),
    }
  }
}
