//! Size Canvas node: preset-driven width/height emitter.

use crate::node::{GraphNode, InputValues, NodeExecutionError, NodeOutput, require_str, require_u64};
use crate::nodes::CONFIG_PADS_CATEGORY;
use crate::types::{ComboInput, IntInput, NumberDisplay, OutputSpec, Schema};

/// Preset labels with their literal (width, height) pairs, in display order.
pub(crate) const SIZE_PRESETS: [(&str, (u64, u64)); 14] = [
  ("Squire 512x512", (512, 512)),
  ("Squire 768x768", (768, 768)),
  ("Squire 1024x1024", (1024, 1024)),
  ("Portrait 512x768", (512, 768)),
  ("Portrait 768x1024", (768, 1024)),
  ("Portrait 1024x1536", (1024, 1536)),
  ("Landscape 768x512", (768, 512)),
  ("Landscape 1024x768", (1024, 768)),
  ("Landscape 1536x1024", (1536, 1024)),
  ("16:9 1920x1080", (1920, 1080)),
  ("16:9 1280x720", (1280, 720)),
  ("9:16 1080x1920", (1080, 1920)),
  ("4:3 1024x768", (1024, 768)),
  ("3:4 768x1024", (768, 1024)),
];

/// Selection label that passes the explicit width/height through unchanged.
pub(crate) const CUSTOM_LABEL: &str = "Custom";

/// Resolves a selection to a (width, height) pair: `Custom` passes the
/// explicit values through, any other label is looked up in the preset table.
pub(crate) fn resolve_size(
  preset: &str,
  width: u64,
  height: u64,
) -> Result<(u64, u64), NodeExecutionError> {
  if preset == CUSTOM_LABEL {
    return Ok((width, height));
  }
  SIZE_PRESETS
    .iter()
    .find(|(label, _)| *label == preset)
    .map(|(_, size)| *size)
    .ok_or_else(|| NodeExecutionError::UnknownPreset(preset.to_string()))
}

/// Emits a (width, height) pair from a preset selection, or the explicit
/// slider values when the selection is `Custom`.
pub struct SizeCanvas;

impl GraphNode for SizeCanvas {
  fn schema(&self) -> Schema {
    let mut options = vec![CUSTOM_LABEL.to_string()];
    options.extend(SIZE_PRESETS.iter().map(|(label, _)| (*label).to_string()));
    Schema::new("SizeCanvas", "Size Canvas", CONFIG_PADS_CATEGORY)
      .add_input(ComboInput::new("preset", options, "Squire 1024x1024"))
      .add_input(
        IntInput::new("width", 1024, 128, 4096)
          .with_step(128)
          .with_display(NumberDisplay::Slider),
      )
      .add_input(
        IntInput::new("height", 1024, 128, 4096)
          .with_step(128)
          .with_display(NumberDisplay::Slider),
      )
      .add_output(OutputSpec::int("width"))
      .add_output(OutputSpec::int("height"))
  }

  fn execute(&self, inputs: &InputValues) -> Result<NodeOutput, NodeExecutionError> {
    let preset = require_str(inputs, "preset")?;
    let width = require_u64(inputs, "width")?;
    let height = require_u64(inputs, "height")?;
    let (width, height) = resolve_size(preset, width, height)?;
    tracing::trace!(preset = %preset, width, height, "SizeCanvas resolved");
    Ok(NodeOutput::new(vec![width.into(), height.into()]))
  }
}
