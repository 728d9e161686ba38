//! The Config Pads node set this extension registers with the host.

mod node_collector;
mod seed_control;
mod size_canvas;
mod widget_collector;
#[cfg(test)]
mod widget_collector_test;

pub use node_collector::NodeCollector;
pub use seed_control::SeedControl;
pub use size_canvas::SizeCanvas;
pub use widget_collector::WidgetCollector;

/// Menu category shared by all Config Pads nodes.
pub const CONFIG_PADS_CATEGORY: &str = "A1R Workspace/Config Pads";
