//! Extension registration: the node list and web directory the host collects.

use crate::node::GraphNode;
use crate::nodes::{NodeCollector, SeedControl, SizeCanvas, WidgetCollector};
use async_trait::async_trait;
use tracing::info;

/// Static web-asset directory declared to the host, relative to the
/// extension's install directory. Its contents are the host UI's concern.
pub const WEB_DIRECTORY: &str = "./web";

/// An extension the host runtime collects node types from.
#[async_trait]
pub trait Extension: Send + Sync {
  /// Node types this extension provides.
  async fn node_list(&self) -> Vec<Box<dyn GraphNode>>;

  /// Web-asset directory to declare to the host, if any.
  fn web_directory(&self) -> Option<&str> {
    None
  }
}

/// The Config Pads extension: size/seed emitters and the collector anchors.
pub struct ConfigPads;

#[async_trait]
impl Extension for ConfigPads {
  async fn node_list(&self) -> Vec<Box<dyn GraphNode>> {
    vec![
      Box::new(SizeCanvas),
      Box::new(SeedControl),
      Box::new(WidgetCollector),
      Box::new(NodeCollector),
    ]
  }

  fn web_directory(&self) -> Option<&str> {
    Some(WEB_DIRECTORY)
  }
}

/// Host entrypoint: builds the extension instance.
pub async fn entrypoint() -> ConfigPads {
  info!("A1RWorkshop extension loaded");
  ConfigPads
}
