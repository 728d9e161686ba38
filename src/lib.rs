//! # a1r-workshop
//!
//! Config Pads extension for a host node-graph runtime.
//!
//! ## Architecture
//!
//! Four nodes (see `nodes` module) declare schemas and pure execution
//! functions; the host collects them through [`Extension::node_list`] and
//! owns all dispatch between them. Alongside the nodes, a JSON config
//! document store ([`ConfigStore`]) is exposed as a GET/POST endpoint pair
//! ([`routes::router`]) for the host's web server to mount.

pub mod config_store;
#[cfg(test)]
mod config_store_test;
pub mod extension;
pub mod node;
pub mod nodes;
pub mod routes;
pub mod types;

pub use config_store::{CONFIG_FILENAME, ConfigStore, StorageError};
pub use extension::{ConfigPads, Extension, WEB_DIRECTORY, entrypoint};
pub use node::{GraphNode, InputValues, NodeExecutionError, NodeOutput};
pub use routes::{CONFIG_ROUTE, router};
pub use types::{ComboInput, InputSpec, IntInput, NumberDisplay, OutputSpec, Schema};
