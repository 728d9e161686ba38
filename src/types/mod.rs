//! Host-contract schema types, collected from the extension at registration.
//!
//! The host hands these to its UI as JSON; everything here is serde-serializable.

mod input_spec;
mod number_display;
mod output_spec;
mod schema;

pub use input_spec::{ComboInput, InputSpec, IntInput};
pub use number_display::NumberDisplay;
pub use output_spec::OutputSpec;
pub use schema::Schema;
