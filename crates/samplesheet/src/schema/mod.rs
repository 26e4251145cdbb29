//! Schemas for each supported input type.

mod registry;
mod types;

pub(crate) use registry::required_columns_of;
pub use registry::SchemaRegistry;
pub use types::{FieldDescription, SchemaDescription, SchemaTag};
