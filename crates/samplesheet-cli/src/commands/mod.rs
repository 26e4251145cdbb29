//! CLI command implementations.

pub mod schemas;
pub mod validate;
