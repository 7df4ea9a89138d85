//! Custom Axum extractors.

mod json;
mod record_id;

pub use json::*;
pub use record_id::*;
