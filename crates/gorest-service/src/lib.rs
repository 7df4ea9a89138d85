//! # GoREST Service
//!
//! Business operations shared by every resource: lookup, listing,
//! deletion, validated create/update, and import from the remote API.

pub mod dto;
pub mod r#impl;
pub mod resource_service;
pub mod validators;

#[cfg(test)]
pub(crate) mod testing;

pub use dto::*;
pub use r#impl::*;
pub use resource_service::*;
pub use validators::*;
