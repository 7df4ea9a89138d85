//! # Domain
//!
//! The four record types mirrored from the remote API and the
//! [`Resource`] trait that lets the upper layers treat them uniformly.

pub mod entities;
pub mod resource;

pub use entities::*;
pub use resource::*;
