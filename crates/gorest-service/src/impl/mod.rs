//! Service implementations.
//!
//! Trait definitions live in the parent module (`resource_service.rs`).

pub mod resource_service_impl;

pub use resource_service_impl::{ImportSettings, ResourceServiceImpl, ResourceServiceImplParameters};
