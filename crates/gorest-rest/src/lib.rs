//! # GoREST REST
//!
//! REST API layer using Axum for the GoREST proxy.
//! Exposes the same eight endpoints for every resource plus health checks
//! and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
