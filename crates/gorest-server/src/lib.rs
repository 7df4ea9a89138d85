//! # GoREST Server Library
//!
//! Wiring and startup for the GoREST proxy server.

pub mod app;
pub mod di;
pub mod startup;
