//! # GoREST Remote
//!
//! Read-only client for the public GoREST API. Records are fetched either
//! one at a time or a page at a time; the page count comes from the
//! `X-Pagination-Pages` response header.

mod client;
mod source;

pub use client::*;
pub use source::*;
