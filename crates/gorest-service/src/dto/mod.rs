//! Response DTOs for the bulk operations.

mod summary_dto;

pub use summary_dto::*;
