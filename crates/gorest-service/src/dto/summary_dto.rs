//! Summaries returned by delete-all and import-all.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    /// Human-readable summary, e.g. `"Users Deleted: 3"`.
    pub message: String,
    /// Number of records affected.
    pub count: u64,
}

impl CountResponse {
    /// Summary for a bulk delete of `name` records.
    #[must_use]
    pub fn deleted(name: &str, count: u64) -> Self {
        Self {
            message: format!("{}s Deleted: {}", name, count),
            count,
        }
    }
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportSummary {
    /// Human-readable summary, e.g. `"Posts Created: 20"`.
    pub message: String,
    /// Number of records stored.
    pub count: u64,
    /// Number of remote pages fetched.
    pub pages: u32,
}

impl ImportSummary {
    /// Summary for a bulk import of `name` records.
    #[must_use]
    pub fn created(name: &str, count: u64, pages: u32) -> Self {
        Self {
            message: format!("{}s Created: {}", name, count),
            count,
            pages,
        }
    }
}
