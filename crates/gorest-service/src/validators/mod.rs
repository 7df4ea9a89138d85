//! Per-resource validators.
//!
//! Field presence rules come from each entity's `validator` derive; the
//! validators here add the checks that need the store: the ID check for
//! updates and the reference checks for child records.

mod comment_validator;
mod post_validator;
mod todo_validator;
mod user_validator;

pub use comment_validator::*;
pub use post_validator::*;
pub use todo_validator::*;
pub use user_validator::*;

use async_trait::async_trait;
use gorest_core::{
    GorestResult, Interface, Repository, Resource, ResourceId, ValidateExt, ValidationReport,
};

/// Whether a record is being created or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// New record; the ID is ignored.
    Create,
    /// Replacement; the ID must name a stored record.
    Update,
}

/// Validates a record before it is stored.
#[async_trait]
pub trait ResourceValidator<T: Resource>: Interface {
    /// Returns `GorestError::InvalidFields` listing every failure.
    async fn validate(&self, record: &T, mode: ValidationMode) -> GorestResult<()>;
}

/// Starts a report with the update-mode ID check and the field rules.
async fn base_report<T: Resource>(
    repository: &dyn Repository<T>,
    record: &T,
    mode: ValidationMode,
) -> GorestResult<ValidationReport> {
    let mut report = ValidationReport::new();
    let id = *record.id();

    if mode == ValidationMode::Update {
        if id.is_unassigned() {
            report.add("id", "ID cannot be left blank", "required");
        } else if !repository.exists(id).await? {
            report.add(
                "id",
                format!("No {} found with the ID: {}", T::LABEL, id),
                "not_found",
            );
        }
    }

    report.extend(record.field_errors());
    Ok(report)
}

/// Reports a reference to a record that is not stored.
///
/// Unassigned references are skipped; the field rules already flag them.
async fn check_reference<R: Resource>(
    repository: &dyn Repository<R>,
    field: &str,
    id: ResourceId,
    report: &mut ValidationReport,
) -> GorestResult<()> {
    if !id.is_unassigned() && !repository.exists(id).await? {
        report.add(
            field,
            format!(
                "{}_ID is invalid because there is no {} found with the ID: {}",
                R::NAME,
                R::LABEL,
                id
            ),
            "invalid_reference",
        );
    }
    Ok(())
}
