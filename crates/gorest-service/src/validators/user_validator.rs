//! User validation.

use super::{base_report, ResourceValidator, ValidationMode};
use async_trait::async_trait;
use gorest_core::{GorestResult, Repository, User};
use shaku::Component;
use std::sync::Arc;

/// Validates users: field presence, plus the ID on update.
#[derive(Component)]
#[shaku(interface = ResourceValidator<User>)]
pub struct UserValidator {
    #[shaku(inject)]
    users: Arc<dyn Repository<User>>,
}

impl UserValidator {
    #[must_use]
    pub fn new(users: Arc<dyn Repository<User>>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl ResourceValidator<User> for UserValidator {
    async fn validate(&self, record: &User, mode: ValidationMode) -> GorestResult<()> {
        base_report(self.users.as_ref(), record, mode)
            .await?
            .into_result()
    }
}
