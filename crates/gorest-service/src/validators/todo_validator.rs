//! ToDo validation.

use super::{base_report, check_reference, ResourceValidator, ValidationMode};
use async_trait::async_trait;
use gorest_core::{GorestResult, Repository, ToDo, User};
use shaku::Component;
use std::sync::Arc;

/// Validates to-dos: field presence, the owner reference, and the ID on update.
#[derive(Component)]
#[shaku(interface = ResourceValidator<ToDo>)]
pub struct ToDoValidator {
    #[shaku(inject)]
    todos: Arc<dyn Repository<ToDo>>,
    #[shaku(inject)]
    users: Arc<dyn Repository<User>>,
}

impl ToDoValidator {
    #[must_use]
    pub fn new(todos: Arc<dyn Repository<ToDo>>, users: Arc<dyn Repository<User>>) -> Self {
        Self { todos, users }
    }
}

#[async_trait]
impl ResourceValidator<ToDo> for ToDoValidator {
    async fn validate(&self, record: &ToDo, mode: ValidationMode) -> GorestResult<()> {
        let mut report = base_report(self.todos.as_ref(), record, mode).await?;
        check_reference(self.users.as_ref(), "user_id", record.user_id, &mut report).await?;
        report.into_result()
    }
}
