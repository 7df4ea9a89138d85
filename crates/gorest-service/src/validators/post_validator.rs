//! Post validation.

use super::{base_report, check_reference, ResourceValidator, ValidationMode};
use async_trait::async_trait;
use gorest_core::{GorestResult, Post, Repository, User};
use shaku::Component;
use std::sync::Arc;

/// Validates posts: field presence, the author reference, and the ID on update.
#[derive(Component)]
#[shaku(interface = ResourceValidator<Post>)]
pub struct PostValidator {
    #[shaku(inject)]
    posts: Arc<dyn Repository<Post>>,
    #[shaku(inject)]
    users: Arc<dyn Repository<User>>,
}

impl PostValidator {
    #[must_use]
    pub fn new(posts: Arc<dyn Repository<Post>>, users: Arc<dyn Repository<User>>) -> Self {
        Self { posts, users }
    }
}

#[async_trait]
impl ResourceValidator<Post> for PostValidator {
    async fn validate(&self, record: &Post, mode: ValidationMode) -> GorestResult<()> {
        let mut report = base_report(self.posts.as_ref(), record, mode).await?;
        check_reference(self.users.as_ref(), "user_id", record.user_id, &mut report).await?;
        report.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryRepository;
    use gorest_core::{GorestError, Resource, ResourceId};

    fn validator(users: Vec<User>) -> PostValidator {
        PostValidator::new(
            Arc::new(InMemoryRepository::<Post>::new()),
            Arc::new(InMemoryRepository::with_records(users)),
        )
    }

    fn author() -> User {
        User::new("Ada", "ada@example.com", "female", "active").with_id(ResourceId(5))
    }

    #[tokio::test]
    async fn test_valid_post() {
        let post = Post::new(ResourceId(5), "Title", "Body");
        assert!(validator(vec![author()]).validate(&post, ValidationMode::Create).await.is_ok());
    }

    #[tokio::test]
    async fn test_dangling_user_reference() {
        let post = Post::new(ResourceId(8), "Title", "Body");
        let err = validator(vec![author()])
            .validate(&post, ValidationMode::Create)
            .await
            .unwrap_err();

        let GorestError::InvalidFields(errors) = err else {
            panic!("Expected InvalidFields");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "user_id");
        assert_eq!(
            errors[0].message,
            "User_ID is invalid because there is no user found with the ID: 8"
        );
    }

    #[tokio::test]
    async fn test_blank_user_reported_once() {
        let post = Post::new(ResourceId::UNASSIGNED, "Title", "Body");
        let err = validator(vec![])
            .validate(&post, ValidationMode::Create)
            .await
            .unwrap_err();

        let GorestError::InvalidFields(errors) = err else {
            panic!("Expected InvalidFields");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "User_ID cannot be left blank.");
    }
}
