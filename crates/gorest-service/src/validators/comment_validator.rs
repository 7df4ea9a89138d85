//! Comment validation.

use super::{base_report, check_reference, ResourceValidator, ValidationMode};
use async_trait::async_trait;
use gorest_core::{Comment, GorestResult, Post, Repository};
use shaku::Component;
use std::sync::Arc;

/// Validates comments: field presence, the post reference, and the ID on update.
#[derive(Component)]
#[shaku(interface = ResourceValidator<Comment>)]
pub struct CommentValidator {
    #[shaku(inject)]
    comments: Arc<dyn Repository<Comment>>,
    #[shaku(inject)]
    posts: Arc<dyn Repository<Post>>,
}

impl CommentValidator {
    #[must_use]
    pub fn new(comments: Arc<dyn Repository<Comment>>, posts: Arc<dyn Repository<Post>>) -> Self {
        Self { comments, posts }
    }
}

#[async_trait]
impl ResourceValidator<Comment> for CommentValidator {
    async fn validate(&self, record: &Comment, mode: ValidationMode) -> GorestResult<()> {
        let mut report = base_report(self.comments.as_ref(), record, mode).await?;
        check_reference(self.posts.as_ref(), "post_id", record.post_id, &mut report).await?;
        report.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryRepository;
    use gorest_core::{GorestError, Resource, ResourceId};

    #[tokio::test]
    async fn test_dangling_post_reference() {
        let validator = CommentValidator::new(
            Arc::new(InMemoryRepository::<Comment>::new()),
            Arc::new(InMemoryRepository::<Post>::new()),
        );
        let comment = Comment::new(ResourceId(3), "Reader", "r@example.com", "Nice");

        let err = validator.validate(&comment, ValidationMode::Create).await.unwrap_err();
        let GorestError::InvalidFields(errors) = err else {
            panic!("Expected InvalidFields");
        };
        assert_eq!(
            errors[0].message,
            "Post_ID is invalid because there is no post found with the ID: 3"
        );
    }

    #[tokio::test]
    async fn test_existing_post_reference() {
        let post = Post::new(ResourceId(1), "t", "b").with_id(ResourceId(3));
        let validator = CommentValidator::new(
            Arc::new(InMemoryRepository::<Comment>::new()),
            Arc::new(InMemoryRepository::with_records(vec![post])),
        );
        let comment = Comment::new(ResourceId(3), "Reader", "r@example.com", "Nice");

        assert!(validator.validate(&comment, ValidationMode::Create).await.is_ok());
    }
}
