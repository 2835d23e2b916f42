use crate::domain::comment::{
    entity::{AdminComment, AdminCommentQuery, CommentCounts, ModerationStatus},
    errors::DomainError,
    repository::AdminCommentRepository,
};
use crate::domain::shared::pagination::PageRequest;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminCommentListing {
    pub comments: Vec<AdminComment>,
    pub total: i64,
    pub counts: CommentCounts,
    pub page: i64,
    pub limit: i64,
}

pub struct AdminCommentUseCase {
    repository: Arc<dyn AdminCommentRepository>,
}

impl AdminCommentUseCase {
    pub fn new(repository: Arc<dyn AdminCommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        status: Option<ModerationStatus>,
        page: PageRequest,
    ) -> Result<AdminCommentListing, DomainError> {
        let query = AdminCommentQuery { status, page };
        let (listing, counts) = tokio::try_join!(
            self.repository.get_comments_for_admin(query),
            self.repository.get_comment_counts()
        )?;

        Ok(AdminCommentListing {
            comments: listing.comments,
            total: listing.total,
            counts,
            page: page.page,
            limit: page.limit,
        })
    }

    pub async fn mark_safe(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.mark_comment_safe(id).await? {
            return Err(DomainError::NotFound(format!("comment {}", id)));
        }
        tracing::info!(id, "comment marked safe by admin");
        Ok(())
    }

    pub async fn hide(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.hide_comment(id).await? {
            return Err(DomainError::NotFound(format!("comment {}", id)));
        }
        tracing::info!(id, "comment hidden by admin");
        Ok(())
    }
}
