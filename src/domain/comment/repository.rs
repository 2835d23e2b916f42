use super::entity::{
    AdminCommentPage, AdminCommentQuery, Comment, CommentCounts, ModerationInput,
    ModerationResult, ModerationStatus, NewComment,
};
use super::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Non-deleted comments of an article, newest first.
    async fn get_comments_by_slug(&self, slug: &str) -> Result<Vec<Comment>, DomainError>;

    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError>;

    async fn create_comment(&self, input: NewComment) -> Result<i64, DomainError> {
        self.create_comment_with_moderation(input, ModerationStatus::Unverified)
            .await
    }

    /// Inserts with an explicit initial verdict. Anything other than
    /// `Unverified` is stamped as already moderated.
    async fn create_comment_with_moderation(
        &self,
        input: NewComment,
        status: ModerationStatus,
    ) -> Result<i64, DomainError>;

    /// Oldest-first comments that have never been visited by the engine.
    async fn get_unmoderated_comments(
        &self,
        limit: i64,
    ) -> Result<Vec<ModerationInput>, DomainError>;

    /// Applies all results atomically. Empty input is a no-op.
    async fn update_moderation_status(
        &self,
        results: &[ModerationResult],
    ) -> Result<(), DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait]
pub trait AdminCommentRepository: Send + Sync {
    async fn get_comments_for_admin(
        &self,
        query: AdminCommentQuery,
    ) -> Result<AdminCommentPage, DomainError>;

    async fn get_comment_counts(&self) -> Result<CommentCounts, DomainError>;

    /// Returns `false` when no live comment has this id.
    async fn mark_comment_safe(&self, id: i64) -> Result<bool, DomainError>;

    async fn hide_comment(&self, id: i64) -> Result<bool, DomainError>;
}
