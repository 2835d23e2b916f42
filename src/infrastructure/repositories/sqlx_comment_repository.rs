use crate::domain::comment::{
    entity::{
        AdminComment, AdminCommentPage, AdminCommentQuery, Comment, CommentCounts,
        ModerationInput, ModerationResult, ModerationStatus, NewComment,
    },
    errors::DomainError,
    repository::{AdminCommentRepository, CommentRepository},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const COMMENT_COLUMNS: &str = "id, created_at, message, alias, parent_id, article_slug, \
     moderation_status, hide_publicity, moderation_reason, last_moderated_at";

fn infra(err: sqlx::Error) -> DomainError {
    DomainError::InfrastructureError(err.to_string())
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    created_at: DateTime<Utc>,
    message: String,
    alias: String,
    parent_id: Option<i64>,
    article_slug: String,
    moderation_status: i16,
    hide_publicity: bool,
    moderation_reason: Option<String>,
    last_moderated_at: Option<DateTime<Utc>>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let moderation_status = ModerationStatus::try_from(row.moderation_status)
            .map_err(|e| DomainError::InfrastructureError(format!("reply {}: {}", row.id, e)))?;
        Ok(Comment {
            id: row.id,
            created_at: row.created_at,
            message: row.message,
            alias: row.alias,
            parent_id: row.parent_id,
            article_slug: row.article_slug,
            moderation_status,
            hide_publicity: row.hide_publicity,
            moderation_reason: row.moderation_reason,
            last_moderated_at: row.last_moderated_at,
        })
    }
}

fn into_comments(rows: Vec<CommentRow>) -> Result<Vec<Comment>, DomainError> {
    rows.into_iter().map(Comment::try_from).collect()
}

/// Page row with the immediate parent joined in under a `parent_` prefix.
#[derive(Debug, FromRow)]
struct AdminCommentRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    parent_row_id: Option<i64>,
    parent_created_at: Option<DateTime<Utc>>,
    parent_message: Option<String>,
    parent_alias: Option<String>,
    parent_parent_id: Option<i64>,
    parent_article_slug: Option<String>,
    parent_moderation_status: Option<i16>,
    parent_hide_publicity: Option<bool>,
    parent_moderation_reason: Option<String>,
    parent_last_moderated_at: Option<DateTime<Utc>>,
}

impl AdminCommentRow {
    fn split(self) -> (CommentRow, Option<CommentRow>) {
        let parent = match (
            self.parent_row_id,
            self.parent_created_at,
            self.parent_message,
            self.parent_alias,
            self.parent_article_slug,
            self.parent_moderation_status,
            self.parent_hide_publicity,
        ) {
            (
                Some(id),
                Some(created_at),
                Some(message),
                Some(alias),
                Some(article_slug),
                Some(moderation_status),
                Some(hide_publicity),
            ) => Some(CommentRow {
                id,
                created_at,
                message,
                alias,
                parent_id: self.parent_parent_id,
                article_slug,
                moderation_status,
                hide_publicity,
                moderation_reason: self.parent_moderation_reason,
                last_moderated_at: self.parent_last_moderated_at,
            }),
            _ => None,
        };
        (self.comment, parent)
    }
}

#[derive(Debug, FromRow)]
struct CountsRow {
    total: i64,
    unverified: i64,
    ok: i64,
    warning: i64,
    dangerous: i64,
}

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_admin_filters(qb: &mut QueryBuilder<'_, Postgres>, prefix: &str, query: &AdminCommentQuery) {
        qb.push(format!(
            " WHERE {p}deleted_at IS NULL AND {p}hide_publicity = FALSE",
            p = prefix
        ));
        if let Some(status) = query.status {
            qb.push(format!(" AND {}moderation_status = ", prefix))
                .push_bind(status.code());
        }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn get_comments_by_slug(&self, slug: &str) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {} FROM replies
             WHERE article_slug = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC",
            COMMENT_COLUMNS
        ))
        .bind(slug)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        into_comments(rows)
    }

    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {} FROM replies WHERE id = $1 AND deleted_at IS NULL",
            COMMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra)?;

        row.map(Comment::try_from).transpose()
    }

    async fn create_comment_with_moderation(
        &self,
        input: NewComment,
        status: ModerationStatus,
    ) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO replies (
                message, alias, parent_id, article_slug, moderation_status, hide_publicity,
                last_moderated_at, created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, FALSE,
                CASE WHEN $6 THEN NOW() ELSE NULL END, NOW(), NOW()
            )
            RETURNING id",
        )
        .bind(&input.message)
        .bind(&input.alias)
        .bind(input.parent_id)
        .bind(&input.article_slug)
        .bind(status.code())
        .bind(status.is_verdict())
        .fetch_one(&self.pool)
        .await
        .map_err(infra)
    }

    async fn get_unmoderated_comments(
        &self,
        limit: i64,
    ) -> Result<Vec<ModerationInput>, DomainError> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, message FROM replies
             WHERE last_moderated_at IS NULL
               AND deleted_at IS NULL
               AND moderation_status = $1
             ORDER BY created_at ASC, id ASC
             LIMIT $2",
        )
        .bind(ModerationStatus::Unverified.code())
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        Ok(rows
            .into_iter()
            .map(|(id, message)| ModerationInput { id, message })
            .collect())
    }

    async fn update_moderation_status(
        &self,
        results: &[ModerationResult],
    ) -> Result<(), DomainError> {
        if results.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(infra)?;
        for result in results {
            sqlx::query(
                "UPDATE replies
                 SET moderation_status = $1,
                     moderation_reason = $2,
                     last_moderated_at = NOW(),
                     updated_at = NOW()
                 WHERE id = $3",
            )
            .bind(result.moderation_status.code())
            .bind(&result.moderation_reason)
            .bind(result.id)
            .execute(&mut *tx)
            .await
            .map_err(infra)?;
        }
        tx.commit().await.map_err(infra)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        Ok(())
    }
}

#[async_trait]
impl AdminCommentRepository for SqlxCommentRepository {
    async fn get_comments_for_admin(
        &self,
        query: AdminCommentQuery,
    ) -> Result<AdminCommentPage, DomainError> {
        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*)::bigint FROM replies");
        Self::push_admin_filters(&mut count_qb, "", &query);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(infra)?;

        let mut items_qb = QueryBuilder::<Postgres>::new(
            "SELECT r.id, r.created_at, r.message, r.alias, r.parent_id, r.article_slug,
                    r.moderation_status, r.hide_publicity, r.moderation_reason, r.last_moderated_at,
                    p.id AS parent_row_id, p.created_at AS parent_created_at,
                    p.message AS parent_message, p.alias AS parent_alias,
                    p.parent_id AS parent_parent_id, p.article_slug AS parent_article_slug,
                    p.moderation_status AS parent_moderation_status,
                    p.hide_publicity AS parent_hide_publicity,
                    p.moderation_reason AS parent_moderation_reason,
                    p.last_moderated_at AS parent_last_moderated_at
             FROM replies r
             LEFT JOIN replies p ON p.id = r.parent_id AND p.deleted_at IS NULL",
        );
        Self::push_admin_filters(&mut items_qb, "r.", &query);
        items_qb
            .push(" ORDER BY r.created_at DESC, r.id DESC LIMIT ")
            .push_bind(query.page.limit)
            .push(" OFFSET ")
            .push_bind(query.page.offset());

        let rows: Vec<AdminCommentRow> = items_qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.comment.id).collect();
        let mut children_by_parent: HashMap<i64, Vec<Comment>> = HashMap::new();
        if !ids.is_empty() {
            let child_rows = sqlx::query_as::<_, CommentRow>(&format!(
                "SELECT {} FROM replies
                 WHERE parent_id = ANY($1) AND deleted_at IS NULL
                 ORDER BY created_at ASC, id ASC",
                COMMENT_COLUMNS
            ))
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;

            for child in into_comments(child_rows)? {
                if let Some(parent_id) = child.parent_id {
                    children_by_parent.entry(parent_id).or_default().push(child);
                }
            }
        }

        let mut comments = Vec::with_capacity(rows.len());
        for row in rows {
            let (comment, parent) = row.split();
            let comment = Comment::try_from(comment)?;
            let parent = parent.map(Comment::try_from).transpose()?;
            let children = children_by_parent.remove(&comment.id).unwrap_or_default();
            comments.push(AdminComment {
                comment,
                parent,
                children,
            });
        }

        Ok(AdminCommentPage { comments, total })
    }

    async fn get_comment_counts(&self) -> Result<CommentCounts, DomainError> {
        let row = sqlx::query_as::<_, CountsRow>(
            "SELECT COUNT(*)::bigint AS total,
                    COUNT(*) FILTER (WHERE moderation_status = 0)::bigint AS unverified,
                    COUNT(*) FILTER (WHERE moderation_status = 1)::bigint AS ok,
                    COUNT(*) FILTER (WHERE moderation_status = 2)::bigint AS warning,
                    COUNT(*) FILTER (WHERE moderation_status = 3)::bigint AS dangerous
             FROM replies
             WHERE deleted_at IS NULL AND hide_publicity = FALSE",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(infra)?;

        Ok(CommentCounts {
            all: row.total,
            unverified: row.unverified,
            ok: row.ok,
            warning: row.warning,
            dangerous: row.dangerous,
        })
    }

    async fn mark_comment_safe(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE replies
             SET moderation_status = $2, last_moderated_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(ModerationStatus::Ok.code())
        .execute(&self.pool)
        .await
        .map_err(infra)?;

        Ok(result.rows_affected() > 0)
    }

    async fn hide_comment(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE replies
             SET hide_publicity = TRUE, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(infra)?;

        Ok(result.rows_affected() > 0)
    }
}
