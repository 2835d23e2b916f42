use axum::{
    Json,
    extract::{Extension, Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;

use crate::{
    application::admin_comments::use_case::AdminCommentListing,
    domain::{comment::entity::ModerationStatus, shared::pagination::PageRequest},
    presentation::http::{errors::AppError, middleware::admin::AdminClaims, state::AppState},
};

pub const ADMIN_COMMENTS_PAGE: &str = "/admin/comments";

#[derive(Debug, Deserialize)]
pub struct CommentsQuery {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl CommentsQuery {
    /// Unknown statuses fall back to no filter.
    fn status(&self) -> Option<ModerationStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

fn parse_comment_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid comment ID".to_string()))
}

pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentsQuery>,
) -> Result<Json<AdminCommentListing>, AppError> {
    let page = PageRequest::new(query.page, query.limit);
    let listing = state.admin_comments().list(query.status(), page).await?;
    Ok(Json(listing))
}

pub async fn approve_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_comment_id(&id)?;
    state.admin_comments().mark_safe(id).await?;
    tracing::info!(id, admin = %claims.sub, "approve action applied");
    Ok(Redirect::to(ADMIN_COMMENTS_PAGE))
}

pub async fn hide_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_comment_id(&id)?;
    state.admin_comments().hide(id).await?;
    tracing::info!(id, admin = %claims.sub, "hide action applied");
    Ok(Redirect::to(ADMIN_COMMENTS_PAGE))
}
