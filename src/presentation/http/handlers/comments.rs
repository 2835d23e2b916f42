use axum::{
    Form, Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    application::comments::dto::{CreatedComment, SubmitCommentRequest},
    domain::comment::thread::PublicComment,
    infrastructure::identity::alias::get_or_create_alias,
    presentation::http::{errors::AppError, middleware::admin::admin_claims, state::AppState},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentForm {
    #[serde(default)]
    pub article_slug: String,
    #[serde(default)]
    pub reply_body: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub success: bool,
    pub comment: CreatedComment,
}

/// `"0"` and blank mean a root comment.
fn parse_parent_id(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    let raw = match raw.map(str::trim) {
        None | Some("") | Some("0") => return Ok(None),
        Some(raw) => raw,
    };
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::BadRequest("Invalid parent comment ID".to_string()))
}

pub async fn create_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<CreateCommentForm>,
) -> Result<impl IntoResponse, AppError> {
    let parent_id = parse_parent_id(form.parent_id.as_deref())?;
    let trusted = admin_claims(&headers, &state.config).is_some();

    let (jar, alias) = get_or_create_alias(jar, state.config.is_production());

    let comment = state
        .comments()
        .submit(SubmitCommentRequest {
            article_slug: form.article_slug,
            message: form.reply_body,
            parent_id,
            alias,
            trusted,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        jar,
        Json(CreateCommentResponse {
            success: true,
            comment,
        }),
    ))
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<PublicComment>>, AppError> {
    let thread = state.comments().get_thread(&slug).await?;
    Ok(Json(thread.public_view()))
}
