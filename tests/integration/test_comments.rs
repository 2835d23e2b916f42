use super::helpers::{admin_token, expect_status, form_request, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use blog_comments::domain::comment::entity::ModerationStatus;
use serde_json::Value;

#[tokio::test]
async fn plain_submission_is_created_unverified_with_new_alias_cookie() {
    let app = spawn_app();

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            "articleSlug=hello-world&replyBody=Great+post%21&parentId=0",
        ),
    )
    .await;
    let res = expect_status(res, StatusCode::CREATED).await;

    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("alias cookie should be issued")
        .to_string();
    assert!(cookie.starts_with("comment_alias="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=34560000"));

    let body: Value = read_json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["comment"]["message"], "Great post!");
    assert_eq!(body["comment"]["articleSlug"], "hello-world");
    assert_eq!(body["comment"]["parentId"], Value::Null);
    assert_eq!(body["comment"]["moderationStatus"], 0);
    assert_eq!(body["comment"]["hidePublicity"], false);

    let stored = app.store.all();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].moderation_status, ModerationStatus::Unverified);
}

#[tokio::test]
async fn returning_visitor_keeps_alias_and_gets_no_new_cookie() {
    let app = spawn_app();

    let mut req = form_request(
        "/api/comments/create",
        "articleSlug=hello-world&replyBody=Back+again",
    );
    req.headers_mut().insert(
        header::COOKIE,
        "comment_alias=Quiet%20Harbor".parse().unwrap(),
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::CREATED).await;
    assert!(res.headers().get(header::SET_COOKIE).is_none());

    let body: Value = read_json(res).await;
    assert_eq!(body["comment"]["alias"], "Quiet Harbor");
}

#[tokio::test]
async fn profane_submission_is_rejected_without_a_row() {
    let app = spawn_app();

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            "articleSlug=hello-world&replyBody=what+a+shit+article",
        ),
    )
    .await;
    let res = expect_status(res, StatusCode::BAD_REQUEST).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Comment contains inappropriate language");
    assert!(app.store.all().is_empty());
}

#[tokio::test]
async fn technical_vocabulary_is_accepted() {
    let app = spawn_app();

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            "articleSlug=git-tips&replyBody=Kill+the+process+then+fork+from+master",
        ),
    )
    .await;
    expect_status(res, StatusCode::CREATED).await;
}

#[tokio::test]
async fn empty_body_and_bad_parent_are_bad_requests() {
    let app = spawn_app();

    let res = send(
        &app.app,
        form_request("/api/comments/create", "articleSlug=hello-world&replyBody=+++"),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["error"], "Comment body cannot be empty");

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            "articleSlug=hello-world&replyBody=hi&parentId=abc",
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            "articleSlug=hello-world&replyBody=hi&parentId=99",
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["error"], "Parent comment not found");
    assert!(app.store.all().is_empty());
}

#[tokio::test]
async fn reply_to_deleted_parent_is_rejected() {
    let app = spawn_app();
    let parent = app
        .store
        .seed("hello-world", "original", None, ModerationStatus::Ok, 10);
    app.store.soft_delete(parent);

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            &format!("articleSlug=hello-world&replyBody=reply&parentId={}", parent),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn admin_submission_is_stored_as_ok() {
    let app = spawn_app();

    let mut req = form_request(
        "/api/comments/create",
        "articleSlug=hello-world&replyBody=Thanks+everyone",
    );
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", admin_token()).parse().unwrap(),
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::CREATED).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["comment"]["moderationStatus"], 1);

    let stored = app.store.all();
    assert!(stored[0].last_moderated_at.is_some());
}

#[tokio::test]
async fn public_thread_nests_replies_and_redacts_hidden_comments() {
    let app = spawn_app();
    let store = &app.store;
    let root = store.seed("hello-world", "first!", None, ModerationStatus::Ok, 30);
    let reply = store.seed("hello-world", "agreed", Some(root), ModerationStatus::Ok, 20);
    let nasty = store.seed("hello-world", "a threat", Some(root), ModerationStatus::Dangerous, 10);
    let orphan = store.seed("hello-world", "lost reply", Some(777), ModerationStatus::Ok, 5);
    store.seed("other-post", "elsewhere", None, ModerationStatus::Ok, 1);

    let req = Request::builder()
        .uri("/api/comments/hello-world")
        .body(Body::empty())
        .unwrap();
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let body: Vec<Value> = read_json(res).await;

    let ids: Vec<i64> = body.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![root, orphan]);

    let children = body[0]["children"].as_array().unwrap();
    assert_eq!(children[0]["id"], reply);
    assert_eq!(children[0]["message"], "agreed");
    assert_eq!(children[0]["depth"], 1);
    assert_eq!(children[1]["id"], nasty);
    assert_eq!(children[1]["message"], Value::Null);
    assert_eq!(children[1]["notice"], "Comment hidden by Auto Moderation");
    assert_eq!(children[1]["canReply"], false);
}

#[tokio::test]
async fn health_reports_database_up() {
    let app = spawn_app();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    assert!(res.headers().get("x-request-id").is_some());
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn replies_are_capped_at_the_maximum_depth() {
    let app = spawn_app();
    let mut parent = app
        .store
        .seed("deep-post", "level 0", None, ModerationStatus::Ok, 60);
    for level in 1..=3 {
        parent = app.store.seed(
            "deep-post",
            &format!("level {}", level),
            Some(parent),
            ModerationStatus::Ok,
            60 - level,
        );
    }

    let res = send(
        &app.app,
        form_request(
            "/api/comments/create",
            &format!("articleSlug=deep-post&replyBody=level+4&parentId={}", parent),
        ),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert_eq!(body["error"], "Maximum reply depth reached");
    assert_eq!(app.store.all().len(), 4);
}
