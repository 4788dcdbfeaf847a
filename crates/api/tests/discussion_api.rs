//! HTTP tests for step discussion threads and comments.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn thread_with_comments_round_trip(pool: PgPool) {
    let (author, token) = common::create_learner(&pool, "asker").await;
    let (_helper, helper_token) = common::create_learner(&pool, "helper").await;
    let roadmap = common::create_roadmap(&pool, "Async", &["Futures"]).await;
    let step_id = roadmap.steps[0].id;
    let app = common::build_test_app(pool);

    let created = post_json_auth(
        app.clone(),
        &format!("/api/v1/steps/{step_id}/threads"),
        json!({ "title": "  Pin confusion  ", "body": "Why does poll take Pin<&mut Self>?" }),
        &token,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let thread = body_json(created).await;
    assert_eq!(thread["data"]["title"], "Pin confusion");
    assert_eq!(thread["data"]["author_id"], author.id);
    assert_eq!(thread["data"]["author_username"], "asker");
    let thread_id = thread["data"]["id"].as_i64().unwrap();

    for body in ["Self-referential futures.", "See the pin module docs."] {
        let reply = post_json_auth(
            app.clone(),
            &format!("/api/v1/threads/{thread_id}/comments"),
            json!({ "body": body }),
            &helper_token,
        )
        .await;
        assert_eq!(reply.status(), StatusCode::CREATED);
    }

    let detail = body_json(get(app.clone(), &format!("/api/v1/threads/{thread_id}")).await).await;
    let bodies: Vec<&str> = detail["data"]["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["body"].as_str().unwrap())
        .collect();
    assert_eq!(bodies, vec!["Self-referential futures.", "See the pin module docs."]);
    assert_eq!(detail["data"]["comments"][0]["author_username"], "helper");

    let listed = body_json(get(app, &format!("/api/v1/steps/{step_id}/threads")).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn thread_on_unknown_step_is_404(pool: PgPool) {
    let (_user, token) = common::create_learner(&pool, "nowhere").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/steps/987654/threads",
        json!({ "title": "Hello", "body": "Anyone?" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_fields_rejected(pool: PgPool) {
    let (_user, token) = common::create_learner(&pool, "blank").await;
    let roadmap = common::create_roadmap(&pool, "Blank", &["Only"]).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/steps/{}/threads", roadmap.steps[0].id);

    let no_title = post_json_auth(app.clone(), &uri, json!({ "title": "   ", "body": "x" }), &token).await;
    assert_eq!(no_title.status(), StatusCode::BAD_REQUEST);

    let no_body = post_json_auth(app, &uri, json!({ "title": "Title", "body": "" }), &token).await;
    assert_eq!(no_body.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn posting_requires_auth(pool: PgPool) {
    let roadmap = common::create_roadmap(&pool, "Open", &["Read"]).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        &format!("/api/v1/steps/{}/threads", roadmap.steps[0].id),
        json!({ "title": "Hi", "body": "there" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn comment_on_missing_thread_is_404(pool: PgPool) {
    let (_user, token) = common::create_learner(&pool, "replier").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/threads/55555/comments",
        json!({ "body": "hello?" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
