//! HTTP tests for the badge catalog and per-user badge state.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth};
use skillkart_api::engine::badges::seed_default_badges;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_lists_seeded_badges_oldest_first(pool: PgPool) {
    seed_default_badges(&pool).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/badges").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Getting Started", "Roadmap Finisher", "Streak Master"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_is_empty_before_seeding(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/badges").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_learner_has_nothing_earned(pool: PgPool) {
    seed_default_badges(&pool).await.unwrap();
    let (_user, token) = common::create_learner(&pool, "fresh").await;
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(app, "/api/v1/me/badges", &token).await).await;
    let list = json["data"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|b| b["earned"] == false && b["earned_at"].is_null()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn my_badges_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/me/badges").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
