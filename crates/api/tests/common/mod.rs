#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use skillkart_api::auth::jwt::{generate_access_token, JwtConfig};
use skillkart_api::auth::password::hash_password;
use skillkart_api::config::{ServerConfig, XpSettings};
use skillkart_api::router::build_app_router;
use skillkart_api::state::AppState;
use skillkart_core::roles::{ROLE_ADMIN, ROLE_LEARNER};
use skillkart_db::models::roadmap::{CreateRoadmap, CreateStep, RoadmapDetail};
use skillkart_db::models::user::{CreateUser, User};
use skillkart_db::repositories::{RoadmapRepo, UserRepo};

pub const ADMIN_ROLE_ID: i64 = 1;
pub const LEARNER_ROLE_ID: i64 = 2;

/// Password given to every user made by [`create_user`].
pub const TEST_PASSWORD: &str = "learn-all-the-things";

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// A `ServerConfig` with a fixed JWT secret and default XP settings.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "skillkart-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        xp: XpSettings::default(),
    }
}

/// The production router over `pool`, with default XP settings.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_xp(pool, XpSettings::default())
}

pub fn build_test_app_with_xp(pool: PgPool, xp: XpSettings) -> Router {
    let config = ServerConfig {
        xp,
        ..test_config()
    };
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_user(pool: &PgPool, username: &str, role_id: i64) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@skillkart.test"),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            role_id,
        },
    )
    .await
    .unwrap()
}

/// Sign an access token with the test secret.
pub fn token_for(user_id: i64, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).unwrap()
}

/// A learner account plus a bearer token for it.
pub async fn create_learner(pool: &PgPool, username: &str) -> (User, String) {
    let user = create_user(pool, username, LEARNER_ROLE_ID).await;
    let token = token_for(user.id, ROLE_LEARNER);
    (user, token)
}

/// An admin account plus a bearer token for it.
pub async fn create_admin(pool: &PgPool, username: &str) -> (User, String) {
    let user = create_user(pool, username, ADMIN_ROLE_ID).await;
    let token = token_for(user.id, ROLE_ADMIN);
    (user, token)
}

pub async fn create_roadmap(pool: &PgPool, title: &str, steps: &[&str]) -> RoadmapDetail {
    let input = CreateRoadmap {
        title: title.to_string(),
        description: Some(format!("{title} from scratch")),
        steps: steps
            .iter()
            .map(|t| CreateStep {
                title: t.to_string(),
                description: None,
            })
            .collect(),
    };
    RoadmapRepo::create_with_steps(pool, None, &input)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// POST without a body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Collect and parse a JSON response body.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
