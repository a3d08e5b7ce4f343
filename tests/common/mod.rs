//! Shared helpers for integration tests. Database-backed tests are `#[ignore]`d and
//! need `DATABASE_URL` (a `.env` file works). Run them with
//! `cargo test -- --include-ignored`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use levelup_api::{app, ensure_schema, AppState};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

/// Connect and bootstrap the schema.
pub async fn test_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");
    ensure_schema(&pool).await.expect("ensure schema");
    pool
}

pub fn router(pool: &PgPool) -> Router {
    app(AppState::new(pool.clone()), BODY_LIMIT)
}

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// A seeded user + gamer with an auth token.
#[derive(Clone, Debug)]
pub struct Seeded {
    pub user_id: i32,
    pub gamer_id: i32,
    pub username: String,
    pub token: String,
}

pub async fn seed_gamer(pool: &PgPool, first: &str, last: &str, bio: &str) -> Seeded {
    let username = unique("gamer");
    let user_id: i32 = sqlx::query_scalar(
        "INSERT INTO auth_user (username, password, first_name, last_name, email) \
         VALUES ($1, 'x', $2, $3, $4) RETURNING id",
    )
    .bind(&username)
    .bind(first)
    .bind(last)
    .bind(format!("{}@example.com", username))
    .fetch_one(pool)
    .await
    .expect("insert user");
    let gamer_id: i32 = sqlx::query_scalar("INSERT INTO gamer (user_id, bio) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(bio)
        .fetch_one(pool)
        .await
        .expect("insert gamer");
    let token = uuid::Uuid::new_v4().simple().to_string();
    sqlx::query("INSERT INTO auth_token (key, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("insert token");
    Seeded {
        user_id,
        gamer_id,
        username,
        token,
    }
}

pub async fn seed_gametype(pool: &PgPool, label: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO gametype (label) VALUES ($1) RETURNING id")
        .bind(label)
        .fetch_one(pool)
        .await
        .expect("insert gametype")
}

pub async fn seed_status(pool: &PgPool) -> i32 {
    sqlx::query_scalar("INSERT INTO status (label) VALUES ('Scheduled') RETURNING id")
        .fetch_one(pool)
        .await
        .expect("insert status")
}

pub async fn seed_game(pool: &PgPool, name: &str, player_limit: i32, creator: i32, gametype: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO game (name, player_limit, created_by_id, gametype_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(player_limit)
    .bind(creator)
    .bind(gametype)
    .fetch_one(pool)
    .await
    .expect("insert game")
}

pub async fn seed_event(pool: &PgPool, name: &str, time: DateTime<Utc>, host: i32, game: i32) -> i32 {
    let status = seed_status(pool).await;
    sqlx::query_scalar(
        "INSERT INTO event (name, time, status_id, host_id, game_id) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(name)
    .bind(time)
    .bind(status)
    .bind(host)
    .bind(game)
    .fetch_one(pool)
    .await
    .expect("insert event")
}

pub async fn sign_up(pool: &PgPool, gamer: i32, event: i32) {
    sqlx::query("INSERT INTO event_attendee (gamer_id, event_id) VALUES ($1, $2)")
        .bind(gamer)
        .bind(event)
        .execute(pool)
        .await
        .expect("insert attendee");
}

/// Send one request through the router. Returns status and parsed body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header(header::AUTHORIZATION, format!("Token {}", t));
    }
    let req = match body {
        Some(b) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(b.to_string())),
        None => req.body(Body::empty()),
    }
    .expect("build request");
    let resp = app.clone().oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}
