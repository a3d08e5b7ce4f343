mod common;

use axum::http::{Method, StatusCode};
use common::*;

#[tokio::test]
#[ignore = "needs Postgres at DATABASE_URL"]
async fn list_and_retrieve_gametypes() {
    let pool = test_pool().await;
    let app = router(&pool);
    let gamer = seed_gamer(&pool, "Ada", "L", "").await;
    let label = unique("Deck builder");
    let id = seed_gametype(&pool, &label).await;

    let (status, body) = send(&app, Method::GET, "/gameTypes", Some(&gamer.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|g| g["id"] == id && g["label"] == label.as_str()));

    let (status, body) = send(&app, Method::GET, &format!("/gameTypes/{}", id), Some(&gamer.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"id": id, "label": label}));
}

#[tokio::test]
#[ignore = "needs Postgres at DATABASE_URL"]
async fn missing_gametype_is_404() {
    let pool = test_pool().await;
    let app = router(&pool);
    let gamer = seed_gamer(&pool, "Ada", "L", "").await;

    let (status, body) = send(&app, Method::GET, &format!("/gameTypes/{}", i32::MAX), Some(&gamer.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
#[ignore = "needs Postgres at DATABASE_URL"]
async fn gametypes_are_read_only() {
    let pool = test_pool().await;
    let app = router(&pool);
    let gamer = seed_gamer(&pool, "Ada", "L", "").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/gameTypes",
        Some(&gamer.token),
        Some(serde_json::json!({"label": "New"})),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
