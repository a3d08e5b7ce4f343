//! Game handlers: create, retrieve, update, destroy, list.

use crate::error::AppError;
use crate::extractors::Caller;
use crate::handlers::parse_id;
use crate::models::GamePayload;
use crate::response::{created, no_content, ok, ok_many};
use crate::serializers::GameView;
use crate::service::GameService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Gametype id to filter by, e.g. `/games?type=1`.
    #[serde(rename = "type")]
    pub gametype: Option<String>,
}

impl ListQuery {
    fn gametype_id(&self) -> Result<Option<i32>, AppError> {
        match self.gametype.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s
                .parse::<i32>()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("invalid type filter: {}", s))),
        }
    }
}

pub async fn list(
    _caller: Caller,
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let rows = GameService::list(&state.pool, query.gametype_id()?).await?;
    Ok(ok_many(rows.into_iter().map(GameView::from).collect()))
}

pub async fn create(
    Caller(gamer): Caller,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let payload = GamePayload::from_body(body)?;
    let row = GameService::create(&state.pool, gamer.id, &payload).await?;
    Ok(created(GameView::from(row)))
}

pub async fn retrieve(
    _caller: Caller,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = GameService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("game {}", id)))?;
    Ok(ok(GameView::from(row)))
}

pub async fn update(
    Caller(gamer): Caller,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = body?;
    let payload = GamePayload::from_body(body)?;
    GameService::update(&state.pool, id, gamer.id, &payload).await?;
    Ok(no_content())
}

pub async fn destroy(
    _caller: Caller,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    GameService::delete(&state.pool, id).await?;
    Ok(no_content())
}
