//! Read-only gametype handlers. Game types are reference data; there is no write path.

use crate::error::AppError;
use crate::extractors::Caller;
use crate::handlers::parse_id;
use crate::response::{ok, ok_many};
use crate::serializers::GametypeView;
use crate::service::GametypeService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list(_caller: Caller, State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = GametypeService::list(&state.pool).await?;
    Ok(ok_many(rows.into_iter().map(GametypeView::from).collect()))
}

pub async fn retrieve(
    _caller: Caller,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let gametype = GametypeService::require(&state.pool, id).await?;
    Ok(ok(GametypeView::from(gametype)))
}
