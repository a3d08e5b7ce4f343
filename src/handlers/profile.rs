//! `GET /profile`: the caller's gamer record plus the events they signed up for.

use crate::error::AppError;
use crate::extractors::Caller;
use crate::response::ok;
use crate::serializers::ProfileView;
use crate::service::ProfileService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn profile(Caller(gamer): Caller, State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = ProfileService::signed_up_events(&state.pool, gamer.id).await?;
    Ok(ok(ProfileView::new(&gamer, events)))
}
