//! Resource routes: games, game types, profile. All require a token.

use crate::handlers::{game, gametype, profile};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/games", get(game::list).post(game::create))
        .route(
            "/games/:id",
            get(game::retrieve).put(game::update).delete(game::destroy),
        )
        .route("/gameTypes", get(gametype::list))
        .route("/gameTypes/:id", get(gametype::retrieve))
        .route("/profile", get(profile::profile))
        .with_state(state)
}
