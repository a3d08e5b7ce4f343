//! Route tables. `app` assembles everything the server mounts.

mod common;
mod resources;

pub use common::common_routes_with_ready;
pub use resources::resource_routes;

use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: operational routes plus the authenticated resource routes,
/// with request tracing and a body size limit. Oversized bodies surface as a `Json`
/// rejection, so they get the error envelope.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(resource_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        gamer_id = tracing::field::Empty,
                    )
                }))
                .layer(DefaultBodyLimit::max(body_limit_bytes)),
        )
}
