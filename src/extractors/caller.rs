//! Resolve the authenticated caller from the `Authorization` header.

use crate::error::AppError;
use crate::models::GamerRow;
use crate::service::AuthService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

/// Accepted schemes: `Token <key>` and `Bearer <key>`.
const SCHEMES: &[&str] = &["Token", "Bearer"];

/// The gamer behind the request's auth token.
#[derive(Clone, Debug)]
pub struct Caller(pub GamerRow);

/// Pull the token key out of an `Authorization` header value.
pub fn token_from_header(value: &str) -> Result<&str, AppError> {
    let (scheme, key) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::Unauthorized("malformed Authorization header".into()))?;
    if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
        return Err(AppError::Unauthorized(format!("unsupported auth scheme: {}", scheme)));
    }
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::Unauthorized("malformed Authorization header".into()));
    }
    Ok(key)
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("authentication credentials were not provided".into()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("malformed Authorization header".into()))?;
        let key = token_from_header(header)?;
        let state = AppState::from_ref(state);
        let gamer = AuthService::gamer_for_token(&state.pool, key)
            .await?
            .ok_or_else(|| AppError::Unauthorized("invalid token".into()))?;
        tracing::Span::current().record("gamer_id", gamer.id);
        Ok(Caller(gamer))
    }
}
