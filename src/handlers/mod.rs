//! HTTP handlers per resource.

pub mod game;
pub mod gametype;
pub mod profile;

/// Parse an integer primary key from a path segment.
pub(crate) fn parse_id(id_str: &str) -> Result<i32, crate::error::AppError> {
    id_str
        .parse::<i32>()
        .map_err(|_| crate::error::AppError::BadRequest(format!("invalid id: {}", id_str)))
}
