use serde::Deserialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Deserialize)]
pub struct Gametype {
    pub id: i32,
    pub label: String,
}
