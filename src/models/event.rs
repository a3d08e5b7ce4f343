use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Deserialize)]
pub struct Status {
    pub id: i32,
    pub label: String,
}

/// An event the caller signed up for, with the game's name joined in.
#[derive(Clone, Debug, FromRow)]
pub struct ProfileEventRow {
    pub id: i32,
    pub name: String,
    pub time: DateTime<Utc>,
    pub game_name: String,
}
