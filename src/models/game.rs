use crate::case::object_keys_to_snake_case;
use crate::error::AppError;
use crate::service::{FieldKind, RequestValidator, ValidationRule};
use serde::Deserialize;
use serde_json::Value;
use sqlx::FromRow;

pub const NAME_MAX_LENGTH: u32 = 55;

#[derive(Clone, Debug, FromRow)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub player_limit: i32,
    pub created_by_id: i32,
    pub gametype_id: i32,
}

/// A game joined with its creator, gametype and the number of events scheduled for it.
#[derive(Clone, Debug, FromRow)]
pub struct GameRow {
    pub id: i32,
    pub name: String,
    pub player_limit: i32,
    pub event_count: i64,
    pub gametype_id: i32,
    pub gametype_label: String,
    pub creator_id: i32,
    pub creator_bio: String,
    pub creator_username: String,
    pub creator_first_name: String,
    pub creator_last_name: String,
}

/// Body of `POST /games` and `PUT /games/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GamePayload {
    pub name: String,
    pub player_limit: i32,
    pub gametype_id: i32,
}

impl GamePayload {
    fn rules() -> [(&'static str, ValidationRule); 3] {
        [
            (
                "name",
                ValidationRule {
                    required: true,
                    kind: FieldKind::String,
                    min_length: Some(1),
                    max_length: Some(NAME_MAX_LENGTH),
                    ..Default::default()
                },
            ),
            (
                "player_limit",
                ValidationRule {
                    required: true,
                    kind: FieldKind::Integer,
                    minimum: Some(1),
                    maximum: Some(i32::MAX as i64),
                    ..Default::default()
                },
            ),
            (
                "gametype_id",
                ValidationRule {
                    required: true,
                    kind: FieldKind::Integer,
                    minimum: Some(i32::MIN as i64),
                    maximum: Some(i32::MAX as i64),
                    ..Default::default()
                },
            ),
        ]
    }

    /// Validate a raw JSON body (snake_case or camelCase keys) and build the payload.
    /// Every failing field is reported at once. The name is stored as sent.
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        let mut map = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        object_keys_to_snake_case(&mut map);
        RequestValidator::validate(&map, &Self::rules())?;
        serde_json::from_value(Value::Object(map)).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
