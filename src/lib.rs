//! LevelUp API: game-night meetup backend. Games, game types and gamer profiles over PostgreSQL.

pub mod case;
pub mod error;
pub mod extractors;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod serializers;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError, FieldErrors};
pub use routes::{app, common_routes_with_ready, resource_routes};
pub use settings::Settings;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema};
