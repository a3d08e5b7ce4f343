//! Row types for the relational schema. Column names match the tables created in `store`.

mod event;
mod game;
mod gametype;
mod user;

pub use event::{ProfileEventRow, Status};
pub use game::{Game, GamePayload, GameRow};
pub use gametype::Gametype;
pub use user::{GamerRow, User};
