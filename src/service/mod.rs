//! Services: typed queries against PostgreSQL, one per resource.

mod auth;
mod game;
mod gametype;
mod profile;
mod validation;
pub use auth::AuthService;
pub use game::GameService;
pub use gametype::GametypeService;
pub use profile::ProfileService;
pub use validation::{FieldKind, RequestValidator, ValidationRule};
