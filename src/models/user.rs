use sqlx::FromRow;

/// Authentication user. The password hash is never selected into this type.
#[derive(Clone, Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A gamer joined with its backing user, as resolved from an auth token.
#[derive(Clone, Debug, FromRow)]
pub struct GamerRow {
    pub id: i32,
    pub user_id: i32,
    pub bio: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl GamerRow {
    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
