use crate::error::AppError;
use crate::models::GamerRow;
use sqlx::PgPool;

pub struct AuthService;

impl AuthService {
    /// Resolve a token key to the gamer that owns it.
    pub async fn gamer_for_token(pool: &PgPool, key: &str) -> Result<Option<GamerRow>, AppError> {
        let sql = r#"
            SELECT gm.id, gm.user_id, gm.bio, u.username, u.first_name, u.last_name
            FROM auth_token t
            JOIN auth_user u ON u.id = t.user_id
            JOIN gamer gm ON gm.user_id = u.id
            WHERE t.key = $1
        "#;
        // The key itself is a credential and stays out of the log.
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, GamerRow>(sql)
            .bind(key)
            .fetch_optional(pool)
            .await?)
    }
}
