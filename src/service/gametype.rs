use crate::error::AppError;
use crate::models::Gametype;
use sqlx::{PgExecutor, PgPool};

pub struct GametypeService;

impl GametypeService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Gametype>, AppError> {
        let sql = "SELECT id, label FROM gametype ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Gametype>(sql).fetch_all(pool).await?)
    }

    pub async fn read<'e, E>(executor: E, id: i32) -> Result<Option<Gametype>, AppError>
    where
        E: PgExecutor<'e>,
    {
        let sql = "SELECT id, label FROM gametype WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Gametype>(sql)
            .bind(id)
            .fetch_optional(executor)
            .await?)
    }

    /// Like `read`, but a missing gametype is a `NotFound`.
    pub async fn require<'e, E>(executor: E, id: i32) -> Result<Gametype, AppError>
    where
        E: PgExecutor<'e>,
    {
        Self::read(executor, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("gametype {}", id)))
    }
}
