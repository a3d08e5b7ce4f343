use crate::error::AppError;
use crate::models::ProfileEventRow;
use sqlx::PgPool;

pub struct ProfileService;

impl ProfileService {
    /// Events `gamer_id` has signed up for, earliest first.
    pub async fn signed_up_events(pool: &PgPool, gamer_id: i32) -> Result<Vec<ProfileEventRow>, AppError> {
        let sql = r#"
            SELECT e.id, e.name, e.time, g.name AS game_name
            FROM event e
            JOIN event_attendee a ON a.event_id = e.id
            JOIN game g ON g.id = e.game_id
            WHERE a.gamer_id = $1
            ORDER BY e.time, e.id
        "#;
        tracing::debug!(sql = %sql, gamer_id, "query");
        Ok(sqlx::query_as::<_, ProfileEventRow>(sql)
            .bind(gamer_id)
            .fetch_all(pool)
            .await?)
    }
}
