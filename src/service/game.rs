//! Game CRUD and the event-count annotated listing.

use crate::error::AppError;
use crate::models::{Game, GamePayload, GameRow};
use crate::service::GametypeService;
use sqlx::{PgExecutor, PgPool};

/// Game joined with gametype and creator, annotated with its event count.
const SELECT_GAME_ROW: &str = r#"
    SELECT g.id, g.name, g.player_limit,
           (SELECT COUNT(*) FROM event e WHERE e.game_id = g.id) AS event_count,
           gt.id AS gametype_id, gt.label AS gametype_label,
           gm.id AS creator_id, gm.bio AS creator_bio,
           u.username AS creator_username,
           u.first_name AS creator_first_name,
           u.last_name AS creator_last_name
    FROM game g
    JOIN gametype gt ON gt.id = g.gametype_id
    JOIN gamer gm ON gm.id = g.created_by_id
    JOIN auth_user u ON u.id = gm.user_id
"#;

pub struct GameService;

impl GameService {
    /// All games ordered by id, optionally only those of one gametype.
    pub async fn list(pool: &PgPool, gametype_id: Option<i32>) -> Result<Vec<GameRow>, AppError> {
        let sql = format!(
            "{} WHERE ($1::int IS NULL OR g.gametype_id = $1) ORDER BY g.id",
            SELECT_GAME_ROW
        );
        tracing::debug!(sql = %sql, gametype_id = ?gametype_id, "query");
        let rows = sqlx::query_as::<_, GameRow>(&sql)
            .bind(gametype_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<GameRow>, AppError> {
        Self::fetch_row(pool, id).await
    }

    /// Insert a game owned by `creator_id` and return it fully shaped.
    pub async fn create(pool: &PgPool, creator_id: i32, payload: &GamePayload) -> Result<GameRow, AppError> {
        let mut tx = pool.begin().await?;
        GametypeService::require(&mut *tx, payload.gametype_id).await?;
        let sql = "INSERT INTO game (name, player_limit, created_by_id, gametype_id) \
                   VALUES ($1, $2, $3, $4) \
                   RETURNING id, name, player_limit, created_by_id, gametype_id";
        tracing::debug!(sql = %sql, payload = ?payload, creator_id, "query (tx)");
        let game = sqlx::query_as::<_, Game>(sql)
            .bind(&payload.name)
            .bind(payload.player_limit)
            .bind(creator_id)
            .bind(payload.gametype_id)
            .fetch_one(&mut *tx)
            .await?;
        let row = Self::fetch_row(&mut *tx, game.id)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
        tx.commit().await?;
        tracing::info!(game_id = game.id, creator_id, "game created");
        Ok(row)
    }

    /// Overwrite every field of game `id`; the caller becomes its creator.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        caller_id: i32,
        payload: &GamePayload,
    ) -> Result<Game, AppError> {
        GametypeService::require(pool, payload.gametype_id).await?;
        let sql = "UPDATE game SET name = $1, player_limit = $2, created_by_id = $3, gametype_id = $4 \
                   WHERE id = $5 \
                   RETURNING id, name, player_limit, created_by_id, gametype_id";
        tracing::debug!(sql = %sql, id, payload = ?payload, "query");
        let game = sqlx::query_as::<_, Game>(sql)
            .bind(&payload.name)
            .bind(payload.player_limit)
            .bind(caller_id)
            .bind(payload.gametype_id)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("game {}", id)))?;
        tracing::info!(game_id = id, caller_id, "game updated");
        Ok(game)
    }

    /// Delete game `id`; its events go with it.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        let sql = "DELETE FROM game WHERE id = $1 RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_scalar::<_, i32>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("game {}", id)))?;
        tracing::info!(game_id = id, "game deleted");
        Ok(())
    }

    async fn fetch_row<'e, E>(executor: E, id: i32) -> Result<Option<GameRow>, AppError>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!("{} WHERE g.id = $1", SELECT_GAME_ROW);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, GameRow>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row)
    }
}
