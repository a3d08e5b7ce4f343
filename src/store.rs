//! Database bootstrap: create the database if missing and the levelup tables if missing.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Tables in dependency order. Every foreign key cascades on delete.
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS auth_user (
        id SERIAL PRIMARY KEY,
        username VARCHAR(150) NOT NULL UNIQUE,
        password VARCHAR(128) NOT NULL DEFAULT '',
        first_name VARCHAR(150) NOT NULL DEFAULT '',
        last_name VARCHAR(150) NOT NULL DEFAULT '',
        email VARCHAR(254) NOT NULL DEFAULT '',
        date_joined TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS auth_token (
        key VARCHAR(40) PRIMARY KEY,
        user_id INTEGER NOT NULL UNIQUE REFERENCES auth_user (id) ON DELETE CASCADE,
        created TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS gamer (
        id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL UNIQUE REFERENCES auth_user (id) ON DELETE CASCADE,
        bio VARCHAR(50) NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS gametype (
        id SERIAL PRIMARY KEY,
        label VARCHAR(55) NOT NULL CHECK (btrim(label) <> '')
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS status (
        id SERIAL PRIMARY KEY,
        label VARCHAR(55) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS game (
        id SERIAL PRIMARY KEY,
        name VARCHAR(55) NOT NULL,
        player_limit INTEGER NOT NULL CHECK (player_limit > 0),
        created_by_id INTEGER NOT NULL REFERENCES gamer (id) ON DELETE CASCADE,
        gametype_id INTEGER NOT NULL REFERENCES gametype (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS event (
        id SERIAL PRIMARY KEY,
        name VARCHAR(55) NOT NULL,
        time TIMESTAMPTZ NOT NULL,
        status_id INTEGER NOT NULL REFERENCES status (id) ON DELETE CASCADE,
        host_id INTEGER NOT NULL REFERENCES gamer (id) ON DELETE CASCADE,
        game_id INTEGER NOT NULL REFERENCES game (id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS event_attendee (
        gamer_id INTEGER NOT NULL REFERENCES gamer (id) ON DELETE CASCADE,
        event_id INTEGER NOT NULL REFERENCES event (id) ON DELETE CASCADE,
        PRIMARY KEY (gamer_id, event_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS game_gametype_id_idx ON game (gametype_id)",
    "CREATE INDEX IF NOT EXISTS event_game_id_idx ON event (game_id)",
    "CREATE INDEX IF NOT EXISTS event_attendee_event_id_idx ON event_attendee (event_id)",
];

/// Create every table and index if it does not exist yet, in one transaction.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    // Serialize concurrent bootstraps (e.g. parallel test binaries) on one advisory lock.
    sqlx::query("SELECT pg_advisory_xact_lock(4242001)")
        .execute(&mut *tx)
        .await?;
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::debug!(tables = SCHEMA_DDL.len(), "schema ensured");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| invalid_url(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a URL into (url of the `postgres` admin database, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[after_scheme..]
        .find('/')
        .map(|i| after_scheme + i + 1)
        .ok_or_else(|| invalid_url("no database name in path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name, Some(q)),
        None => (path_and_query, None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.trim().to_string()))
}

fn invalid_url(reason: String) -> AppError {
    ConfigError::Invalid {
        var: "DATABASE_URL",
        reason,
    }
    .into()
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, db) = parse_db_name_from_url("postgres://u:p@localhost:5432/levelup").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(db, "levelup");
    }

    #[test]
    fn keeps_query_string_on_admin_url() {
        let (admin, db) = parse_db_name_from_url("postgres://localhost/levelup?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(db, "levelup");
    }

    #[test]
    fn url_without_path_is_a_config_error() {
        let err = parse_db_name_from_url("postgres://localhost").unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Invalid { var: "DATABASE_URL", .. })
        ));
    }

    #[tokio::test]
    async fn unparseable_url_is_a_config_error() {
        let err = ensure_database_exists("postgres://localhost:notaport/levelup")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Invalid { var: "DATABASE_URL", .. })
        ));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("level\"up"), "\"level\"\"up\"");
    }

    #[test]
    fn ddl_creates_every_table() {
        for table in ["auth_user", "auth_token", "gamer", "gametype", "status", "game", "event", "event_attendee"] {
            let needle = format!("CREATE TABLE IF NOT EXISTS {} (", table);
            assert!(SCHEMA_DDL.iter().any(|d| d.contains(&needle)), "missing {}", table);
        }
    }
}
