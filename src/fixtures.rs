//! Reference data loading: game types and event statuses from JSON files.

use crate::error::{AppError, ConfigError};
use crate::models::{Gametype, Status};
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use std::path::Path;

pub const GAMETYPES_FILE: &str = "gametypes.json";
pub const STATUSES_FILE: &str = "statuses.json";

/// Counts of rows upserted from a fixtures directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub gametypes: usize,
    pub statuses: usize,
}

/// Upsert `gametypes.json` and `statuses.json` from `dir` by id. Missing files are skipped.
pub async fn load_from_dir(pool: &PgPool, dir: &Path) -> Result<FixtureReport, AppError> {
    let gametypes: Vec<Gametype> = read_fixture(dir, GAMETYPES_FILE).await?;
    let statuses: Vec<Status> = read_fixture(dir, STATUSES_FILE).await?;
    if let Some(bad) = gametypes.iter().find(|g| g.label.trim().is_empty()) {
        return Err(ConfigError::Fixtures(format!("gametype {} has an empty label", bad.id)).into());
    }

    let mut tx = pool.begin().await?;
    for g in &gametypes {
        sqlx::query("INSERT INTO gametype (id, label) VALUES ($1, $2) ON CONFLICT (id) DO UPDATE SET label = EXCLUDED.label")
            .bind(g.id)
            .bind(&g.label)
            .execute(&mut *tx)
            .await?;
    }
    for s in &statuses {
        sqlx::query("INSERT INTO status (id, label) VALUES ($1, $2) ON CONFLICT (id) DO UPDATE SET label = EXCLUDED.label")
            .bind(s.id)
            .bind(&s.label)
            .execute(&mut *tx)
            .await?;
    }
    // Explicit ids bypass the serial sequences; move them past the highest id.
    for table in ["gametype", "status"] {
        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('{0}', 'id'), GREATEST((SELECT COALESCE(MAX(id), 0) FROM {0}), 1))",
            table
        );
        sqlx::query(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    let report = FixtureReport {
        gametypes: gametypes.len(),
        statuses: statuses.len(),
    };
    tracing::info!(dir = %dir.display(), gametypes = report.gametypes, statuses = report.statuses, "fixtures loaded");
    Ok(report)
}

async fn read_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, ConfigError> {
    let path = dir.join(file);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "fixture file not found, skipping");
            return Ok(Vec::new());
        }
        Err(e) => return Err(ConfigError::Fixtures(format!("{}: {}", path.display(), e))),
    };
    serde_json::from_str(&raw).map_err(|e| ConfigError::Fixtures(format!("{}: {}", path.display(), e)))
}
