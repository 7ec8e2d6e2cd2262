use sqlx::{types::Json, PgPool};

use crate::{error::AppResult, models::WatchlistEntry};

/// Watchlist persistence contract
///
/// Keyed by the movie's domain id; the storage engine's own identifiers
/// never leave this layer.
#[async_trait::async_trait]
pub trait WatchlistStore: Send + Sync {
    /// Inserts the entry unless one with the same id already exists.
    /// Returns whether a row was actually written.
    async fn add(&self, entry: &WatchlistEntry) -> AppResult<bool>;

    /// Every stored entry, in insertion order
    async fn list(&self) -> AppResult<Vec<WatchlistEntry>>;

    /// Deletes at most one entry; removing an absent id is a no-op.
    /// Returns whether a row was actually deleted.
    async fn remove(&self, movie_id: i64) -> AppResult<bool>;
}

/// Postgres-backed watchlist
#[derive(Clone)]
pub struct PgWatchlistStore {
    pool: PgPool,
}

impl PgWatchlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl WatchlistStore for PgWatchlistStore {
    async fn add(&self, entry: &WatchlistEntry) -> AppResult<bool> {
        // Single conditional insert: concurrent adds of the same id race on
        // the primary key, not on an application-level existence check.
        let result = sqlx::query(
            "INSERT INTO watchlist (movie_id, entry) VALUES ($1, $2) \
             ON CONFLICT (movie_id) DO NOTHING",
        )
        .bind(entry.id)
        .bind(Json(entry))
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() > 0;

        tracing::info!(movie_id = entry.id, inserted, "Watchlist add");

        Ok(inserted)
    }

    async fn list(&self) -> AppResult<Vec<WatchlistEntry>> {
        let rows: Vec<Json<WatchlistEntry>> =
            sqlx::query_scalar("SELECT entry FROM watchlist ORDER BY added_at")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|Json(entry)| entry).collect())
    }

    async fn remove(&self, movie_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM watchlist WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
