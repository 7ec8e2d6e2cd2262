/// External upstream clients
///
/// Each upstream sits behind a trait so handlers and services depend on the
/// contract, not on a concrete HTTP client. Tests swap in doubles; `main`
/// wires the real TMDB and Ollama implementations.
use serde_json::Value;

use crate::{error::AppResult, models::MovieDetail};

pub mod ollama;
pub mod tmdb;

/// Movie metadata provider contract
///
/// List-shaped operations return the provider's result arrays verbatim;
/// callers must not assume any schema beyond the presence of an `id` on
/// search results.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search movies by title
    ///
    /// Fails with `AppError::NotFound` when the provider returns no matches.
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Value>>;

    /// Movies similar to the given movie id. An empty list is a valid answer.
    async fn similar_movies(&self, movie_id: i64) -> AppResult<Vec<Value>>;

    /// Detail, credits and videos for one movie, merged into a single record
    async fn movie_details(&self, movie_id: i64) -> AppResult<MovieDetail>;

    /// Movies currently in theaters
    async fn now_playing(&self) -> AppResult<Vec<Value>>;

    /// Movies trending this week
    async fn trending(&self) -> AppResult<Vec<Value>>;

    /// Upcoming releases
    async fn upcoming(&self) -> AppResult<Vec<Value>>;
}

/// Free-text recommendation contract
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Recommender: Send + Sync {
    /// Turns a natural-language query into a single suggested title or genre.
    ///
    /// The returned string is trimmed but otherwise unvalidated; it may be
    /// empty if the model produced no text.
    async fn recommend(&self, query: &str) -> AppResult<String>;
}
