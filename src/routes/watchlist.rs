use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::WatchlistEntry,
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Handler for adding a movie to the watchlist
///
/// The body must carry the movie's integer `id`; everything else is stored
/// as submitted. Re-adding an existing id is a no-op.
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<MessageResponse>> {
    if body.get("id").and_then(Value::as_i64).is_none() {
        return Err(AppError::InvalidInput("Movie id is required".to_string()));
    }

    let entry: WatchlistEntry = serde_json::from_value(body)
        .map_err(|e| AppError::InvalidInput(format!("Invalid watchlist entry: {}", e)))?;

    let inserted = state.watchlist.add(&entry).await?;

    let message = if inserted {
        "Added to watchlist".to_string()
    } else {
        "Already in watchlist".to_string()
    };

    Ok(Json(MessageResponse { message }))
}

/// Handler returning the full watchlist
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WatchlistEntry>>> {
    let entries = state.watchlist.list().await?;
    Ok(Json(entries))
}

/// Handler for removing a movie from the watchlist
///
/// Idempotent: removing an id that is not on the list succeeds.
pub async fn remove(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.watchlist.remove(movie_id).await?;

    Ok(Json(MessageResponse {
        message: "Removed from watchlist".to_string(),
    }))
}
