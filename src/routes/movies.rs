use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::MovieDetail,
    services::movies,
    state::AppState,
};

/// Wrapper around a raw TMDB result list
#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Handler for movies currently in theaters
pub async fn latest(State(state): State<AppState>) -> AppResult<Json<ResultsResponse>> {
    let results = state.metadata.now_playing().await?;
    Ok(Json(ResultsResponse { results }))
}

/// Handler for this week's trending movies
pub async fn trending(State(state): State<AppState>) -> AppResult<Json<ResultsResponse>> {
    let results = state.metadata.trending().await?;
    Ok(Json(ResultsResponse { results }))
}

/// Handler for upcoming releases
pub async fn upcoming(State(state): State<AppState>) -> AppResult<Json<ResultsResponse>> {
    let results = state.metadata.upcoming().await?;
    Ok(Json(ResultsResponse { results }))
}

/// Handler for title search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<ResultsResponse>> {
    if params.query.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Search query cannot be empty".to_string(),
        ));
    }

    let results = state.metadata.search_movies(&params.query).await?;
    Ok(Json(ResultsResponse { results }))
}

/// Handler for the merged movie detail record
pub async fn details(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> AppResult<Json<MovieDetail>> {
    let detail = movies::movie_details(state.metadata.clone(), movie_id).await?;
    Ok(Json(detail))
}
