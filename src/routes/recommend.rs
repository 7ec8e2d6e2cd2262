use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    routes::movies::ResultsResponse,
    services::movies,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub suggested: String,
}

#[derive(Debug, Deserialize)]
pub struct SimilarParams {
    pub movie: String,
}

/// Handler for free-text recommendation queries
///
/// An absent or blank query is rejected before the model endpoint is
/// contacted.
pub async fn from_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> AppResult<Json<QueryResponse>> {
    if request.query.trim().is_empty() {
        return Err(AppError::InvalidInput("Missing query".to_string()));
    }

    let suggested = state.recommender.recommend(&request.query).await?;
    Ok(Json(QueryResponse { suggested }))
}

/// Handler for similar-movie lookups by title
pub async fn similar(
    State(state): State<AppState>,
    Query(params): Query<SimilarParams>,
) -> AppResult<Json<ResultsResponse>> {
    let results = movies::similar_by_title(state.metadata.clone(), &params.movie).await?;
    Ok(Json(ResultsResponse { results }))
}
