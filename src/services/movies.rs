use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::MovieDetail,
    services::providers::MetadataProvider,
};

/// Fetches the enriched record for one movie.
///
/// Currently a direct delegation to the metadata provider; cross-provider
/// enrichment would hook in here without touching the HTTP layer.
pub async fn movie_details(
    provider: Arc<dyn MetadataProvider>,
    movie_id: i64,
) -> AppResult<MovieDetail> {
    provider.movie_details(movie_id).await
}

/// Finds movies similar to a free-text title.
///
/// The title is resolved through search and the first match wins; no
/// disambiguation, no scoring. A resolved movie with no similar titles
/// yields an empty list.
pub async fn similar_by_title(
    provider: Arc<dyn MetadataProvider>,
    title: &str,
) -> AppResult<Vec<Value>> {
    let matches = provider.search_movies(title).await?;

    let movie_id = matches
        .first()
        .and_then(|movie| movie.get("id"))
        .and_then(Value::as_i64)
        .ok_or_else(|| {
            AppError::ExternalApi("Search result is missing a movie id".to_string())
        })?;

    provider.similar_movies(movie_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMetadataProvider;
    use mockall::predicate::eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_similar_by_title_uses_first_search_match() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search_movies()
            .with(eq("The Matrix"))
            .times(1)
            .returning(|_| Ok(vec![json!({ "id": 603 }), json!({ "id": 604 })]));
        provider
            .expect_similar_movies()
            .with(eq(603))
            .times(1)
            .returning(|_| Ok(vec![json!({ "id": 78, "title": "Blade Runner" })]));

        let similar = similar_by_title(Arc::new(provider), "The Matrix")
            .await
            .unwrap();

        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0]["title"], "Blade Runner");
    }

    #[tokio::test]
    async fn test_similar_by_title_stops_after_failed_search() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search_movies()
            .times(1)
            .returning(|_| Err(AppError::NotFound("No movie matching 'zzz'".to_string())));
        // No similar-movies call may go out once the search came back empty.
        provider.expect_similar_movies().times(0);

        let result = similar_by_title(Arc::new(provider), "zzz").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_similar_by_title_rejects_id_less_match() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_search_movies()
            .times(1)
            .returning(|_| Ok(vec![json!({ "title": "no id here" })]));
        provider.expect_similar_movies().times(0);

        let result = similar_by_title(Arc::new(provider), "broken").await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_movie_details_delegates() {
        let mut provider = MockMetadataProvider::new();
        provider
            .expect_movie_details()
            .with(eq(603))
            .times(1)
            .returning(|_| {
                Ok(crate::models::MovieDetail::compose(
                    serde_json::Map::new(),
                    Default::default(),
                    Default::default(),
                ))
            });

        let detail = movie_details(Arc::new(provider), 603).await.unwrap();
        assert!(detail.cast.is_empty());
    }
}
