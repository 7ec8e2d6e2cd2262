/// TMDB metadata provider
///
/// Wraps the subset of the TMDB v3 API this gateway relies on: movie search,
/// similar titles, the detail/credits/videos triple and the three list feeds.
/// Responses are passed through verbatim; only the envelope types needed to
/// reach the payload are deserialized.
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::{CreditsResponse, MovieDetail, MovieListResponse, VideosResponse},
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Issues a GET against a TMDB path with the API key attached.
    ///
    /// Non-2xx responses become `AppError::ExternalApi` carrying the status
    /// and response body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn movie_list(&self, path: &str) -> AppResult<Vec<Value>> {
        let page: MovieListResponse = self.get_json(path, &[]).await?;
        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<Value>> {
        let page: MovieListResponse = self.get_json("/search/movie", &[("query", query)]).await?;

        if page.results.is_empty() {
            return Err(AppError::NotFound(format!("No movie matching '{}'", query)));
        }

        tracing::info!(
            query = %query,
            results = page.results.len(),
            provider = "tmdb",
            "Movie search completed"
        );

        Ok(page.results)
    }

    async fn similar_movies(&self, movie_id: i64) -> AppResult<Vec<Value>> {
        self.movie_list(&format!("/movie/{}/similar", movie_id)).await
    }

    async fn movie_details(&self, movie_id: i64) -> AppResult<MovieDetail> {
        // Three independent reads for the same id; any failure aborts the merge.
        let movie_path = format!("/movie/{}", movie_id);
        let credits_path = format!("/movie/{}/credits", movie_id);
        let videos_path = format!("/movie/{}/videos", movie_id);
        let (movie, credits, videos) = tokio::try_join!(
            self.get_json::<Map<String, Value>>(&movie_path, &[]),
            self.get_json::<CreditsResponse>(&credits_path, &[]),
            self.get_json::<VideosResponse>(&videos_path, &[]),
        )?;

        tracing::debug!(movie_id, provider = "tmdb", "Movie detail merged");

        Ok(MovieDetail::compose(movie, credits, videos))
    }

    async fn now_playing(&self) -> AppResult<Vec<Value>> {
        self.movie_list("/movie/now_playing").await
    }

    async fn trending(&self) -> AppResult<Vec<Value>> {
        self.movie_list("/trending/movie/week").await
    }

    async fn upcoming(&self) -> AppResult<Vec<Value>> {
        self.movie_list("/movie/upcoming").await
    }
}
