/// Ollama-backed movie recommender
///
/// Sends one non-streamed completion request per query and returns the model
/// text untouched apart from whitespace trimming. The output is not parsed
/// or validated against any catalog.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    services::providers::Recommender,
};

#[derive(Clone)]
pub struct OllamaRecommender {
    http_client: HttpClient,
    api_url: String,
    model: String,
}

/// Completion payload of `POST /api/generate`
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaRecommender {
    pub fn new(api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            model,
        }
    }

    fn build_prompt(query: &str) -> String {
        format!(
            "You are a helpful AI movie assistant. A user said:\n\
             \"{}\"\n\n\
             Based on this, suggest a movie title or genre they might enjoy. \
             Respond with just one recommended title or genre.",
            query
        )
    }
}

#[async_trait::async_trait]
impl Recommender for OllamaRecommender {
    async fn recommend(&self, query: &str) -> AppResult<String> {
        let url = format!("{}/api/generate", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .json(&json!({
                "model": self.model,
                "prompt": Self::build_prompt(query),
                "stream": false,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            // Keep the raw body; it is the only diagnostic the model server gives.
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "LLM service returned status {}: {}",
                status, body
            )));
        }

        let result: GenerateResponse = response.json().await?;

        tracing::info!(model = %self.model, "Completion received");

        Ok(result.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_query_verbatim() {
        let prompt = OllamaRecommender::build_prompt("something like Blade Runner, but funny");
        assert!(prompt.contains("\"something like Blade Runner, but funny\""));
        assert!(prompt.contains("just one recommended title or genre"));
    }

    #[test]
    fn test_generate_response_defaults_to_empty() {
        // The upstream contract does not guarantee a response field.
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.response, "");
    }

    #[test]
    fn test_generate_response_parses_text() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{ "response": "  The Big Lebowski\n" }"#).unwrap();
        assert_eq!(parsed.response.trim(), "The Big Lebowski");
    }
}
