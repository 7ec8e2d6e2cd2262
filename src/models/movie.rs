use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of cast entries kept on a merged movie record
const CAST_LIMIT: usize = 5;

/// Paginated list payload returned by TMDB list endpoints
/// (search, similar, now playing, trending, upcoming).
///
/// Individual movies are passed through verbatim; no local schema is
/// enforced on them.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Payload of `GET /movie/{id}/credits`
#[derive(Debug, Default, Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<Value>,
    #[serde(default)]
    pub crew: Vec<Value>,
}

/// Payload of `GET /movie/{id}/videos`
#[derive(Debug, Default, Deserialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// A movie record enriched with credits and trailer data
///
/// The base detail fields are flattened into the serialized object, so the
/// client sees the TMDB movie document with `cast`, `director` and `trailer`
/// merged in.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Map<String, Value>,
    pub cast: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<Value>,
}

impl MovieDetail {
    /// Merges the detail, credits and videos payloads for one movie.
    ///
    /// Keeps the first five cast entries, the first crew entry credited as
    /// "Director" and the first video typed "Trailer". Selection is upstream
    /// array order, not any ranking.
    pub fn compose(
        movie: Map<String, Value>,
        credits: CreditsResponse,
        videos: VideosResponse,
    ) -> Self {
        let mut cast = credits.cast;
        cast.truncate(CAST_LIMIT);

        let director = credits
            .crew
            .into_iter()
            .find(|member| member.get("job").and_then(Value::as_str) == Some("Director"));

        let trailer = videos
            .results
            .into_iter()
            .find(|video| video.get("type").and_then(Value::as_str) == Some("Trailer"));

        Self {
            movie,
            cast,
            director,
            trailer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn movie_fields() -> Map<String, Value> {
        let mut movie = Map::new();
        movie.insert("id".to_string(), json!(603));
        movie.insert("title".to_string(), json!("The Matrix"));
        movie
    }

    fn person(name: &str, job: &str) -> Value {
        json!({ "name": name, "job": job })
    }

    #[test]
    fn test_compose_truncates_cast_to_five() {
        let credits = CreditsResponse {
            cast: (0..8).map(|i| json!({ "name": format!("Actor {i}") })).collect(),
            crew: vec![],
        };

        let detail = MovieDetail::compose(movie_fields(), credits, VideosResponse::default());
        assert_eq!(detail.cast.len(), 5);
        assert_eq!(detail.cast[0]["name"], "Actor 0");
    }

    #[test]
    fn test_compose_keeps_short_cast_verbatim() {
        let credits = CreditsResponse {
            cast: vec![json!({ "name": "Keanu Reeves" })],
            crew: vec![],
        };

        let detail = MovieDetail::compose(movie_fields(), credits, VideosResponse::default());
        assert_eq!(detail.cast.len(), 1);
    }

    #[test]
    fn test_compose_picks_first_director() {
        let credits = CreditsResponse {
            cast: vec![],
            crew: vec![
                person("Bill Pope", "Director of Photography"),
                person("Lana Wachowski", "Director"),
                person("Lilly Wachowski", "Director"),
            ],
        };

        let detail = MovieDetail::compose(movie_fields(), credits, VideosResponse::default());
        assert_eq!(detail.director.unwrap()["name"], "Lana Wachowski");
    }

    #[test]
    fn test_compose_without_director_or_trailer() {
        let credits = CreditsResponse {
            cast: vec![],
            crew: vec![person("Joel Silver", "Producer")],
        };
        let videos = VideosResponse {
            results: vec![json!({ "type": "Featurette", "key": "abc" })],
        };

        let detail = MovieDetail::compose(movie_fields(), credits, videos);
        assert!(detail.director.is_none());
        assert!(detail.trailer.is_none());
    }

    #[test]
    fn test_compose_picks_first_trailer() {
        let videos = VideosResponse {
            results: vec![
                json!({ "type": "Teaser", "key": "t0" }),
                json!({ "type": "Trailer", "key": "t1" }),
                json!({ "type": "Trailer", "key": "t2" }),
            ],
        };

        let detail =
            MovieDetail::compose(movie_fields(), CreditsResponse::default(), videos);
        assert_eq!(detail.trailer.unwrap()["key"], "t1");
    }

    #[test]
    fn test_detail_serializes_flattened() {
        let detail = MovieDetail::compose(
            movie_fields(),
            CreditsResponse::default(),
            VideosResponse::default(),
        );

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["title"], "The Matrix");
        assert_eq!(value["cast"], json!([]));
        // Absent director/trailer are omitted, not serialized as null
        assert!(value.get("director").is_none());
        assert!(value.get("trailer").is_none());
    }

    #[test]
    fn test_list_response_defaults_on_missing_results() {
        let parsed: MovieListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }
}
