use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entry in the user's watchlist, keyed by the TMDB movie id.
///
/// Only `id` is required; whatever else the client submitted (title, poster
/// path, rating, ...) is carried verbatim and returned as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_keeps_unknown_fields() {
        let entry: WatchlistEntry =
            serde_json::from_value(json!({ "id": 42, "title": "X", "vote_average": 7.8 }))
                .unwrap();

        assert_eq!(entry.id, 42);
        assert_eq!(entry.extra["title"], "X");
        assert_eq!(entry.extra["vote_average"], 7.8);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry: WatchlistEntry =
            serde_json::from_value(json!({ "id": 42, "title": "X" })).unwrap();

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({ "id": 42, "title": "X" }));
    }

    #[test]
    fn test_entry_requires_id() {
        let result = serde_json::from_value::<WatchlistEntry>(json!({ "title": "X" }));
        assert!(result.is_err());
    }
}
