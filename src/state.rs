use std::sync::Arc;

use crate::{
    db::WatchlistStore,
    services::providers::{MetadataProvider, Recommender},
};

/// Shared application state
///
/// Holds the three upstream seams behind trait objects so the full router
/// can run against test doubles.
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<dyn MetadataProvider>,
    pub recommender: Arc<dyn Recommender>,
    pub watchlist: Arc<dyn WatchlistStore>,
}

impl AppState {
    pub fn new(
        metadata: Arc<dyn MetadataProvider>,
        recommender: Arc<dyn Recommender>,
        watchlist: Arc<dyn WatchlistStore>,
    ) -> Self {
        Self {
            metadata,
            recommender,
            watchlist,
        }
    }
}
