pub mod postgres;
pub mod watchlist;

pub use postgres::{create_pool, ensure_schema};
pub use watchlist::{PgWatchlistStore, WatchlistStore};
