mod movie;
mod watchlist;

pub use movie::{CreditsResponse, MovieDetail, MovieListResponse, VideosResponse};
pub use watchlist::WatchlistEntry;
