use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use nextflix_api::{
    config::Config,
    db,
    routes::create_router,
    services::providers::{ollama::OllamaRecommender, tmdb::TmdbProvider},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::create_pool(&config.database_url).await?;
    db::ensure_schema(&pool).await?;

    let state = AppState::new(
        Arc::new(TmdbProvider::new(config.tmdb_api_key, config.tmdb_api_url)),
        Arc::new(OllamaRecommender::new(
            config.ollama_api_url,
            config.llm_model_name,
        )),
        Arc::new(db::PgWatchlistStore::new(pool)),
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
