use std::sync::Arc;

use anyhow::Context;
use axum::{extract::DefaultBodyLimit, http::HeaderValue};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use wardrobe_api::api::{create_router, AppState};
use wardrobe_api::config::Config;
use wardrobe_api::db::{create_pool, run_migrations, InMemoryItemStore, ItemStore, PgItemStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wardrobe_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn ItemStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            Arc::new(PgItemStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, wardrobe items will not survive a restart");
            Arc::new(InMemoryItemStore::new())
        }
    };
    tracing::info!(store = store.name(), "Item store ready");

    let origins = config
        .cors_origin_list()
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid CORS origin")?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(AppState::new(store))
        .layer(cors)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
