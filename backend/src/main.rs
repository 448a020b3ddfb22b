mod domain;
mod application;
mod infrastructure;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infrastructure::config::AppConfig;
use infrastructure::driven::{InMemoryCourseRepository, LocalVideoStorage};
use infrastructure::{driving::create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Course server starting...");

    let storage = LocalVideoStorage::create(&config.video_dir)
        .await
        .with_context(|| format!("cannot create video directory {}", config.video_dir.display()))?;
    tracing::info!("Storing uploaded videos in {}", storage.root().display());

    let state = AppState::new(Arc::new(InMemoryCourseRepository::new()), Arc::new(storage));
    let app = create_router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
