use anyhow::Context;
use dealership_api::{
    build_router,
    config::Config,
    constants::API_NAME,
    repository::{PgCarRepository, PgUserRepository},
    service::AppState,
    upstream::HttpUpstream,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting dealership API on port {}", API_NAME, config.server_port);
    tracing::info!(
        "{} Upstream backend {}, sentiment analyzer {}",
        API_NAME,
        config.backend_url,
        config.sentiment_analyzer_url
    );

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Connected to database", API_NAME);

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("{} Database migrations completed", API_NAME);

    let upstream = HttpUpstream::new(&config).context("Failed to build upstream HTTP client")?;
    let state = AppState::new(
        Arc::new(PgCarRepository::new(pool.clone())),
        Arc::new(PgUserRepository::new(pool)),
        Arc::new(upstream),
        config.session_ttl,
    );

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
