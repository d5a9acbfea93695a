use std::sync::Arc;

use anyhow::Context;
use blog_service::{
    app,
    config::Config,
    store::PgRepository,
    utils::seed::create_test_user,
    AppState,
};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    let repository = PgRepository::new(pool);
    repository
        .migrate()
        .await
        .context("Failed to run migrations")?;

    create_test_user(&repository)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed the test account : {e:?}"))?;

    let app_state = Arc::new(AppState {
        repository: Arc::new(repository),
        secret_key: config.secret_key,
        token_lifetime: config.token_lifetime,
    });

    info!("Listening on {}", config.bind_address);
    axum::Server::bind(&config.bind_address)
        .serve(app(app_state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for ctrl-c : {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
