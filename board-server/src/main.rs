use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use board_server::auth::StaticCredentials;
use board_server::config::ServerConfig;
use board_server::retry::RetryPolicy;
use board_server::store::PgMessageStore;
use board_server::{connect_with_retry, routes, seed_from_csv, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        "Using database {} on {}:{} as {}",
        config.db_name,
        config.db_host,
        config.db_port,
        config.db_user
    );

    // connessione + schema, con al massimo 5 tentativi a 3 secondi di distanza
    let pool = match connect_with_retry(config.connect_options(), RetryPolicy::default()).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("{:#}", e);
            return Err(e);
        }
    };
    let store = PgMessageStore::new(pool);

    if let Some(path) = &config.messages_csv {
        match seed_from_csv(&store, path).await {
            Ok(rows) => tracing::info!("Loaded {} messages from {:?}", rows, path),
            Err(e) => tracing::warn!("messages could not be loaded from csv: {:#}", e),
        }
    }

    let state = Arc::new(AppState::new(
        Arc::new(store),
        Arc::new(StaticCredentials::default()),
    ));
    let app = routes::router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    tracing::info!("Starting server on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to install CTRL+C handler: {}", e);
            }
        })
        .await
        .context("server shutdown")?;

    Ok(())
}
