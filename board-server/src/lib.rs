use anyhow::Context;
use axum::http::StatusCode;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub mod auth;
pub mod config;
pub mod controllers;
pub mod error;
pub mod retry;
pub mod routes;
pub mod store;

use auth::CredentialVerifier;
use retry::{retry, RetryPolicy};
use store::{MessageStore, PgMessageStore};

/// Stato condiviso dagli handler: store e verifica credenziali, entrambi iniettati.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { store, verifier }
    }
}

// Connect to the database and return a connection pool.
pub async fn connect_pool(options: PgConnectOptions) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .context("connect to postgres")?;
    Ok(pool)
}

// Crea la tabella messages e l'indice su creation_time se non esistono.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    let stmts = [
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id            UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name          TEXT NOT NULL,
            email         TEXT NOT NULL,
            text          TEXT NOT NULL,
            creation_time TIMESTAMPTZ NOT NULL DEFAULT now()
        );"#,
        // l'elenco è sempre ordinato dal più recente
        r#"
        CREATE INDEX IF NOT EXISTS timestamp_desc_index
            ON messages (creation_time DESC);"#,
    ];
    for s in &stmts {
        sqlx::query(s)
            .execute(pool)
            .await
            .with_context(|| format!("apply schema: {}", s.trim().lines().next().unwrap_or_default()))?;
    }
    Ok(())
}

/// Apre il pool e inizializza lo schema, ripetendo entrambi secondo `policy`.
/// Dopo l'ultimo tentativo fallito l'errore è fatale per l'avvio.
pub async fn connect_with_retry(
    options: PgConnectOptions,
    policy: RetryPolicy,
) -> anyhow::Result<PgPool> {
    retry(policy, |attempt| {
        let options = options.clone();
        async move {
            tracing::info!("Initializing database (attempt {})", attempt);
            let pool = connect_pool(options).await?;
            ensure_schema(&pool).await?;
            Ok::<_, anyhow::Error>(pool)
        }
    })
    .await
    .context("could not connect to database")
}

/// Carica un CSV (con header: id,name,email,text,creation_time) con `COPY FROM STDIN`.
/// Restituisce il numero di righe inserite.
pub async fn load_csv(pool: &PgPool, path: &Path) -> anyhow::Result<u64> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("read csv file {:?}", path))?;
    // COPY FROM STDIN gira su una singola connessione presa dal pool
    let mut conn = pool.acquire().await.context("acquire connection for COPY")?;
    let mut copy = conn
        .copy_in_raw(
            "COPY messages (id, name, email, text, creation_time) FROM STDIN WITH (FORMAT csv, HEADER true)",
        )
        .await
        .context("start COPY into messages")?;
    let sent = copy.send(data).await.map(|_| ());
    if let Err(e) = sent {
        copy.abort(e.to_string()).await.ok();
        return Err(e).context("send csv data");
    }
    let rows = copy.finish().await.context("finish COPY into messages")?;
    Ok(rows)
}

/// Svuota la tabella e la ripopola dal CSV.
pub async fn seed_from_csv(store: &PgMessageStore, path: &Path) -> anyhow::Result<u64> {
    store.clear().await.context("clear messages table")?;
    load_csv(store.pool(), path).await
}

/// Controlla lo stato di salute dello storage.
pub async fn health_with_store(store: &dyn MessageStore) -> StatusCode {
    match store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
