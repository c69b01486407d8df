//! Configurazione letta dalle variabili d'ambiente, con valori di default.

use anyhow::Context;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_HTTP_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub bind_host: String,
    pub port: u16,
    /// CSV da caricare all'avvio (tabella svuotata prima del caricamento).
    pub messages_csv: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Come `from_env`, ma con una sorgente arbitraria. Le variabili vuote
    /// contano come non impostate.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
        let port_or = |key: &str, default: u16| {
            get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };

        Self {
            db_host: get_or("RDS_HOSTNAME", "localhost"),
            db_port: port_or("RDS_PORT", DEFAULT_DB_PORT),
            db_name: get_or("RDS_DB_NAME", "postgres"),
            db_user: get_or("RDS_USERNAME", "postgres"),
            db_password: get_or("RDS_PASSWORD", ""),
            bind_host: get_or("BIND_HOST", "0.0.0.0"),
            port: port_or("PORT", DEFAULT_HTTP_PORT),
            messages_csv: get("MESSAGES_CSV").map(PathBuf::from),
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.bind_host, self.port)
            .parse()
            .with_context(|| format!("parse bind address {}:{}", self.bind_host, self.port))
    }
}
