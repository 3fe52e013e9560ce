use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use cotacao_core::constants::{DEFAULT_MIRROR_FILE, DEFAULT_REQUEST_BUDGET};
use cotacao_market_data::provider::awesome_api::BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub provider_url: String,
    pub request_budget: Duration,
    pub mirror_path: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, defaulting unset keys.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("COTACAO_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid COTACAO_LISTEN_ADDR")?;
        let db_path = lookup("COTACAO_DB_PATH").unwrap_or_else(|| "./db/cotacao.db".into());
        let provider_url = lookup("COTACAO_PROVIDER_URL").unwrap_or_else(|| BASE_URL.into());
        let budget_ms: u64 = lookup("COTACAO_REQUEST_BUDGET_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_BUDGET.as_millis() as u64);
        let mirror_path =
            lookup("COTACAO_MIRROR_PATH").unwrap_or_else(|| DEFAULT_MIRROR_FILE.into());
        let log_format = match lookup("COTACAO_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            db_path,
            provider_url,
            request_budget: Duration::from_millis(budget_ms),
            mirror_path,
            log_format,
        })
    }
}
