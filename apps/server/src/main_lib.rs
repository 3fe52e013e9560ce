use std::sync::Arc;

use crate::config::{Config, LogFormat};
use cotacao_core::quotes::{FileMirror, QuoteService, QuoteServiceTrait};
use cotacao_market_data::AwesomeApiProvider;
use cotacao_storage_sqlite::{self as storage, QuoteRepository};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub quote_repository: Arc<QuoteRepository>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = storage::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = storage::create_pool(&db_path)?;
    storage::run_migrations(&pool)?;
    let writer = storage::spawn_writer(&pool)?;
    let quote_repository = Arc::new(QuoteRepository::new(pool.clone(), writer));

    let provider = Arc::new(AwesomeApiProvider::new(&config.provider_url)?);
    let mirror = Arc::new(FileMirror::new(&config.mirror_path));
    let quote_service = QuoteService::new(provider, quote_repository.clone(), mirror)
        .with_budget(config.request_budget);
    tracing::info!(
        "Quote provider {} with a {:?} request budget",
        config.provider_url,
        quote_service.budget()
    );

    Ok(Arc::new(AppState {
        quote_service: Arc::new(quote_service),
        quote_repository,
    }))
}
