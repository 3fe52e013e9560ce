use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use cotacao_core::quotes::Quote;
use tokio::task;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers a query.
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    let repository = state.quote_repository.clone();
    task::spawn_blocking(move || repository.count())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok("ok")
}

async fn get_quote(State(state): State<Arc<AppState>>) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.fetch_and_store().await?;
    Ok(Json(quote))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/cotacao", get(get_quote))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
