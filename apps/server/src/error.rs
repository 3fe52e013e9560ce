use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cotacao_core::Error as CoreError;
use thiserror::Error;

pub const FETCH_FAILED_MESSAGE: &str = "Erro ao obter a cotação do dólar";
pub const PERSIST_FAILED_MESSAGE: &str = "Erro ao salvar a cotação no banco de dados";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Clients only ever see which stage failed, never the cause.
        let msg = match &self {
            ApiError::Core(CoreError::Fetch(_)) => FETCH_FAILED_MESSAGE,
            ApiError::Core(CoreError::Persist(_)) => PERSIST_FAILED_MESSAGE,
            ApiError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                "Internal Server Error"
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
