use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    List(Vec<String>),
}

// ServerError renders as {"error": {"message": ..., "status": ...}}
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: ErrorMessage,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        ServerError { status, message: ErrorMessage::Single(message.to_string()) }
    }

    pub fn with_messages(status: StatusCode, messages: Vec<String>) -> Self {
        ServerError { status, message: ErrorMessage::List(messages) }
    }

    pub fn internal() -> Self {
        ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        });
        (self.status, Json(body)).into_response()
    }
}

pub fn json_to_server_error(err: JsonRejection) -> ServerError {
    ServerError::with_messages(StatusCode::BAD_REQUEST, vec![err.body_text()])
}

// catch-all for routes that are not registered
pub async fn not_found() -> ServerError {
    ServerError::new(StatusCode::NOT_FOUND, "Not Found")
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { messages } => {
                ServerError::with_messages(StatusCode::BAD_REQUEST, messages)
            }
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::DuplicateKey { message } => {
                ServerError::new(StatusCode::CONFLICT, message.as_str())
            }
            CommandError::Serialization { message } => {
                ServerError::with_messages(StatusCode::BAD_REQUEST, vec![message])
            }
            other => {
                tracing::error!(error = ?other, "unexpected command failure");
                ServerError::internal()
            }
        }
    }
}
