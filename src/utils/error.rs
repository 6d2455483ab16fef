//! Error handling for the demo server
//!
//! This module defines the error type used throughout the crate and its
//! translation to HTTP responses.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the demo server
pub type Result<T> = std::result::Result<T, TongYiError>;

/// Main error type for the demo server
#[derive(Error, Debug)]
pub enum TongYiError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request validation errors
    #[error("{0}")]
    Validation(String),

    /// Errors reported by the DashScope API
    #[error("Provider error: {0}")]
    Provider(String),

    /// A capability was requested from a service that does not implement it
    #[error("Unsupported capability: {0}")]
    Unsupported(String),

    /// Audio transcription failed; the original cause is retained
    #[error("{message}")]
    Transcription {
        message: String,
        #[source]
        source: Box<TongYiError>,
    },

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout errors (asynchronous vendor tasks that never completed)
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl TongYiError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider(message.into())
    }

    pub fn unsupported(service: &str, operation: &str) -> Self {
        Self::Unsupported(format!(
            "service '{}' does not implement '{}'",
            service, operation
        ))
    }

    pub fn transcription<S: Into<String>>(message: S, source: TongYiError) -> Self {
        Self::Transcription {
            message: message.into(),
            source: Box::new(source),
        }
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail carried in every error response body
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ResponseError for TongYiError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            TongYiError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            TongYiError::Unsupported(_) => (
                actix_web::http::StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                self.to_string(),
            ),
            TongYiError::Provider(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "PROVIDER_ERROR",
                self.to_string(),
            ),
            TongYiError::Timeout(_) => (
                actix_web::http::StatusCode::GATEWAY_TIMEOUT,
                "TIMEOUT",
                self.to_string(),
            ),
            TongYiError::Transcription { .. } => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "TRANSCRIPTION_ERROR",
                self.to_string(),
            ),
            TongYiError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
            },
        };

        HttpResponse::build(status_code).json(body)
    }
}
