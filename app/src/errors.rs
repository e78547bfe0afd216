// app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use stockbook::LedgerError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Inventory Error: {source}")]
  Ledger {
    #[from] // Allows conversion from stockbook::LedgerError
    source: LedgerError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Ledger { source } => match source {
        LedgerError::InvalidInput { .. } => HttpResponse::BadRequest().json(json!({"error": source.to_string()})),
        LedgerError::NotFound { .. } => HttpResponse::NotFound().json(json!({"error": source.to_string()})),
        LedgerError::InsufficientStock { .. } => HttpResponse::Conflict().json(json!({"error": source.to_string()})),
        LedgerError::Store { .. } | LedgerError::Encode { .. } => {
          HttpResponse::InternalServerError().json(json!({"error": "Failed to persist inventory"}))
        }
      },
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
