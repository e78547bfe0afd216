// core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
  #[error("Invalid {field}: {reason}")]
  InvalidInput { field: &'static str, reason: String },

  #[error("Product not found: {product_id}")]
  NotFound { product_id: String },

  #[error("Insufficient stock for '{product_id}': requested {requested}, available {available}")]
  InsufficientStock {
    product_id: String,
    requested: f64,
    available: f64,
  },

  #[error("Failed to write inventory file '{path}': {source}")]
  Store {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to encode inventory: {source}")]
  Encode {
    #[from]
    source: serde_json::Error,
  },
}

impl LedgerError {
  /// Helper for the common "field does not parse / is out of range" case.
  pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
    LedgerError::InvalidInput {
      field,
      reason: reason.into(),
    }
  }
}

pub type LedgerResult<T, E = LedgerError> = std::result::Result<T, E>;
