// app/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use stockbook::{FlatFileStore, SharedLedger};

#[derive(Clone)]
pub struct AppState {
  pub ledger: SharedLedger,
  pub store: Arc<FlatFileStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}
