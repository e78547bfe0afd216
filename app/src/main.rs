// app/src/main.rs

// Declare modules for the application
mod config;
mod console;
mod errors;
mod state;
mod web;

use crate::config::AppConfig;
use crate::state::AppState;

use anyhow::bail;
use std::sync::Arc;
use stockbook::{FlatFileStore, SharedLedger};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

enum Mode {
  /// Interactive menu on stdin/stdout.
  Console,
  /// HTTP server (the default).
  Serve,
}

fn mode_from_args() -> anyhow::Result<Mode> {
  match std::env::args().nth(1).as_deref() {
    None | Some("serve") => Ok(Mode::Serve),
    Some("console") => Ok(Mode::Console),
    Some(other) => bail!("Unknown mode '{}'; expected 'console' or 'serve'.", other),
  }
}

fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  let mode = mode_from_args()?;

  tracing::info!("Starting the Stockbook inventory application...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };

  // One ledger instance per process, loaded from the flat file at startup.
  // A broken or absent file starts the book empty rather than failing.
  let store = Arc::new(FlatFileStore::new(&app_config.data_file));
  let ledger = SharedLedger::new(store.load());
  tracing::info!(
    data_file = %app_config.data_file.display(),
    products = ledger.read().len(),
    "Inventory loaded."
  );

  // Create AppState shared by both adapters
  let app_state = AppState {
    ledger,
    store,
    config: app_config,
  };

  match mode {
    Mode::Console => console::run(&app_state),
    Mode::Serve => actix_rt::System::new().block_on(web::serve(app_state)),
  }
}
