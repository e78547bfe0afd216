// app/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod routes;

// Re-export the routing configuration so main.rs and tests share one table.
pub use routes::configure_app_routes;

use actix_web::{web as actix_data, App, HttpServer};
use tracing::info;

use crate::state::AppState;

/// Builds and runs the HTTP server until shutdown.
pub async fn serve(app_state: AppState) -> anyhow::Result<()> {
  let server_address = format!("{}:{}", app_state.config.server_host, app_state.config.server_port);
  info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
