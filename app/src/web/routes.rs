// app/src/web/routes.rs

use actix_web::web;

// Liveness probe; the ledger is in-process, so "up" is the whole story.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `serve` (and the handler tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Inventory listing with aggregate totals
    .route(
      "/inventory",
      web::get().to(crate::web::handlers::inventory_handlers::list_inventory_handler),
    )
    // Purchase Routes
    .service(
      web::resource("/purchase")
        .route(web::get().to(crate::web::handlers::purchase_handlers::purchase_form_handler))
        .route(web::post().to(crate::web::handlers::purchase_handlers::record_purchase_handler)),
    )
    // Sale Routes
    .service(
      web::resource("/sale")
        .route(web::get().to(crate::web::handlers::sale_handlers::sale_form_handler))
        .route(web::post().to(crate::web::handlers::sale_handlers::record_sale_handler)),
    )
    // Single-product lookup
    .route(
      "/api/product/{product_id}",
      web::get().to(crate::web::handlers::inventory_handlers::get_product_handler),
    );
}
