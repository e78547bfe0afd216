// app/src/web/handlers/sale_handlers.rs

use actix_web::{web, Either, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use stockbook::parse_quantity;

#[derive(Deserialize, Debug)]
pub struct SalePayload {
  pub product_id: String,
  pub quantity: String,
}

/// GET /sale: products currently available for sale.
#[instrument(name = "handler::sale_form", skip(app_state))]
pub async fn sale_form_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let ledger = app_state.ledger.read();
  let available: Vec<_> = ledger
    .products()
    .map(|(product_id, record)| {
      json!({
        "product_id": product_id,
        "name": record.name,
        "unit": record.unit,
        "price": record.price,
        "quantity": record.quantity,
      })
    })
    .collect();
  Ok(HttpResponse::Ok().json(json!({ "available_products": available })))
}

#[instrument(name = "handler::record_sale", skip(app_state, payload))]
pub async fn record_sale_handler(
  app_state: web::Data<AppState>,
  payload: Either<web::Json<SalePayload>, web::Form<SalePayload>>,
) -> Result<HttpResponse, AppError> {
  let payload = match payload {
    Either::Left(body) => body.into_inner(),
    Either::Right(form) => form.into_inner(),
  };
  let product_id = payload.product_id.trim().to_string();
  let quantity = parse_quantity("quantity", &payload.quantity)?;

  // Mutation and persistence run under one write guard; no `.await` while
  // the guard is held.
  let outcome = {
    let mut ledger = app_state.ledger.write();
    let outcome = ledger.record_sale(&product_id, quantity)?;
    app_state.store.save(&ledger)?;
    outcome
  };

  info!(
    "Sale recorded for product {}: value {:.2}, removed: {}.",
    product_id, outcome.sale_value, outcome.removed
  );
  Ok(HttpResponse::Ok().json(json!({
    "message": outcome.to_string(),
    "sale_value": outcome.sale_value,
    "remaining": outcome.remaining,
    "removed": outcome.removed,
  })))
}
