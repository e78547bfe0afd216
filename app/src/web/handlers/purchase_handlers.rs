// app/src/web/handlers/purchase_handlers.rs

use actix_web::{web, Either, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use stockbook::{parse_price, parse_quantity, NewProduct};

/// Body of a purchase submission, from a JSON client or a form post.
/// Numeric fields arrive as strings and go through the core parse helpers.
/// `name`/`unit`/`price` are only consulted when `product_id` is new.
#[derive(Deserialize, Debug)]
pub struct PurchasePayload {
  pub product_id: String,
  pub quantity: String,
  pub name: Option<String>,
  pub unit: Option<String>,
  pub price: Option<String>,
}

/// GET /purchase: the data a purchase form needs — existing products for the
/// product-id dropdown.
#[instrument(name = "handler::purchase_form", skip(app_state))]
pub async fn purchase_form_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let ledger = app_state.ledger.read();
  let existing: Vec<_> = ledger
    .products()
    .map(|(product_id, record)| json!({"product_id": product_id, "name": record.name, "unit": record.unit}))
    .collect();
  Ok(HttpResponse::Ok().json(json!({ "existing_products": existing })))
}

#[instrument(
    name = "handler::record_purchase",
    skip(app_state, payload),
)]
pub async fn record_purchase_handler(
  app_state: web::Data<AppState>,
  payload: Either<web::Json<PurchasePayload>, web::Form<PurchasePayload>>,
) -> Result<HttpResponse, AppError> {
  let payload = match payload {
    Either::Left(body) => body.into_inner(),
    Either::Right(form) => form.into_inner(),
  };
  let product_id = payload.product_id.trim().to_string();
  let quantity = parse_quantity("quantity", &payload.quantity)?;

  // Mutation and persistence run under one write guard; no `.await` while
  // the guard is held.
  let message = {
    let mut ledger = app_state.ledger.write();

    // Details are only parsed (and required) for a previously unseen id; an
    // existing product ignores them, bad price strings included.
    let details = if ledger.get(&product_id).is_none() {
      match (payload.name, payload.unit, payload.price) {
        (Some(name), Some(unit), Some(price)) => Some(NewProduct {
          name: name.trim().to_string(),
          unit: unit.trim().to_string(),
          price: parse_price("price", &price)?,
        }),
        _ => None,
      }
    } else {
      None
    };

    let outcome = ledger.record_purchase(&product_id, details, quantity)?;
    app_state.store.save(&ledger)?;
    outcome.to_string()
  };

  info!("Purchase recorded for product {}.", product_id);
  Ok(HttpResponse::Ok().json(json!({ "message": message })))
}
