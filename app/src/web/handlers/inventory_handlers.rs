// app/src/web/handlers/inventory_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use stockbook::LedgerError;

#[instrument(name = "handler::list_inventory", skip(app_state))]
pub async fn list_inventory_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let body = {
    let ledger = app_state.ledger.read();
    let products: Vec<_> = ledger
      .products()
      .map(|(product_id, record)| {
        json!({
          "product_id": product_id,
          "name": record.name,
          "unit": record.unit,
          "price": record.price,
          "quantity": record.quantity,
          "stock_value": record.stock_value(),
        })
      })
      .collect();

    json!({
      "products": products,
      "total_products": ledger.len(),
      "total_value": ledger.total_value(),
    })
  };

  info!("Inventory listed.");
  Ok(HttpResponse::Ok().json(body))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let ledger = app_state.ledger.read();
  match ledger.get(&product_id) {
    Some(record) => Ok(HttpResponse::Ok().json(record)),
    None => {
      warn!("Product {} not found.", product_id);
      Err(LedgerError::NotFound { product_id }.into())
    }
  }
}
