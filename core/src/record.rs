// core/src/record.rs

use serde::{Deserialize, Serialize};

/// One product's stored attributes. The product id is the key of the
/// enclosing inventory map, not a field of the record, which keeps the
/// serialized form identical to the flat-file layout:
/// `{ "<product_id>": { "name": ..., "unit": ..., "price": ..., "quantity": ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
  pub name: String,
  /// Unit-of-measure label ("kg", "pcs", ...). Descriptive only; the ledger
  /// performs no unit conversion.
  pub unit: String,
  /// Price per unit, fixed at first purchase.
  pub price: f64,
  /// Current stock level. Never negative.
  pub quantity: f64,
}

impl ProductRecord {
  /// Value of the stock currently on hand: `price * quantity`.
  pub fn stock_value(&self) -> f64 {
    self.price * self.quantity
  }
}
