// core/src/ledger.rs

//! The ledger core: owns the inventory mapping and applies purchase/sale
//! mutations under the quantity invariants.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::record::ProductRecord;

/// Attributes required the first time a product id is purchased. Ignored on
/// every subsequent purchase of the same id.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub name: String,
  pub unit: String,
  pub price: f64,
}

/// Result of a successful purchase. `Display` renders the confirmation
/// message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
  /// A previously unseen product id was added to the inventory.
  Added { name: String },
  /// An existing record's quantity was increased.
  Restocked {
    name: String,
    unit: String,
    new_quantity: f64,
  },
}

impl fmt::Display for PurchaseOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PurchaseOutcome::Added { name } => write!(f, "Added new product: {}", name),
      PurchaseOutcome::Restocked {
        name,
        unit,
        new_quantity,
      } => write!(f, "Updated {} - new quantity: {} {}", name, new_quantity, unit),
    }
  }
}

/// Result of a successful sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleOutcome {
  pub name: String,
  pub unit: String,
  /// Quantity sold in this transaction.
  pub quantity: f64,
  /// `quantity * price` for this transaction.
  pub sale_value: f64,
  /// Stock left after the sale. Zero exactly when `removed` is true.
  pub remaining: f64,
  /// True when the sale drained the record and it was deleted.
  pub removed: bool,
}

impl fmt::Display for SaleOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Sold: {} {} of {} for ${:.2}",
      self.quantity, self.unit, self.name, self.sale_value
    )?;
    if self.removed {
      write!(f, " (product removed - quantity reached 0)")?;
    }
    Ok(())
  }
}

/// The in-memory inventory: product id -> record, iterated in sorted id
/// order. Sorted iteration also keeps the serialized flat file stable across
/// save cycles.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
  products: BTreeMap<String, ProductRecord>,
}

impl Ledger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_products(products: BTreeMap<String, ProductRecord>) -> Self {
    Ledger { products }
  }

  /// Records a purchase of `quantity` units of `product_id`.
  ///
  /// An existing id has `quantity` added to its stock; `details` is ignored.
  /// An unknown id requires `details` and creates the record with the given
  /// attributes, which stay fixed for the record's lifetime.
  pub fn record_purchase(
    &mut self,
    product_id: &str,
    details: Option<NewProduct>,
    quantity: f64,
  ) -> LedgerResult<PurchaseOutcome> {
    validate_quantity(quantity)?;

    if let Some(record) = self.products.get_mut(product_id) {
      record.quantity += quantity;
      info!(
        product_id,
        purchased = quantity,
        new_quantity = record.quantity,
        "purchase recorded for existing product"
      );
      return Ok(PurchaseOutcome::Restocked {
        name: record.name.clone(),
        unit: record.unit.clone(),
        new_quantity: record.quantity,
      });
    }

    let details = details.ok_or_else(|| {
      LedgerError::invalid(
        "product details",
        format!("'{}' is a new product; name, unit and price are required", product_id),
      )
    })?;
    validate_price(details.price)?;

    let name = details.name.clone();
    self.products.insert(
      product_id.to_string(),
      ProductRecord {
        name: details.name,
        unit: details.unit,
        price: details.price,
        quantity,
      },
    );
    info!(product_id, quantity, "new product added to inventory");
    Ok(PurchaseOutcome::Added { name })
  }

  /// Records a sale of `quantity` units of `product_id`.
  ///
  /// Fails with `NotFound` for an unknown id, `InvalidInput` for a
  /// non-positive quantity, and `InsufficientStock` when the sale would
  /// overdraw the record. A failed sale leaves the inventory untouched. A
  /// sale that drains the record to exactly zero deletes it.
  pub fn record_sale(&mut self, product_id: &str, quantity: f64) -> LedgerResult<SaleOutcome> {
    validate_quantity(quantity)?;

    let record = self.products.get_mut(product_id).ok_or_else(|| LedgerError::NotFound {
      product_id: product_id.to_string(),
    })?;

    if quantity > record.quantity {
      debug!(
        product_id,
        requested = quantity,
        available = record.quantity,
        "sale rejected: insufficient stock"
      );
      return Err(LedgerError::InsufficientStock {
        product_id: product_id.to_string(),
        requested: quantity,
        available: record.quantity,
      });
    }

    record.quantity -= quantity;
    let outcome = SaleOutcome {
      name: record.name.clone(),
      unit: record.unit.clone(),
      quantity,
      sale_value: quantity * record.price,
      remaining: record.quantity,
      removed: record.quantity == 0.0,
    };

    if outcome.removed {
      self.products.remove(product_id);
      info!(product_id, sold = quantity, "sale drained record; product removed");
    } else {
      info!(
        product_id,
        sold = quantity,
        remaining = outcome.remaining,
        "sale recorded"
      );
    }
    Ok(outcome)
  }

  pub fn get(&self, product_id: &str) -> Option<&ProductRecord> {
    self.products.get(product_id)
  }

  /// Records in sorted product-id order.
  pub fn products(&self) -> impl Iterator<Item = (&str, &ProductRecord)> {
    self.products.iter().map(|(id, record)| (id.as_str(), record))
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }

  /// Aggregate value of all stock on hand.
  pub fn total_value(&self) -> f64 {
    self.products.values().map(ProductRecord::stock_value).sum()
  }
}

// Purchase and sale quantities validate identically: a zero or negative
// purchase would silently corrupt the stock level.
fn validate_quantity(value: f64) -> LedgerResult<()> {
  if !value.is_finite() || value <= 0.0 {
    return Err(LedgerError::invalid(
      "quantity",
      format!("must be a finite number greater than zero, got {}", value),
    ));
  }
  Ok(())
}

fn validate_price(value: f64) -> LedgerResult<()> {
  if !value.is_finite() || value < 0.0 {
    return Err(LedgerError::invalid(
      "price",
      format!("must be a finite non-negative number, got {}", value),
    ));
  }
  Ok(())
}
