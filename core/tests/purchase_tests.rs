// tests/purchase_tests.rs
mod common;

use common::*;
use stockbook::{Ledger, LedgerError, NewProduct, PurchaseOutcome};

#[test]
fn first_purchase_creates_the_record() {
  setup_tracing();
  let mut ledger = Ledger::new();

  let outcome = ledger.record_purchase("P1", Some(rice()), 10.0).unwrap();
  assert_eq!(
    outcome,
    PurchaseOutcome::Added {
      name: "Rice".to_string()
    }
  );
  assert_eq!(outcome.to_string(), "Added new product: Rice");

  let record = ledger.get("P1").expect("record should exist");
  assert_eq!(record.name, "Rice");
  assert_eq!(record.unit, "kg");
  assert_eq!(record.price, 2.5);
  assert_eq!(record.quantity, 10.0);
}

#[test]
fn repeat_purchases_accumulate_quantity() {
  setup_tracing();
  let mut ledger = Ledger::new();
  ledger.record_purchase("P1", Some(rice()), 10.0).unwrap();

  let outcome = ledger.record_purchase("P1", None, 5.0).unwrap();
  assert_eq!(
    outcome,
    PurchaseOutcome::Restocked {
      name: "Rice".to_string(),
      unit: "kg".to_string(),
      new_quantity: 15.0,
    }
  );
  assert_eq!(ledger.get("P1").unwrap().quantity, 15.0);

  // Sum over an arbitrary sequence of purchases.
  for q in [1.0, 2.5, 0.5] {
    ledger.record_purchase("P1", None, q).unwrap();
  }
  assert_eq!(ledger.get("P1").unwrap().quantity, 19.0);
}

#[test]
fn later_purchases_never_touch_name_unit_or_price() {
  setup_tracing();
  let mut ledger = Ledger::new();
  ledger.record_purchase("P1", Some(rice()), 10.0).unwrap();

  // Conflicting details on a restock are ignored, not applied.
  let conflicting = NewProduct {
    name: "Basmati".to_string(),
    unit: "bags".to_string(),
    price: 9.99,
  };
  ledger.record_purchase("P1", Some(conflicting), 2.0).unwrap();

  let record = ledger.get("P1").unwrap();
  assert_eq!(record.name, "Rice");
  assert_eq!(record.unit, "kg");
  assert_eq!(record.price, 2.5);
  assert_eq!(record.quantity, 12.0);
}

#[test]
fn new_product_requires_details() {
  setup_tracing();
  let mut ledger = Ledger::new();

  let err = ledger.record_purchase("P9", None, 3.0).unwrap_err();
  assert!(matches!(err, LedgerError::InvalidInput { .. }));
  assert!(ledger.is_empty());
}

#[test]
fn non_positive_purchase_quantity_is_rejected() {
  setup_tracing();
  let mut ledger = seeded_ledger();

  for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
    let err = ledger.record_purchase("P1", None, bad).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidInput { .. }), "quantity {:?}", bad);
  }
  assert_eq!(ledger.get("P1").unwrap().quantity, 10.0);
}

#[test]
fn negative_price_on_first_purchase_is_rejected() {
  setup_tracing();
  let mut ledger = Ledger::new();

  let details = NewProduct {
    name: "Rice".to_string(),
    unit: "kg".to_string(),
    price: -1.0,
  };
  let err = ledger.record_purchase("P1", Some(details), 10.0).unwrap_err();
  assert!(matches!(err, LedgerError::InvalidInput { .. }));
  assert!(ledger.get("P1").is_none());
}

#[test]
fn aggregates_reflect_the_inventory() {
  setup_tracing();
  let ledger = seeded_ledger();

  assert_eq!(ledger.len(), 2);
  // 10 kg rice at 2.5 plus 200 screws at 0.05.
  assert_eq!(ledger.total_value(), 25.0 + 10.0);

  let ids: Vec<&str> = ledger.products().map(|(id, _)| id).collect();
  assert_eq!(ids, vec!["P1", "P2"]);
}
