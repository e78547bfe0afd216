// tests/sale_tests.rs
mod common;

use common::*;
use stockbook::{Ledger, LedgerError};

#[test]
fn partial_sale_decrements_quantity() {
  setup_tracing();
  let mut ledger = seeded_ledger();

  let outcome = ledger.record_sale("P1", 4.0).unwrap();
  assert_eq!(outcome.quantity, 4.0);
  assert_eq!(outcome.sale_value, 10.0);
  assert_eq!(outcome.remaining, 6.0);
  assert!(!outcome.removed);
  assert_eq!(outcome.to_string(), "Sold: 4 kg of Rice for $10.00");

  assert_eq!(ledger.get("P1").unwrap().quantity, 6.0);
}

#[test]
fn draining_sale_removes_the_record() {
  setup_tracing();
  let mut ledger = Ledger::new();
  ledger.record_purchase("P1", Some(rice()), 10.0).unwrap();
  ledger.record_purchase("P1", None, 5.0).unwrap();

  // Selling the full 15 kg at 2.5/kg is worth 37.50 and drains the record.
  let outcome = ledger.record_sale("P1", 15.0).unwrap();
  assert_eq!(outcome.sale_value, 37.5);
  assert_eq!(outcome.remaining, 0.0);
  assert!(outcome.removed);
  assert_eq!(
    outcome.to_string(),
    "Sold: 15 kg of Rice for $37.50 (product removed - quantity reached 0)"
  );

  assert!(ledger.get("P1").is_none());
  assert!(ledger.is_empty());
}

#[test]
fn overdraw_is_rejected_and_inventory_unchanged() {
  setup_tracing();
  let mut ledger = seeded_ledger();
  let before = ledger.clone();

  let err = ledger.record_sale("P1", 10.5).unwrap_err();
  match err {
    LedgerError::InsufficientStock {
      product_id,
      requested,
      available,
    } => {
      assert_eq!(product_id, "P1");
      assert_eq!(requested, 10.5);
      assert_eq!(available, 10.0);
    }
    other => panic!("expected InsufficientStock, got {:?}", other),
  }
  assert_eq!(ledger, before);
}

#[test]
fn non_positive_sale_quantity_is_rejected() {
  setup_tracing();
  let mut ledger = seeded_ledger();
  let before = ledger.clone();

  for bad in [0.0, -1.0, f64::NAN] {
    let err = ledger.record_sale("P1", bad).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidInput { .. }), "quantity {:?}", bad);
  }
  assert_eq!(ledger, before);
}

#[test]
fn sale_of_unknown_product_reports_not_found() {
  setup_tracing();
  let mut ledger = Ledger::new();

  let err = ledger.record_sale("P2", 1.0).unwrap_err();
  match err {
    LedgerError::NotFound { product_id } => assert_eq!(product_id, "P2"),
    other => panic!("expected NotFound, got {:?}", other),
  }
  assert!(ledger.is_empty());
}

#[test]
fn selling_whole_stock_exactly_hits_zero() {
  setup_tracing();
  let mut ledger = seeded_ledger();

  // The removal check compares the decremented stored value against zero, so
  // selling exactly what is on hand always removes the record, fractional
  // quantities included.
  ledger.record_sale("P1", 3.3).unwrap();
  let remaining = ledger.get("P1").unwrap().quantity;
  let outcome = ledger.record_sale("P1", remaining).unwrap();
  assert!(outcome.removed);
  assert!(ledger.get("P1").is_none());
}
