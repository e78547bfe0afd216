// tests/common/mod.rs
#![allow(dead_code)] // Not every suite uses every fixture.

use stockbook::{Ledger, NewProduct};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Common Fixtures ---

pub fn rice() -> NewProduct {
  NewProduct {
    name: "Rice".to_string(),
    unit: "kg".to_string(),
    price: 2.5,
  }
}

pub fn screws() -> NewProduct {
  NewProduct {
    name: "Wood Screws".to_string(),
    unit: "pcs".to_string(),
    price: 0.05,
  }
}

/// A ledger holding 10 kg of rice (P1) and 200 screws (P2).
pub fn seeded_ledger() -> Ledger {
  let mut ledger = Ledger::new();
  ledger.record_purchase("P1", Some(rice()), 10.0).unwrap();
  ledger.record_purchase("P2", Some(screws()), 200.0).unwrap();
  ledger
}
