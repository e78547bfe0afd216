// src/lib.rs

//! Stockbook: a small file-backed inventory ledger.
//!
//! Stockbook owns the in-memory mapping of product records and the rules for
//! mutating it:
//!  - Purchases increase a product's quantity, creating the record on first
//!    sight of an unknown product id.
//!  - Sales decrease a product's quantity and remove the record when it
//!    drains to exactly zero.
//!  - Quantities never go negative; a sale that would overdraw the stock is
//!    rejected before any mutation.
//!  - The whole book round-trips through a flat JSON file, one serialized
//!    object keyed by product id.
//!
//! The crate deliberately contains no I/O surface beyond the flat file: the
//! console and HTTP adapters live in the application crate and call into the
//! same [`Ledger`] operations.

pub mod error;
pub mod input;
pub mod ledger;
pub mod record;
pub mod shared;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{LedgerError, LedgerResult};
pub use crate::input::{parse_price, parse_quantity};
pub use crate::ledger::{Ledger, NewProduct, PurchaseOutcome, SaleOutcome};
pub use crate::record::ProductRecord;
pub use crate::shared::SharedLedger;
pub use crate::store::FlatFileStore;
