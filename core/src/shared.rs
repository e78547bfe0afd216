// core/src/shared.rs

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use crate::ledger::Ledger;

/// A process-wide handle to the ledger, providing shared ownership and
/// interior mutability via `parking_lot::RwLock`.
///
/// One `SharedLedger` is constructed at startup and cloned into every
/// adapter. Holding a single write guard across a mutate-then-persist cycle
/// serializes concurrent callers, so two HTTP requests cannot interleave
/// their read-modify-write on the store.
///
/// IMPORTANT: Lock guards obtained from this handle are blocking and MUST
/// NOT be held across `.await` suspension points in asynchronous code.
#[derive(Debug, Default)]
pub struct SharedLedger(Arc<RwLock<Ledger>>);

impl SharedLedger {
  pub fn new(ledger: Ledger) -> Self {
    SharedLedger(Arc::new(RwLock::new(ledger)))
  }

  /// Acquires a read lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Ledger> {
    self.0.read()
  }

  /// Acquires a write lock.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
    self.0.write()
  }
}

impl Clone for SharedLedger {
  fn clone(&self) -> Self {
    SharedLedger(Arc::clone(&self.0))
  }
}
