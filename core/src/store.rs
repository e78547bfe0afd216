// core/src/store.rs

//! Flat-file persistence: the whole inventory as one pretty-printed JSON
//! object, read and written in full.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;

/// A file-backed store for the inventory. Every `save` overwrites the whole
/// file; every `load` reads it back in full.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
  path: PathBuf,
}

impl FlatFileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    FlatFileStore { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Loads the inventory from the backing file.
  ///
  /// An absent file, an unreadable file, or malformed JSON all yield an
  /// empty ledger rather than an error: a broken store must never prevent
  /// the application from starting. The malformed case is logged.
  pub fn load(&self) -> Ledger {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "inventory file not found; starting empty");
        return Ledger::new();
      }
      Err(err) => {
        warn!(path = %self.path.display(), error = %err, "could not read inventory file; starting empty");
        return Ledger::new();
      }
    };

    match serde_json::from_str::<Ledger>(&raw) {
      Ok(ledger) => {
        debug!(path = %self.path.display(), products = ledger.len(), "inventory loaded");
        ledger
      }
      Err(err) => {
        warn!(path = %self.path.display(), error = %err, "malformed inventory file; starting empty");
        Ledger::new()
      }
    }
  }

  /// Writes the current inventory to the backing file, replacing its whole
  /// contents.
  ///
  /// The write lands in a sibling temp file first and is renamed over the
  /// target, so a crash mid-write cannot leave a truncated store behind.
  pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
    let encoded = serde_json::to_string_pretty(ledger)?;

    let tmp_path = self.path.with_extension("json.tmp");
    fs::write(&tmp_path, encoded.as_bytes()).map_err(|source| LedgerError::Store {
      path: tmp_path.clone(),
      source,
    })?;
    fs::rename(&tmp_path, &self.path).map_err(|source| LedgerError::Store {
      path: self.path.clone(),
      source,
    })?;

    debug!(path = %self.path.display(), products = ledger.len(), "inventory saved");
    Ok(())
  }
}
