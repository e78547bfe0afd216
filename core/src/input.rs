// core/src/input.rs

//! Explicit parse-and-validate for numeric fields arriving as raw strings.
//!
//! Both adapters accept quantities and prices as text (form fields, console
//! prompts). Rather than best-effort casts, everything funnels through these
//! two helpers so an unparseable or out-of-range value always surfaces as a
//! typed [`LedgerError::InvalidInput`] naming the offending field.

use crate::error::{LedgerError, LedgerResult};

/// Parses a quantity field: must be a finite number strictly greater than
/// zero. Applies to purchases and sales alike.
pub fn parse_quantity(field: &'static str, raw: &str) -> LedgerResult<f64> {
  let value = parse_number(field, raw)?;
  if value <= 0.0 {
    return Err(LedgerError::invalid(field, format!("'{}' must be greater than zero", raw.trim())));
  }
  Ok(value)
}

/// Parses a price field: must be a finite number, zero allowed.
pub fn parse_price(field: &'static str, raw: &str) -> LedgerResult<f64> {
  let value = parse_number(field, raw)?;
  if value < 0.0 {
    return Err(LedgerError::invalid(field, format!("'{}' must not be negative", raw.trim())));
  }
  Ok(value)
}

fn parse_number(field: &'static str, raw: &str) -> LedgerResult<f64> {
  let trimmed = raw.trim();
  let value = trimmed
    .parse::<f64>()
    .map_err(|_| LedgerError::invalid(field, format!("'{}' is not a number", trimmed)))?;
  if !value.is_finite() {
    return Err(LedgerError::invalid(field, format!("'{}' is not a finite number", trimmed)));
  }
  Ok(value)
}
