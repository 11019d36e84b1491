// crates/nimbus-rs-wire/src/record/mod.rs

//! Fixed-shape nested records decoded from wire documents.
//!
//! Each submodule owns one record kind (one permission triple, one PCI
//! device, one lease, ...) occurring once per repeated container occurrence.
//! Decoding a record requires all of its mandatory fields to resolve, or the
//! whole record decode fails. The few documented-optional fields default
//! individually when absent; malformed text still fails the record, optional
//! only waives presence, never well-formedness.

use crate::accessor;
use crate::document::Element;
use crate::error::WireError;
use chrono::{DateTime, Utc};

mod address_range;
mod history;
mod lease;
mod pci;
mod permissions;
mod snapshot;

pub use address_range::AddressRange;
pub use history::HistoryEntry;
pub use lease::Lease;
pub use pci::PciDevice;
pub use permissions::{PermissionBits, Permissions};
pub use snapshot::Snapshot;

// --- Optional-field helpers ---
//
// Absence decodes to the field's documented default; every other decode
// failure propagates. Mandatory fields never go through these.

/// Optional text field; absent or empty decodes to `None`.
fn opt_text(el: &Element, path: &str) -> Option<String> {
    accessor::text(el, path)
        .ok()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Optional integer field with an explicit default for absence.
fn int_or(el: &Element, path: &str, default: i64) -> Result<i64, WireError> {
    match accessor::int(el, path) {
        Ok(v) => Ok(v),
        Err(WireError::AbsentField { .. }) => Ok(default),
        Err(e) => Err(e),
    }
}

/// Optional resource-id field; absent or the `-1` "none" sentinel decode
/// to `None`.
fn opt_id(el: &Element, path: &str) -> Result<Option<i64>, WireError> {
    match accessor::int(el, path) {
        Ok(id) if id >= 0 => Ok(Some(id)),
        Ok(_) => Ok(None),
        Err(WireError::AbsentField { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Optional `YES`/`NO` flag with an explicit default for absence.
fn yes_no_or(el: &Element, path: &str, default: bool) -> Result<bool, WireError> {
    match accessor::yes_no(el, path) {
        Ok(v) => Ok(v),
        Err(WireError::AbsentField { .. }) => Ok(default),
        Err(e) => Err(e),
    }
}

/// Optional sentinel timestamp; absence decodes like the sentinel.
fn opt_timestamp(
    el: &Element,
    path: &str,
    sentinel: i64,
) -> Result<Option<DateTime<Utc>>, WireError> {
    match accessor::timestamp(el, path, sentinel) {
        Ok(v) => Ok(v),
        Err(WireError::AbsentField { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
