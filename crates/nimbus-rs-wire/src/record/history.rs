// crates/nimbus-rs-wire/src/record/history.rs

//! One placement/history entry of a virtual machine, as listed under
//! `HISTORY_RECORDS` (one `HISTORY` occurrence per placement).

use super::int_or;
use crate::accessor;
use crate::document::Element;
use crate::error::WireError;
use chrono::{DateTime, Utc};

/// One history entry of a VM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    pub sequence: i64,
    pub hostname: String,
    pub datastore_id: i64,
    /// Numeric action code; `0` is "none".
    pub action: i64,
    /// `None` while the placement has not started/ended (`0` on the wire).
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl HistoryEntry {
    /// Decodes one `HISTORY` occurrence. `SEQ`, `HOSTNAME` and `DS_ID` are
    /// mandatory.
    pub fn decode(el: &Element) -> Result<Self, WireError> {
        Ok(HistoryEntry {
            sequence: accessor::int(el, "SEQ")?,
            hostname: accessor::text(el, "HOSTNAME")?.to_owned(),
            datastore_id: accessor::int(el, "DS_ID")?,
            action: int_or(el, "ACTION", 0)?,
            start_time: accessor::timestamp(el, "STIME", 0)?,
            end_time: accessor::timestamp(el, "ETIME", 0)?,
        })
    }

    /// Decodes the full placement history of a VM document.
    pub fn decode_all(vm: &Element) -> Result<Vec<HistoryEntry>, WireError> {
        accessor::records(vm, "HISTORY_RECORDS", "HISTORY", Self::decode)
    }
}
