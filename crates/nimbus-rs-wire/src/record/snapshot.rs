// crates/nimbus-rs-wire/src/record/snapshot.rs

//! One image snapshot, as listed under an image's `SNAPSHOTS` block.

use super::{int_or, opt_text, opt_timestamp, yes_no_or};
use crate::accessor;
use crate::document::Element;
use crate::error::WireError;
use chrono::{DateTime, Utc};

/// One snapshot of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub id: i64,
    /// Snapshots taken without a label carry no `NAME` leaf.
    pub name: Option<String>,
    /// Size in MB.
    pub size: i64,
    /// Parent snapshot id, `-1` for a root snapshot.
    pub parent: i64,
    /// `None` until the snapshot has been taken (`DATE` of `0`).
    pub date: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Snapshot {
    /// Decodes one `SNAPSHOT` occurrence. `ID` and `SIZE` are mandatory;
    /// the rest default when absent but still fail the record when corrupt.
    pub fn decode(el: &Element) -> Result<Self, WireError> {
        Ok(Snapshot {
            id: accessor::int(el, "ID")?,
            name: opt_text(el, "NAME"),
            size: accessor::int(el, "SIZE")?,
            parent: int_or(el, "PARENT", -1)?,
            date: opt_timestamp(el, "DATE", 0)?,
            active: yes_no_or(el, "ACTIVE", false)?,
        })
    }

    /// Decodes every snapshot of an image document.
    pub fn decode_all(image: &Element) -> Result<Vec<Snapshot>, WireError> {
        accessor::records(image, "SNAPSHOTS", "SNAPSHOT", Self::decode)
    }
}
