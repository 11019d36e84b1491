// crates/nimbus-rs-wire/src/record/pci.rs

//! One passthrough PCI device, as listed under a host's
//! `HOST_SHARE/PCI_DEVICES` block (one `PCI` occurrence per device).

use super::{opt_id, opt_text};
use crate::accessor;
use crate::document::Element;
use crate::error::WireError;

/// One PCI device of a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PciDevice {
    /// Full PCI address, e.g. `0000:02:00.0`.
    pub address: String,
    pub vendor: String,
    pub device: String,
    pub class: String,
    /// Bus/slot/function components; some monitor drivers omit them.
    pub bus: Option<String>,
    pub slot: Option<String>,
    pub function: Option<String>,
    /// VM currently holding the device, `None` when free.
    pub vm_id: Option<i64>,
}

impl PciDevice {
    /// Decodes one `PCI` occurrence. `ADDRESS`, `VENDOR`, `DEVICE` and
    /// `CLASS` are mandatory.
    pub fn decode(el: &Element) -> Result<Self, WireError> {
        Ok(PciDevice {
            address: accessor::text(el, "ADDRESS")?.to_owned(),
            vendor: accessor::text(el, "VENDOR")?.to_owned(),
            device: accessor::text(el, "DEVICE")?.to_owned(),
            class: accessor::text(el, "CLASS")?.to_owned(),
            bus: opt_text(el, "BUS"),
            slot: opt_text(el, "SLOT"),
            function: opt_text(el, "FUNCTION"),
            vm_id: opt_id(el, "VMID")?,
        })
    }

    /// Decodes every PCI device of a host document. Absent block decodes to
    /// an empty list; one bad device fails the whole read.
    pub fn decode_all(host: &Element) -> Result<Vec<PciDevice>, WireError> {
        accessor::records(host, "HOST_SHARE/PCI_DEVICES", "PCI", Self::decode)
    }
}
