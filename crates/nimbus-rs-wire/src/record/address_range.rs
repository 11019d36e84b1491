// crates/nimbus-rs-wire/src/record/address_range.rs

//! One address range of a virtual network, as listed under `AR_POOL`
//! (one `AR` occurrence per range).

use super::{int_or, opt_text};
use crate::accessor;
use crate::document::Element;
use crate::error::WireError;
use crate::record::Lease;

/// One address range of a virtual network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRange {
    pub ar_id: i64,
    /// Range kind: `IP4`, `IP6`, `IP4_6` or `ETHER`.
    pub ar_type: String,
    pub size: i64,
    /// First IP of the range; `ETHER` ranges carry none.
    pub ip: Option<String>,
    /// First MAC of the range.
    pub mac: Option<String>,
    pub used_leases: i64,
    /// Leases currently handed out from this range.
    pub leases: Vec<Lease>,
}

impl AddressRange {
    /// Decodes one `AR` occurrence. `AR_ID`, `TYPE` and `SIZE` are
    /// mandatory; a bad lease inside the range fails the range.
    pub fn decode(el: &Element) -> Result<Self, WireError> {
        Ok(AddressRange {
            ar_id: accessor::int(el, "AR_ID")?,
            ar_type: accessor::text(el, "TYPE")?.to_owned(),
            size: accessor::int(el, "SIZE")?,
            ip: opt_text(el, "IP"),
            mac: opt_text(el, "MAC"),
            used_leases: int_or(el, "USED_LEASES", 0)?,
            leases: Lease::decode_all(el)?,
        })
    }

    /// Decodes every address range of a virtual-network document.
    pub fn decode_all(vnet: &Element) -> Result<Vec<AddressRange>, WireError> {
        accessor::records(vnet, "AR_POOL", "AR", Self::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::AddressRange;
    use crate::error::WireError;
    use crate::parser::parse_document;

    const VNET: &str = "<VNET><AR_POOL>\
        <AR><AR_ID>0</AR_ID><TYPE>IP4</TYPE><SIZE>128</SIZE>\
        <IP>192.168.10.1</IP><MAC>02:00:c0:a8:0a:01</MAC>\
        <USED_LEASES>1</USED_LEASES>\
        <LEASES><LEASE><IP>192.168.10.3</IP>\
        <MAC>02:00:c0:a8:0a:03</MAC><VM>12</VM></LEASE></LEASES></AR>\
        <AR><AR_ID>1</AR_ID><TYPE>ETHER</TYPE><SIZE>16</SIZE>\
        <MAC>02:00:11:22:33:44</MAC></AR>\
        </AR_POOL></VNET>";

    #[test]
    fn test_decode_all() {
        let doc = parse_document(VNET).unwrap();
        let ranges = AddressRange::decode_all(doc.root()).unwrap();
        assert_eq!(ranges.len(), 2);

        assert_eq!(ranges[0].ar_type, "IP4");
        assert_eq!(ranges[0].ip.as_deref(), Some("192.168.10.1"));
        assert_eq!(ranges[0].leases.len(), 1);
        assert_eq!(ranges[0].leases[0].vm, Some(12));

        // Ether range: no IP, no leases yet.
        assert_eq!(ranges[1].ip, None);
        assert_eq!(ranges[1].used_leases, 0);
        assert!(ranges[1].leases.is_empty());
    }

    #[test]
    fn test_corrupt_lease_count_fails_range() {
        let doc = parse_document(
            "<VNET><AR_POOL><AR><AR_ID>0</AR_ID><TYPE>IP4</TYPE><SIZE>8</SIZE>\
             <USED_LEASES>?</USED_LEASES></AR></AR_POOL></VNET>",
        )
        .unwrap();
        assert!(matches!(
            AddressRange::decode_all(doc.root()),
            Err(WireError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_type_fails_range() {
        let doc = parse_document(
            "<VNET><AR_POOL><AR><AR_ID>0</AR_ID><SIZE>8</SIZE></AR></AR_POOL></VNET>",
        )
        .unwrap();
        assert!(matches!(
            AddressRange::decode_all(doc.root()),
            Err(WireError::MalformedRecord { index: 0, .. })
        ));
    }
}
