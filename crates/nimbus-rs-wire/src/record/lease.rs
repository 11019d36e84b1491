// crates/nimbus-rs-wire/src/record/lease.rs

//! One handed-out lease inside an address range's `LEASES` block.

use super::{opt_id, opt_text};
use crate::accessor;
use crate::document::Element;
use crate::error::WireError;

/// One lease of an address range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lease {
    /// Leased IP; `ETHER` ranges lease MAC-only.
    pub ip: Option<String>,
    pub mac: String,
    /// VM holding the lease, `None` for a hold (`VM` of `-1`).
    pub vm: Option<i64>,
}

impl Lease {
    /// Decodes one `LEASE` occurrence. Only `MAC` is mandatory.
    pub fn decode(el: &Element) -> Result<Self, WireError> {
        Ok(Lease {
            ip: opt_text(el, "IP"),
            mac: accessor::text(el, "MAC")?.to_owned(),
            vm: opt_id(el, "VM")?,
        })
    }

    /// Decodes the `LEASES` block of one address range.
    pub fn decode_all(ar: &Element) -> Result<Vec<Lease>, WireError> {
        accessor::records(ar, "LEASES", "LEASE", Self::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::Lease;
    use crate::error::WireError;
    use crate::parser::parse_document;

    #[test]
    fn test_decode_hold_and_assignment() {
        let doc = parse_document(
            "<AR><LEASES>\
             <LEASE><IP>10.0.0.5</IP><MAC>02:00:0a:00:00:05</MAC><VM>3</VM></LEASE>\
             <LEASE><IP>10.0.0.6</IP><MAC>02:00:0a:00:00:06</MAC><VM>-1</VM></LEASE>\
             </LEASES></AR>",
        )
        .unwrap();
        let leases = Lease::decode_all(doc.root()).unwrap();
        assert_eq!(leases[0].vm, Some(3));
        assert_eq!(leases[1].vm, None);
    }

    #[test]
    fn test_corrupt_vm_id_fails_lease() {
        let doc = parse_document(
            "<AR><LEASES><LEASE><MAC>02:00:0a:00:00:05</MAC><VM>oops</VM></LEASE></LEASES></AR>",
        )
        .unwrap();
        assert!(matches!(
            Lease::decode_all(doc.root()),
            Err(WireError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_missing_mac_fails_lease() {
        let doc =
            parse_document("<AR><LEASES><LEASE><IP>10.0.0.5</IP></LEASE></LEASES></AR>").unwrap();
        assert!(matches!(
            Lease::decode_all(doc.root()),
            Err(WireError::MalformedRecord { index: 0, .. })
        ));
    }
}
