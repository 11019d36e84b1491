// crates/nimbus-rs-wire/src/accessor.rs

//! Path-typed reads over a parsed wire document.
//!
//! Every function resolves a fixed, slash-separated path relative to a node
//! and decodes the text found there. Absence and malformation are reported
//! as distinct [`WireError`] values so callers can tell "field missing" from
//! "field corrupt". All reads re-walk the path; nothing is cached.

use crate::document::Element;
use crate::error::WireError;
use chrono::{DateTime, Utc};

/// Returns the text of the first leaf matching `path`.
///
/// # Errors
/// [`WireError::AbsentField`] when no node exists at the path, regardless of
/// how many levels of the path are missing.
pub fn text<'a>(node: &'a Element, path: &str) -> Result<&'a str, WireError> {
    node.find(path)
        .map(|el| el.text.as_str())
        .ok_or_else(|| WireError::AbsentField { path: path.into() })
}

/// Reads the leaf at `path` as a base-10 integer.
///
/// # Errors
/// [`WireError::AbsentField`] when the path is missing,
/// [`WireError::NotAnInteger`] when text is present but unparseable.
pub fn int(node: &Element, path: &str) -> Result<i64, WireError> {
    let raw = text(node, path)?;
    raw.trim()
        .parse()
        .map_err(|_| WireError::NotAnInteger {
            path: path.into(),
            raw: raw.into(),
        })
}

/// Reads an integer-encoded flag: `1` is true, any other integer is false.
///
/// The wire format uses integer flags for almost every boolean field; the
/// exception is the `YES`/`NO` feature-flag family, decoded by [`yes_no`].
/// Literal `true`/`false` text is not accepted by either.
pub fn bool_flag(node: &Element, path: &str) -> Result<bool, WireError> {
    Ok(int(node, path)? == 1)
}

/// Reads a `YES`/`NO` feature flag.
///
/// Any third literal is surfaced as [`WireError::NotABoolean`] rather than
/// silently decoding to false, so a corrupt flag cannot disable a feature
/// unnoticed.
pub fn yes_no(node: &Element, path: &str) -> Result<bool, WireError> {
    let raw = text(node, path)?;
    match raw.trim() {
        "YES" => Ok(true),
        "NO" => Ok(false),
        _ => Err(WireError::NotABoolean {
            path: path.into(),
            raw: raw.into(),
        }),
    }
}

/// Reads a container of repeated `ID` leaves as an ordered integer list.
///
/// An absent container and a present-but-empty container are
/// indistinguishable: both decode to an empty list with no error. A present
/// container with any malformed `ID` child fails the whole read; partial
/// identifier lists are operationally dangerous (a silently dropped member
/// of a cluster list, for example), so no partial result is ever returned.
///
/// # Errors
/// [`WireError::MalformedRecord`] naming the index of the first bad `ID`.
pub fn id_array(node: &Element, path: &str) -> Result<Vec<i64>, WireError> {
    let container = match node.find(path) {
        Some(c) => c,
        None => return Ok(Vec::new()),
    };

    let mut ids = Vec::new();
    for (index, id_el) in container.children_named("ID").enumerate() {
        let id = id_el
            .text
            .trim()
            .parse()
            .map_err(|_| WireError::MalformedRecord {
                path: path.into(),
                index,
                cause: Box::new(WireError::NotAnInteger {
                    path: "ID".into(),
                    raw: id_el.text.clone(),
                }),
            })?;
        ids.push(id);
    }
    Ok(ids)
}

/// Enumerates all `item_tag` occurrences under `container_path`, decoding
/// each with `decode_one`.
///
/// Zero occurrences (or a wholly absent container) yield an empty list.
/// The first failing occurrence aborts the whole read with
/// [`WireError::MalformedRecord`] carrying its index.
pub fn records<T, F>(
    node: &Element,
    container_path: &str,
    item_tag: &str,
    decode_one: F,
) -> Result<Vec<T>, WireError>
where
    F: Fn(&Element) -> Result<T, WireError>,
{
    let container = match node.find(container_path) {
        Some(c) => c,
        None => return Ok(Vec::new()),
    };

    container
        .children_named(item_tag)
        .enumerate()
        .map(|(index, el)| {
            decode_one(el).map_err(|cause| WireError::MalformedRecord {
                path: container_path.into(),
                index,
                cause: Box::new(cause),
            })
        })
        .collect()
}

/// Reads an epoch-second timestamp, mapping the field's documented "not set"
/// sentinel to `None`.
///
/// Sentinels are field-specific: token expiries use `-1`, every other
/// timestamp field uses `0`. The sentinel must never leak through as the
/// instant it would otherwise denote, so the comparison happens on the raw
/// integer before any conversion.
///
/// # Errors
/// [`WireError::TimestampOutOfRange`] when the integer is valid but denotes
/// an instant `chrono` cannot represent.
pub fn timestamp(
    node: &Element,
    path: &str,
    sentinel: i64,
) -> Result<Option<DateTime<Utc>>, WireError> {
    let raw = int(node, path)?;
    if raw == sentinel {
        return Ok(None);
    }
    DateTime::from_timestamp(raw, 0)
        .map(Some)
        .ok_or_else(|| WireError::TimestampOutOfRange {
            path: path.into(),
            raw,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_text_absent_at_every_level() {
        let doc = parse_document("<VM><TEMPLATE/></VM>").unwrap();
        for path in ["NAME", "TEMPLATE/MEMORY", "TEMPLATE/DISK/SIZE"] {
            let err = text(doc.root(), path).unwrap_err();
            assert!(
                matches!(err, WireError::AbsentField { path: p } if p == path),
                "path {} did not report absence",
                path
            );
        }
    }

    #[test]
    fn test_int_distinguishes_absent_from_corrupt() {
        let doc = parse_document("<VM><MEMORY>banana</MEMORY></VM>").unwrap();
        assert!(matches!(
            int(doc.root(), "MEMORY"),
            Err(WireError::NotAnInteger { .. })
        ));
        assert!(matches!(
            int(doc.root(), "CPU"),
            Err(WireError::AbsentField { .. })
        ));
    }

    #[test]
    fn test_int_negative() {
        let doc = parse_document("<VM><VMID>-1</VMID></VM>").unwrap();
        assert_eq!(int(doc.root(), "VMID").unwrap(), -1);
    }

    #[test]
    fn test_bool_flag_one_is_true() {
        let doc = parse_document("<IMAGE><PERSISTENT>1</PERSISTENT><SHARED>0</SHARED></IMAGE>")
            .unwrap();
        assert!(bool_flag(doc.root(), "PERSISTENT").unwrap());
        assert!(!bool_flag(doc.root(), "SHARED").unwrap());
    }

    #[test]
    fn test_bool_flag_rejects_literals() {
        let doc = parse_document("<IMAGE><PERSISTENT>true</PERSISTENT></IMAGE>").unwrap();
        assert!(matches!(
            bool_flag(doc.root(), "PERSISTENT"),
            Err(WireError::NotAnInteger { .. })
        ));
    }

    #[test]
    fn test_yes_no_decoding() {
        let doc = parse_document(
            "<VM><TEMPLATE><FEATURES><ACPI>YES</ACPI><PAE>NO</PAE><APIC>maybe</APIC></FEATURES></TEMPLATE></VM>",
        )
        .unwrap();
        assert!(yes_no(doc.root(), "TEMPLATE/FEATURES/ACPI").unwrap());
        assert!(!yes_no(doc.root(), "TEMPLATE/FEATURES/PAE").unwrap());
        assert!(matches!(
            yes_no(doc.root(), "TEMPLATE/FEATURES/APIC"),
            Err(WireError::NotABoolean { .. })
        ));
    }

    #[test]
    fn test_id_array_absent_equals_empty() {
        let absent = parse_document("<HOST><NAME>h1</NAME></HOST>").unwrap();
        let empty = parse_document("<HOST><VMS/></HOST>").unwrap();
        assert_eq!(id_array(absent.root(), "VMS").unwrap(), Vec::<i64>::new());
        assert_eq!(id_array(empty.root(), "VMS").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_id_array_ordered() {
        let doc =
            parse_document("<HOST><VMS><ID>9</ID><ID>3</ID><ID>27</ID></VMS></HOST>").unwrap();
        assert_eq!(id_array(doc.root(), "VMS").unwrap(), vec![9, 3, 27]);
    }

    #[test]
    fn test_id_array_malformed_child_fails_whole_read() {
        let doc = parse_document("<HOST><VMS><ID>7</ID><ID>x</ID></VMS></HOST>").unwrap();
        let err = id_array(doc.root(), "VMS").unwrap_err();
        assert!(
            matches!(err, WireError::MalformedRecord { index: 1, .. }),
            "expected index 1, got {:?}",
            err
        );
    }

    #[test]
    fn test_records_empty_and_absent() {
        let decode = |el: &Element| text(el, "AR_ID").map(str::to_owned);
        let absent = parse_document("<VNET/>").unwrap();
        let empty = parse_document("<VNET><AR_POOL/></VNET>").unwrap();
        assert!(records(absent.root(), "AR_POOL", "AR", decode).unwrap().is_empty());
        assert!(records(empty.root(), "AR_POOL", "AR", decode).unwrap().is_empty());
    }

    #[test]
    fn test_records_failure_carries_index() {
        let doc = parse_document(
            "<VNET><AR_POOL><AR><AR_ID>0</AR_ID></AR><AR/></AR_POOL></VNET>",
        )
        .unwrap();
        let result = records(doc.root(), "AR_POOL", "AR", |el| int(el, "AR_ID"));
        assert!(matches!(
            result,
            Err(WireError::MalformedRecord { index: 1, .. })
        ));
    }

    #[test]
    fn test_timestamp_sentinel_is_none() {
        let doc = parse_document(
            "<VM><STIME>1700000000</STIME><ETIME>0</ETIME><EXPIRE>-1</EXPIRE></VM>",
        )
        .unwrap();
        let stime = timestamp(doc.root(), "STIME", 0).unwrap().unwrap();
        assert_eq!(stime.timestamp(), 1_700_000_000);
        assert_eq!(timestamp(doc.root(), "ETIME", 0).unwrap(), None);
        assert_eq!(timestamp(doc.root(), "EXPIRE", -1).unwrap(), None);
    }

    #[test]
    fn test_timestamp_unrepresentable_instant() {
        // The integer parses fine; the failure is the instant itself.
        let doc = parse_document(&format!("<VM><STIME>{}</STIME></VM>", i64::MAX)).unwrap();
        assert!(matches!(
            timestamp(doc.root(), "STIME", 0),
            Err(WireError::TimestampOutOfRange { raw, .. }) if raw == i64::MAX
        ));
    }

    #[test]
    fn test_timestamp_sentinel_is_field_specific() {
        // -1 is only "not set" where the field documents it; with a 0
        // sentinel it is a real (pre-epoch) instant.
        let doc = parse_document("<VM><STIME>-1</STIME></VM>").unwrap();
        let t = timestamp(doc.root(), "STIME", 0).unwrap().unwrap();
        assert_eq!(t.timestamp(), -1);
    }
}
