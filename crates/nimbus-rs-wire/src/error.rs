// crates/nimbus-rs-wire/src/error.rs

use std::fmt;
use std::io;

/// Errors that can occur while decoding or building a wire document.
#[derive(Debug)]
pub enum WireError {
    /// No node exists at the given path, at any level of the path.
    AbsentField { path: String },

    /// A node exists at the path but its text is not a base-10 integer.
    NotAnInteger { path: String, raw: String },

    /// A node exists at the path but its text is neither `YES` nor `NO`.
    NotABoolean { path: String, raw: String },

    /// A timestamp field parsed as an integer but denotes an instant
    /// outside the representable date range.
    TimestampOutOfRange { path: String, raw: i64 },

    /// One occurrence of a repeating group failed to decode. The whole
    /// collection read is discarded; `index` identifies the bad occurrence.
    MalformedRecord {
        path: String,
        index: usize,
        cause: Box<WireError>,
    },

    /// The payload ended while the given tag was still open.
    UnclosedTag { tag: String },

    /// The payload used an entity reference outside the five predefined
    /// ones; the wire format declares no others.
    UnknownEntity { name: String },

    /// An error from the underlying `quick-xml` reader.
    XmlParsing(quick_xml::Error),

    /// An error from the underlying `quick-xml` writer (I/O into the
    /// output buffer).
    XmlWriting(io::Error),

    /// `render` was handed a document with no root tag.
    EmptyDocument,
}

impl From<quick_xml::Error> for WireError {
    fn from(e: quick_xml::Error) -> Self {
        WireError::XmlParsing(e)
    }
}

impl From<io::Error> for WireError {
    fn from(e: io::Error) -> Self {
        WireError::XmlWriting(e)
    }
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::AbsentField { path } => {
                write!(f, "no field at path: {}", path)
            }
            WireError::NotAnInteger { path, raw } => {
                write!(f, "field at path {} is not an integer: {:?}", path, raw)
            }
            WireError::NotABoolean { path, raw } => {
                write!(f, "field at path {} is not YES/NO: {:?}", path, raw)
            }
            WireError::TimestampOutOfRange { path, raw } => {
                write!(f, "timestamp at path {} is out of range: {}", path, raw)
            }
            WireError::MalformedRecord { path, index, cause } => {
                write!(f, "malformed record at {}[{}]: {}", path, index, cause)
            }
            WireError::UnclosedTag { tag } => {
                write!(f, "payload ended inside <{}>", tag)
            }
            WireError::UnknownEntity { name } => {
                write!(f, "unknown entity reference: &{};", name)
            }
            WireError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            WireError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            WireError::EmptyDocument => write!(f, "document has no root tag"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::MalformedRecord { cause, .. } => Some(&**cause),
            WireError::XmlParsing(e) => Some(e),
            WireError::XmlWriting(e) => Some(e),
            _ => None,
        }
    }
}
