// crates/nimbus-rs-wire/src/lib.rs

//! Bidirectional mapping between the Nimbus cloud API's XML wire documents
//! and typed in-memory values.
//!
//! The inbound half — the accessor engine — resolves fixed, slash-separated
//! paths against a parsed [`Document`] and decodes scalars, identifier
//! arrays and fixed-shape nested records with per-field error reporting.
//! The outbound half — the builder/blueprint engine — constructs a new
//! document from typed setters and composes sub-documents into nested
//! request payloads.
//!
//! Transport, sessions and retries live elsewhere: this crate only maps
//! between text and types.

// --- Crate Modules ---

pub mod accessor;
mod builder;
mod document;
mod enums;
mod error;
mod parser;
pub mod record;
mod resource;

// --- Public API Re-exports ---

pub use document::{Document, Element};
pub use enums::{DiskType, GraphicsType};
pub use error::WireError;
pub use parser::parse_document;
pub use resource::{
    Blueprint, FieldKind, FieldSpec, FieldValue, HOST_FIELDS, IMAGE_FIELDS, Resource, VM_FIELDS,
    VNET_FIELDS, field_spec,
};
