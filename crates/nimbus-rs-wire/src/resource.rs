// crates/nimbus-rs-wire/src/resource.rs

//! The contract surface consumed by per-entity wrapper code.
//!
//! [`Resource`] is a borrowed capability over a parsed document node, not a
//! base struct for wrappers to embed: entity types hold one and delegate.
//! Instead of a hand-written getter per field, each entity owns a small
//! declarative [`FieldSpec`] table that the generic [`Resource::field`]
//! accessor consumes. [`Blueprint`] is the outbound counterpart.

use crate::accessor;
use crate::document::{Document, Element};
use crate::error::WireError;
use crate::record::Permissions;
use chrono::{DateTime, Utc};

// --- Inbound: the resource capability ---

/// Read-only, borrowed access to one resource document.
///
/// All reads re-walk the underlying tree; nothing is cached, and the
/// document must not be mutated while a `Resource` borrows it.
#[derive(Debug, Clone, Copy)]
pub struct Resource<'a> {
    node: &'a Element,
}

impl<'a> Resource<'a> {
    pub fn new(node: &'a Element) -> Self {
        Resource { node }
    }

    pub fn from_document(doc: &'a Document) -> Self {
        Resource { node: doc.root() }
    }

    /// The resource-type tag this capability is rooted at.
    pub fn kind(&self) -> &'a str {
        &self.node.tag
    }

    pub fn node(&self) -> &'a Element {
        self.node
    }

    /// Every Nimbus resource carries an `ID` leaf.
    pub fn id(&self) -> Result<i64, WireError> {
        accessor::int(self.node, "ID")
    }

    /// Every Nimbus resource carries a `NAME` leaf.
    pub fn name(&self) -> Result<&'a str, WireError> {
        accessor::text(self.node, "NAME")
    }

    pub fn text(&self, path: &str) -> Result<&'a str, WireError> {
        accessor::text(self.node, path)
    }

    pub fn int(&self, path: &str) -> Result<i64, WireError> {
        accessor::int(self.node, path)
    }

    pub fn bool_flag(&self, path: &str) -> Result<bool, WireError> {
        accessor::bool_flag(self.node, path)
    }

    pub fn yes_no(&self, path: &str) -> Result<bool, WireError> {
        accessor::yes_no(self.node, path)
    }

    pub fn id_array(&self, path: &str) -> Result<Vec<i64>, WireError> {
        accessor::id_array(self.node, path)
    }

    pub fn timestamp(&self, path: &str, sentinel: i64) -> Result<Option<DateTime<Utc>>, WireError> {
        accessor::timestamp(self.node, path, sentinel)
    }

    pub fn records<T, F>(
        &self,
        container_path: &str,
        item_tag: &str,
        decode_one: F,
    ) -> Result<Vec<T>, WireError>
    where
        F: Fn(&Element) -> Result<T, WireError>,
    {
        accessor::records(self.node, container_path, item_tag, decode_one)
    }

    /// The resource's `PERMISSIONS` block.
    pub fn permissions(&self) -> Result<Permissions, WireError> {
        Permissions::decode(self.node)
    }

    /// Resolves one declarative field spec against this resource.
    pub fn field(&self, spec: &FieldSpec) -> Result<FieldValue, WireError> {
        match spec.kind {
            FieldKind::Text => self.text(spec.path).map(|s| FieldValue::Text(s.to_owned())),
            FieldKind::Int => self.int(spec.path).map(FieldValue::Int),
            FieldKind::BoolFlag => self.bool_flag(spec.path).map(FieldValue::Bool),
            FieldKind::YesNo => self.yes_no(spec.path).map(FieldValue::Bool),
            FieldKind::Timestamp { sentinel } => {
                self.timestamp(spec.path, sentinel).map(FieldValue::Timestamp)
            }
            FieldKind::IdArray => self.id_array(spec.path).map(FieldValue::IdList),
        }
    }
}

// --- Declarative field tables ---

/// How one field's wire text decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    /// Integer flag, `1` is true.
    BoolFlag,
    /// Literal `YES`/`NO` feature flag.
    YesNo,
    /// Epoch seconds with a field-specific "not set" sentinel.
    Timestamp { sentinel: i64 },
    /// Container of repeated `ID` leaves.
    IdArray,
}

/// One entry of an entity's field table: a caller-facing name bound to a
/// fixed, versioned wire path and its decoding.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, path: &'static str, kind: FieldKind) -> Self {
        FieldSpec { name, path, kind }
    }
}

/// A decoded field value, shaped by the entry's [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Timestamp(Option<DateTime<Utc>>),
    IdList(Vec<i64>),
}

/// Looks a field up by caller-facing name in an entity table.
pub fn field_spec<'t>(table: &'t [FieldSpec], name: &str) -> Option<&'t FieldSpec> {
    table.iter().find(|spec| spec.name == name)
}

use FieldKind::{BoolFlag, IdArray, Int, Text, YesNo};

/// Field table of a virtual machine document.
pub const VM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ID", "ID", Int),
    FieldSpec::new("NAME", "NAME", Text),
    FieldSpec::new("STATE", "STATE", Int),
    FieldSpec::new("LCM_STATE", "LCM_STATE", Int),
    FieldSpec::new("STIME", "STIME", FieldKind::Timestamp { sentinel: 0 }),
    FieldSpec::new("ETIME", "ETIME", FieldKind::Timestamp { sentinel: 0 }),
    FieldSpec::new("MEMORY", "TEMPLATE/MEMORY", Int),
    FieldSpec::new("CPU", "TEMPLATE/CPU", Text),
    FieldSpec::new("VCPU", "TEMPLATE/VCPU", Int),
    FieldSpec::new("ACPI", "TEMPLATE/FEATURES/ACPI", YesNo),
];

/// Field table of a host document.
pub const HOST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ID", "ID", Int),
    FieldSpec::new("NAME", "NAME", Text),
    FieldSpec::new("STATE", "STATE", Int),
    FieldSpec::new("CLUSTER_ID", "CLUSTER_ID", Int),
    FieldSpec::new("TOTAL_MEM", "HOST_SHARE/TOTAL_MEM", Int),
    FieldSpec::new("DISK_USAGE", "HOST_SHARE/DISK_USAGE", Int),
    FieldSpec::new("VMS", "VMS", IdArray),
];

/// Field table of an image document.
pub const IMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ID", "ID", Int),
    FieldSpec::new("NAME", "NAME", Text),
    FieldSpec::new("STATE", "STATE", Int),
    FieldSpec::new("SIZE", "SIZE", Int),
    FieldSpec::new("PERSISTENT", "PERSISTENT", BoolFlag),
    FieldSpec::new("REGTIME", "REGTIME", FieldKind::Timestamp { sentinel: 0 }),
    FieldSpec::new("DATASTORE_ID", "DATASTORE_ID", Int),
    FieldSpec::new("VMS", "VMS", IdArray),
];

/// Field table of a virtual-network document.
pub const VNET_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ID", "ID", Int),
    FieldSpec::new("NAME", "NAME", Text),
    FieldSpec::new("BRIDGE", "BRIDGE", Text),
    FieldSpec::new("VN_MAD", "VN_MAD", Text),
    FieldSpec::new("USED_LEASES", "USED_LEASES", Int),
];

// --- Outbound: the blueprint ---

/// Typed-setter surface over an outbound [`Document`].
///
/// Owned exclusively by one caller until handed off; composition happens by
/// consuming child blueprints through [`Blueprint::merge`].
#[derive(Debug, Clone)]
pub struct Blueprint {
    doc: Document,
}

impl Blueprint {
    /// Starts an empty blueprint rooted at the given resource-type tag.
    pub fn new(kind: impl Into<String>) -> Self {
        Blueprint {
            doc: Document::new(kind),
        }
    }

    pub fn set_text(&mut self, tag: &str, value: impl Into<String>) {
        self.doc.set(tag, value);
    }

    pub fn set_int(&mut self, tag: &str, value: i64) {
        self.doc.set(tag, value.to_string());
    }

    /// Writes the integer flag encoding (`1`/`0`).
    pub fn set_bool_flag(&mut self, tag: &str, value: bool) {
        self.doc.set(tag, if value { "1" } else { "0" });
    }

    /// Writes the feature-flag encoding (`YES`/`NO`).
    pub fn set_yes_no(&mut self, tag: &str, value: bool) {
        self.doc.set(tag, if value { "YES" } else { "NO" });
    }

    /// Embeds a fully-built child blueprint as a subtree, e.g. a disk
    /// inside a VM template. Repeat to build repeating groups.
    pub fn merge(&mut self, child: Blueprint) {
        self.doc.merge(child.doc);
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Renders the textual form a transport transmits.
    pub fn render(&self) -> Result<String, WireError> {
        self.doc.render()
    }
}
