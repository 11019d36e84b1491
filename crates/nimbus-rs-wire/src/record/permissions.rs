// crates/nimbus-rs-wire/src/record/permissions.rs

//! The `PERMISSIONS` block carried by every owned resource: one
//! use/manage/admin triple per subject class (owner, group, other), each
//! flag an integer leaf where `1` grants the capability.

use crate::accessor;
use crate::document::Element;
use crate::error::WireError;

/// One use/manage/admin capability triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionBits {
    pub use_: bool,
    pub manage: bool,
    pub admin: bool,
}

/// The full permission set of a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    pub owner: PermissionBits,
    pub group: PermissionBits,
    pub other: PermissionBits,
}

impl Permissions {
    /// Decodes the `PERMISSIONS` block of a resource.
    ///
    /// All nine flags are mandatory; any missing or non-integer leaf fails
    /// the whole decode.
    pub fn decode(node: &Element) -> Result<Self, WireError> {
        Ok(Permissions {
            owner: decode_bits(node, "OWNER")?,
            group: decode_bits(node, "GROUP")?,
            other: decode_bits(node, "OTHER")?,
        })
    }
}

fn decode_bits(node: &Element, subject: &str) -> Result<PermissionBits, WireError> {
    Ok(PermissionBits {
        use_: accessor::bool_flag(node, &format!("PERMISSIONS/{}_U", subject))?,
        manage: accessor::bool_flag(node, &format!("PERMISSIONS/{}_M", subject))?,
        admin: accessor::bool_flag(node, &format!("PERMISSIONS/{}_A", subject))?,
    })
}
