// crates/nimbus-rs-wire/src/enums.rs

//! Enumerated constants with their wire-format string literals.
//!
//! Each enum owns its bidirectional mapping: `as_wire` for building,
//! `from_wire` for decoding. The mappings are plain matches, immutable by
//! construction.

/// Disk backing kind of an image or VM disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskType {
    File,
    CdRom,
    Block,
    Rbd,
}

impl DiskType {
    pub fn as_wire(self) -> &'static str {
        match self {
            DiskType::File => "FILE",
            DiskType::CdRom => "CD_ROM",
            DiskType::Block => "BLOCK",
            DiskType::Rbd => "RBD",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "FILE" => Some(DiskType::File),
            "CD_ROM" => Some(DiskType::CdRom),
            "BLOCK" => Some(DiskType::Block),
            "RBD" => Some(DiskType::Rbd),
            _ => None,
        }
    }
}

/// Console graphics kind of a VM template's `GRAPHICS` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsType {
    Vnc,
    Sdl,
    Spice,
    None,
}

impl GraphicsType {
    pub fn as_wire(self) -> &'static str {
        match self {
            GraphicsType::Vnc => "VNC",
            GraphicsType::Sdl => "SDL",
            GraphicsType::Spice => "SPICE",
            GraphicsType::None => "NONE",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "VNC" => Some(GraphicsType::Vnc),
            "SDL" => Some(GraphicsType::Sdl),
            "SPICE" => Some(GraphicsType::Spice),
            "NONE" => Some(GraphicsType::None),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DiskType, GraphicsType};

    #[test]
    fn test_disk_type_round_trips() {
        for dt in [DiskType::File, DiskType::CdRom, DiskType::Block, DiskType::Rbd] {
            assert_eq!(DiskType::from_wire(dt.as_wire()), Some(dt));
        }
        assert_eq!(DiskType::from_wire("FLOPPY"), None);
    }

    #[test]
    fn test_graphics_type_round_trips() {
        for gt in [
            GraphicsType::Vnc,
            GraphicsType::Sdl,
            GraphicsType::Spice,
            GraphicsType::None,
        ] {
            assert_eq!(GraphicsType::from_wire(gt.as_wire()), Some(gt));
        }
        // Wire literals are case-sensitive like everything else.
        assert_eq!(GraphicsType::from_wire("vnc"), None);
    }
}
