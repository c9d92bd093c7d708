//! Pointer relocation on top of the replace session
//!
//! ROM offsets are stored in the image as absolute bus addresses, so every
//! pointer is the file offset plus a fixed base.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::scan::{MatchList, find_and_replace_all};

/// Address origin added to a ROM offset to form a stored pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerBase(pub u32);

impl PointerBase {
    /// GBA cartridge ROM mapping
    pub const GBA_ROM: Self = Self(0x0800_0000);

    pub fn value(self) -> u32 {
        self.0
    }

    /// Encode `offset` as the little-endian pointer stored in the ROM
    pub fn encode(self, offset: u32) -> Result<[u8; 4]> {
        offset
            .checked_add(self.0)
            .map(u32::to_le_bytes)
            .ok_or(Error::PointerOverflow {
                offset,
                base: self.0,
            })
    }
}

impl Default for PointerBase {
    fn default() -> Self {
        Self::GBA_ROM
    }
}

/// Outcome of a relocation: the encoded pointers and where they were rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub old_pointer: [u8; 4],
    pub new_pointer: [u8; 4],
    pub matches: MatchList,
}

/// Rewrite every pointer to `old_offset` so it points at `new_offset`
pub fn relocate_pointer(
    buffer: &mut [u8],
    old_offset: u32,
    new_offset: u32,
    base: PointerBase,
) -> Result<Relocation> {
    let old_pointer = base.encode(old_offset)?;
    let new_pointer = base.encode(new_offset)?;
    debug!(
        "Relocating pointer 0x{:X} -> 0x{:X} (base 0x{:X})",
        old_offset,
        new_offset,
        base.value()
    );

    let matches = find_and_replace_all(buffer, &old_pointer, &new_pointer)?;
    Ok(Relocation {
        old_pointer,
        new_pointer,
        matches,
    })
}
