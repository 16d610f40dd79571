//! Packed tile indices.
//!
//! Map tiles are addressed by a single `u32` packing three bytes:
//!
//! ```text
//! bits 16..24  main index
//! bits  8..16  sub index
//! bits  0..8   orientation
//! ```
//!
//! Warp tiles use the main index to select the level's warp slot.

use serde::{Deserialize, Serialize};

const MAIN_INDEX_OFFSET: u32 = 16;
const SUB_INDEX_OFFSET: u32 = 8;
const ORIENTATION_OFFSET: u32 = 0;
const BYTE: u32 = 0xFF;

/// A packed tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileIndex(pub u32);

impl TileIndex {
    /// Pack the three parts into an index. Each part is truncated to a byte.
    #[must_use]
    pub const fn new(main_index: u32, sub_index: u32, orientation: u32) -> Self {
        Self(
            (main_index & BYTE) << MAIN_INDEX_OFFSET
                | (sub_index & BYTE) << SUB_INDEX_OFFSET
                | (orientation & BYTE) << ORIENTATION_OFFSET,
        )
    }

    #[must_use]
    pub const fn main_index(self) -> usize {
        ((self.0 >> MAIN_INDEX_OFFSET) & BYTE) as usize
    }

    #[must_use]
    pub const fn sub_index(self) -> usize {
        ((self.0 >> SUB_INDEX_OFFSET) & BYTE) as usize
    }

    #[must_use]
    pub const fn orientation(self) -> usize {
        ((self.0 >> ORIENTATION_OFFSET) & BYTE) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_parts() {
        let index = TileIndex(0x0003_0210);
        assert_eq!(index.main_index(), 3);
        assert_eq!(index.sub_index(), 2);
        assert_eq!(index.orientation(), 0x10);
    }

    #[test]
    fn test_new_packs_parts() {
        assert_eq!(TileIndex::new(3, 2, 0x10), TileIndex(0x0003_0210));
        assert_eq!(TileIndex::new(0x1FF, 0, 0).main_index(), 0xFF);
    }
}
