use std::ops::Index;

use crate::color::{AttributeInfo, ColorMapper};
use crate::frame::{Frame, Rgba, MAX_PALETTE};

/// Palette index -> attribute lookup for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeTable {
    entries: [AttributeInfo; MAX_PALETTE],
    len: usize,
}

impl Default for AttributeTable {
    fn default() -> Self {
        Self {
            entries: [AttributeInfo::UNUSED; MAX_PALETTE],
            len: 0,
        }
    }
}

impl AttributeTable {
    /// Map every palette entry. Entries past the palette keep
    /// [`AttributeInfo::UNUSED`]; anything beyond 256 entries is ignored.
    pub fn from_palette(palette: &[Rgba], mapper: &dyn ColorMapper) -> Self {
        let mut table = Self::default();
        for (slot, &color) in table.entries.iter_mut().zip(palette) {
            *slot = mapper.map(color);
        }
        table.len = palette.len().min(MAX_PALETTE);
        table
    }

    /// Number of entries that came from the palette.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Index<u8> for AttributeTable {
    type Output = AttributeInfo;

    #[inline]
    fn index(&self, index: u8) -> &AttributeInfo {
        &self.entries[index as usize]
    }
}

/// One table per frame, in frame order.
pub fn build_tables(frames: &[Frame], mapper: &dyn ColorMapper) -> Vec<AttributeTable> {
    frames
        .iter()
        .map(|f| AttributeTable::from_palette(f.palette(), mapper))
        .collect()
}
