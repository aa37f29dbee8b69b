//! Bitmap font tables
//!
//! A [`Font`] describes a fixed-size glyph table: one cell per printable ASCII
//! character starting at `' '`, each cell `height` rows of `ceil(width / 8)`
//! bytes, most significant bit leftmost. The table bytes are supplied by the
//! application; this crate only reads them.

/// First character present in every font table
pub const FIRST_CHAR: char = ' ';

/// Fixed-width bitmap font
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    /// Glyph width in pixels (also the text advance)
    pub width: u16,
    /// Glyph height in pixels
    pub height: u16,
    /// Packed glyph rows, starting with the space character
    pub table: &'static [u8],
}

impl Font {
    /// Describe a glyph table
    pub const fn new(width: u16, height: u16, table: &'static [u8]) -> Self {
        Self {
            width,
            height,
            table,
        }
    }

    /// Bytes per glyph row
    pub const fn bytes_per_row(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes per glyph
    pub const fn glyph_len(&self) -> usize {
        self.bytes_per_row() * self.height as usize
    }

    /// Byte offset of a glyph in the table
    ///
    /// Returns `None` for characters before [`FIRST_CHAR`] or past the end of
    /// the table.
    pub fn glyph_offset(&self, c: char) -> Option<usize> {
        let index = (c as u32).checked_sub(FIRST_CHAR as u32)? as usize;
        let offset = index.checked_mul(self.glyph_len())?;
        let end = offset.checked_add(self.glyph_len())?;
        (end <= self.table.len()).then_some(offset)
    }

    /// Packed rows of one glyph
    pub fn glyph(&self, c: char) -> Option<&'static [u8]> {
        let offset = self.glyph_offset(c)?;
        self.table.get(offset..offset + self.glyph_len())
    }
}
