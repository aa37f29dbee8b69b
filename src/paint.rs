//! Frame buffer and drawing primitives
//!
//! [`Paint`] wraps byte storage holding one packed monochrome plane in the
//! layout the controller expects: row-major, `ceil(width / 8)` bytes per row,
//! most significant bit leftmost. A tri-color image is two independent `Paint`
//! instances of the same geometry, one per plane.
//!
//! Every primitive funnels into [`Paint::draw_absolute_pixel`], which silently
//! ignores coordinates outside the buffer.
//!
//! ## Example
//!
//! ```
//! use epd2in9b::{buffer_len, Font, Orientation, Paint};
//!
//! static GLYPHS: [u8; 16] = [0xFF; 16];
//! let font = Font::new(8, 8, &GLYPHS);
//!
//! let mut black = match Paint::new([0u8; buffer_len(128, 296)], 128, 296) {
//!     Ok(paint) => paint.with_orientation(Orientation::Landscape),
//!     Err(_) => return,
//! };
//! black.clear(false);
//! black.draw_rectangle(10, 10, 60, 40, true);
//! black.draw_filled_circle(100, 64, 20, true);
//! black.draw_string_at(12, 16, " !", &font, true);
//! assert_eq!(black.width(), 296);
//! ```

use crate::error::PaintError;
use crate::font::Font;
use crate::rotation::{Orientation, transform_xy};

/// Number of bytes needed for a `width` x `height` plane
///
/// The width is rounded up to whole bytes.
pub const fn buffer_len(width: u16, height: u16) -> usize {
    (width as usize).div_ceil(8) * height as usize
}

// Clamp a widened coordinate back into i32; clamped values are off canvas
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Packed monochrome frame buffer with drawing primitives
///
/// `B` is any byte storage: an array, a mutable slice or a `Vec`.
pub struct Paint<B> {
    /// Packed pixel storage
    buffer: B,
    /// Physical width, a multiple of 8
    width: u16,
    /// Physical height
    height: u16,
    /// Logical rotation applied by [`Paint::draw_pixel`]
    orientation: Orientation,
    /// When set, a 0 bit means colored
    inverse: bool,
}

impl<B> Paint<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `buffer` as a `width` x `height` plane
    ///
    /// The width is rounded up to a multiple of 8. The buffer content is left
    /// untouched; call [`clear`](Self::clear) to initialize it.
    ///
    /// # Errors
    ///
    /// Returns [`PaintError::InvalidDimensions`] for an empty geometry and
    /// [`PaintError::BufferTooSmall`] if `buffer` holds fewer than
    /// [`buffer_len`] bytes.
    pub fn new(buffer: B, width: u16, height: u16) -> Result<Self, PaintError> {
        if width == 0 || height == 0 || width > u16::MAX - 7 {
            return Err(PaintError::InvalidDimensions { width, height });
        }
        let required = buffer_len(width, height);
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(PaintError::BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            width: width.div_ceil(8) * 8,
            height,
            orientation: Orientation::Portrait,
            inverse: false,
        })
    }

    /// Set the logical orientation
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the color polarity
    #[must_use]
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Fill the whole plane
    ///
    /// Writes `0xFF` when `colored` differs from the inverse flag and `0x00`
    /// otherwise, so every pixel afterwards reads back as `colored`.
    pub fn clear(&mut self, colored: bool) {
        let fill = if colored != self.inverse { 0xFF } else { 0x00 };
        self.frame_mut().fill(fill);
    }

    /// Physical width in pixels (a multiple of 8)
    pub fn physical_width(&self) -> u16 {
        self.width
    }

    /// Physical height in pixels
    pub fn physical_height(&self) -> u16 {
        self.height
    }

    /// Logical width for the current orientation
    ///
    /// Portrait orientations report the smaller physical side, landscape
    /// orientations the larger one.
    pub fn width(&self) -> u16 {
        if self.orientation.is_landscape() {
            self.width.max(self.height)
        } else {
            self.width.min(self.height)
        }
    }

    /// Logical height for the current orientation
    ///
    /// Portrait orientations report the larger physical side, landscape
    /// orientations the smaller one.
    pub fn height(&self) -> u16 {
        if self.orientation.is_landscape() {
            self.height.min(self.width)
        } else {
            self.height.max(self.width)
        }
    }

    /// Current logical orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the logical orientation; the buffer content is not touched
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Whether 0 bits mean colored
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Change the color polarity, returning the previous setting
    pub fn set_inverse(&mut self, inverse: bool) -> bool {
        core::mem::replace(&mut self.inverse, inverse)
    }

    /// Packed frame bytes, ready for transmission
    pub fn buffer(&self) -> &[u8] {
        let len = self.frame_len();
        &self.buffer.as_ref()[..len]
    }

    /// Mutable packed frame bytes
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.frame_mut()
    }

    /// Release the backing storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Map logical coordinates to physical ones for the current orientation
    pub fn transform_xy(&self, x: i32, y: i32) -> (i32, i32) {
        transform_xy(
            self.orientation,
            x,
            y,
            i32::from(self.width),
            i32::from(self.height),
        )
    }

    /// Set or clear one pixel by physical coordinates
    ///
    /// Unaffected by the orientation. Out-of-range coordinates are ignored.
    pub fn draw_absolute_pixel(&mut self, x: i32, y: i32, colored: bool) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let set = colored != self.inverse;
        if let Some(byte) = self.buffer.as_mut().get_mut(index) {
            if set {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }

    /// Read one pixel by physical coordinates
    ///
    /// Returns `None` outside the buffer.
    pub fn is_colored_absolute(&self, x: i32, y: i32) -> Option<bool> {
        let (index, mask) = self.locate(x, y)?;
        let byte = self.buffer.as_ref().get(index)?;
        Some((byte & mask != 0) != self.inverse)
    }

    /// Read one pixel by logical coordinates
    pub fn is_colored(&self, x: i32, y: i32) -> Option<bool> {
        let (x, y) = self.transform_xy(x, y);
        self.is_colored_absolute(x, y)
    }

    /// Set or clear one pixel by logical coordinates
    pub fn draw_pixel(&mut self, x: i32, y: i32, colored: bool) {
        let (x, y) = self.transform_xy(x, y);
        self.draw_absolute_pixel(x, y, colored);
    }

    /// Draw one glyph with its top-left corner at (x, y)
    ///
    /// Only set glyph bits are drawn; the cell background is left as is.
    /// Characters missing from the font are skipped.
    pub fn draw_char_at(&mut self, x: i32, y: i32, c: char, font: &Font, colored: bool) {
        let row_bytes = font.bytes_per_row();
        if row_bytes == 0 {
            return;
        }
        let Some(glyph) = font.glyph(c) else {
            return;
        };
        for (j, row) in (0..i32::from(font.height)).zip(glyph.chunks_exact(row_bytes)) {
            for i in 0..i32::from(font.width) {
                let Some(byte) = row.get((i / 8) as usize) else {
                    break;
                };
                if byte & (0x80u8 >> (i % 8)) != 0 {
                    self.draw_pixel(x.saturating_add(i), y.saturating_add(j), colored);
                }
            }
        }
    }

    /// Draw `text` left to right starting at (x, y)
    ///
    /// Each character advances the cursor by the font width. Drawing stops at
    /// the end of the string or at a NUL character. Returns the cursor
    /// position after the last character.
    pub fn draw_string_at(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        font: &Font,
        colored: bool,
    ) -> i32 {
        let mut cursor = x;
        for c in text.chars().take_while(|c| *c != '\0') {
            self.draw_char_at(cursor, y, c, font, colored);
            cursor = cursor.saturating_add(i32::from(font.width));
        }
        cursor
    }

    /// Draw a line from (x0, y0) towards (x1, y1) (Bresenham)
    ///
    /// The end point itself is not drawn, so a zero-length line draws nothing.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colored: bool) {
        let (x0, y0) = self.transform_xy(x0, y0);
        let (x1, y1) = self.transform_xy(x1, y1);
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));

        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        while x != x1 || y != y1 {
            self.draw_absolute_pixel(saturate(x), saturate(y), colored);
            if 2 * err >= dy && x != x1 {
                err += dy;
                x += sx;
            }
            if 2 * err <= dx && y != y1 {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw `line_width` pixels to the right of (x, y)
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, line_width: i32, colored: bool) {
        for i in x..x.saturating_add(line_width) {
            self.draw_pixel(i, y, colored);
        }
    }

    /// Draw `line_height` pixels below (x, y)
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, line_height: i32, colored: bool) {
        for i in y..y.saturating_add(line_height) {
            self.draw_pixel(x, i, colored);
        }
    }

    /// Draw the outline of the rectangle spanned by two opposite corners
    pub fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colored: bool) {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));

        self.draw_row(min_x, max_x, min_y, colored);
        self.draw_row(min_x, max_x, max_y, colored);
        self.draw_column(min_x, min_y, max_y, colored);
        self.draw_column(max_x, min_y, max_y, colored);
    }

    /// Fill the rectangle spanned by two opposite corners
    pub fn draw_filled_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colored: bool) {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));

        for x in min_x..=max_x {
            self.draw_column(x, min_y, max_y, colored);
        }
    }

    /// Draw a circle outline centered on (x, y)
    ///
    /// A radius of 0 draws the center point only.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32, colored: bool) {
        self.rasterize_circle(x, y, radius, colored, false);
    }

    /// Draw a filled circle centered on (x, y)
    pub fn draw_filled_circle(&mut self, x: i32, y: i32, radius: i32, colored: bool) {
        self.rasterize_circle(x, y, radius, colored, true);
    }

    // Midpoint circle walking one quadrant, mirrored four ways
    fn rasterize_circle(&mut self, x: i32, y: i32, radius: i32, colored: bool, filled: bool) {
        let (x, y) = (i64::from(x), i64::from(y));
        let radius = i64::from(radius);
        let mut x_pos = -radius;
        let mut y_pos = 0;
        let mut err = 2 - 2 * radius;

        loop {
            let (left, right) = (saturate(x + x_pos), saturate(x - x_pos));
            let (top, bottom) = (saturate(y - y_pos), saturate(y + y_pos));
            self.draw_pixel(right, bottom, colored);
            self.draw_pixel(left, bottom, colored);
            self.draw_pixel(left, top, colored);
            self.draw_pixel(right, top, colored);
            if filled {
                self.draw_row(left, right, bottom, colored);
                self.draw_row(left, right, top, colored);
            }

            let mut e2 = err;
            if e2 <= y_pos {
                y_pos += 1;
                err += y_pos * 2 + 1;
                if -x_pos == y_pos && e2 <= x_pos {
                    e2 = 0;
                }
            }
            if e2 > x_pos {
                x_pos += 1;
                err += x_pos * 2 + 1;
            }
            if x_pos > 0 {
                break;
            }
        }
    }

    // Inclusive run of logical pixels along a row
    fn draw_row(&mut self, x0: i32, x1: i32, y: i32, colored: bool) {
        for x in x0..=x1 {
            self.draw_pixel(x, y, colored);
        }
    }

    // Inclusive run of logical pixels down a column
    fn draw_column(&mut self, x: i32, y0: i32, y1: i32, colored: bool) {
        for y in y0..=y1 {
            self.draw_pixel(x, y, colored);
        }
    }

    fn frame_len(&self) -> usize {
        buffer_len(self.width, self.height)
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        let len = self.frame_len();
        &mut self.buffer.as_mut()[..len]
    }

    // Byte index and bit mask of a physical pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = y * (self.width as usize / 8) + x / 8;
        Some((index, 0x80 >> (x % 8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    const ORIENTATIONS: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::PortraitFlipped,
        Orientation::LandscapeFlipped,
    ];

    fn paint(width: u16, height: u16) -> Paint<Vec<u8>> {
        Paint::new(vec![0u8; buffer_len(width, height)], width, height).unwrap()
    }

    fn colored_count(paint: &Paint<Vec<u8>>) -> u32 {
        paint.buffer().iter().map(|b| b.count_ones()).sum()
    }

    #[test]
    fn test_buffer_len_rounds_width_up() {
        assert_eq!(buffer_len(128, 296), 4736);
        assert_eq!(buffer_len(1, 1), 1);
        assert_eq!(buffer_len(9, 2), 4);
    }

    #[test]
    fn test_new_rounds_width_to_byte() {
        let p = paint(122, 250);
        assert_eq!(p.physical_width(), 128);
        assert_eq!(p.physical_height(), 250);
        assert_eq!(p.buffer().len(), 16 * 250);
    }

    #[test]
    fn test_new_rejects_small_storage() {
        let result = Paint::new([0u8; 10], 16, 6);
        assert_eq!(
            result.err(),
            Some(PaintError::BufferTooSmall {
                required: 12,
                provided: 10
            })
        );
    }

    #[test]
    fn test_new_rejects_empty_geometry() {
        assert!(matches!(
            Paint::new([0u8; 4], 0, 4),
            Err(PaintError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_accepts_borrowed_storage() {
        let mut storage = [0u8; 8];
        {
            let mut p = Paint::new(&mut storage[..], 16, 4).unwrap();
            p.draw_absolute_pixel(0, 0, true);
        }
        assert_eq!(storage[0], 0x80);
    }

    #[test]
    fn test_clear_reads_back_requested_color() {
        for inverse in [false, true] {
            for colored in [false, true] {
                let mut p = paint(16, 4).with_inverse(inverse);
                p.clear(colored);
                for y in 0..4 {
                    for x in 0..16 {
                        assert_eq!(p.is_colored_absolute(x, y), Some(colored));
                    }
                }
            }
        }
    }

    #[test]
    fn test_clear_fill_bytes() {
        let mut p = paint(16, 2);
        p.clear(true);
        assert!(p.buffer().iter().all(|b| *b == 0xFF));

        p.set_inverse(true);
        p.clear(true);
        assert!(p.buffer().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn test_absolute_pixel_bit_layout() {
        let mut p = paint(16, 2);
        p.draw_absolute_pixel(0, 0, true);
        p.draw_absolute_pixel(9, 0, true);
        p.draw_absolute_pixel(15, 1, true);
        assert_eq!(p.buffer(), &[0x80, 0x40, 0x00, 0x01]);

        p.draw_absolute_pixel(9, 0, false);
        assert_eq!(p.buffer(), &[0x80, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_inverse_polarity_clears_bits_for_ink() {
        let mut p = paint(8, 1).with_inverse(true);
        p.clear(false);
        assert_eq!(p.buffer(), &[0xFF]);
        p.draw_absolute_pixel(0, 0, true);
        assert_eq!(p.buffer(), &[0x7F]);
        assert_eq!(p.is_colored_absolute(0, 0), Some(true));
    }

    #[test]
    fn test_set_inverse_returns_previous() {
        let mut p = paint(8, 1);
        assert!(!p.is_inverse());
        assert!(!p.set_inverse(true));
        assert!(p.is_inverse());
        assert!(p.set_inverse(false));
    }

    #[test]
    fn test_pixel_lands_on_transformed_coordinates() {
        for orientation in ORIENTATIONS {
            let mut p = paint(128, 296).with_orientation(orientation);
            for (x, y) in [(0, 0), (5, 17), (100, 20), (127, 127)] {
                p.draw_pixel(x, y, true);
                let (px, py) = p.transform_xy(x, y);
                assert_eq!(p.is_colored_absolute(px, py), Some(true));
                assert_eq!(p.is_colored(x, y), Some(true));
            }
        }
    }

    #[test]
    fn test_out_of_range_pixels_leave_buffer_unchanged() {
        for orientation in ORIENTATIONS {
            let mut p = paint(128, 296).with_orientation(orientation);
            p.draw_filled_rectangle(3, 3, 40, 40, true);
            let before = p.buffer().to_vec();

            for (x, y) in [
                (-1, 0),
                (0, -1),
                (296, 0),
                (0, 296),
                (-500, 1000),
                (i32::MAX, 0),
                (i32::MIN, 0),
                (0, i32::MIN),
                (i32::MIN, i32::MAX),
            ] {
                p.draw_pixel(x, y, true);
                p.draw_pixel(x, y, false);
                assert_eq!(p.is_colored(x, y), None);
            }
            for (x, y) in [(-1, 0), (128, 0), (0, 296), (128, 296)] {
                p.draw_absolute_pixel(x, y, true);
            }
            assert_eq!(p.buffer(), before.as_slice());
        }
    }

    #[test]
    fn test_origin_per_orientation() {
        let expected = [(0, 0), (127, 0), (127, 295), (0, 295)];
        let mut seen = Vec::new();
        for (orientation, (px, py)) in ORIENTATIONS.into_iter().zip(expected) {
            let mut p = paint(128, 296).with_orientation(orientation);
            p.draw_pixel(0, 0, true);
            assert_eq!(colored_count(&p), 1);
            assert_eq!(p.is_colored_absolute(px, py), Some(true));
            seen.push(p.buffer().to_vec());
        }
        for (i, a) in seen.iter().enumerate() {
            for b in &seen[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_logical_dimensions() {
        let mut p = paint(128, 296);
        assert_eq!((p.width(), p.height()), (128, 296));
        p.set_orientation(Orientation::Landscape);
        assert_eq!((p.width(), p.height()), (296, 128));
        p.set_orientation(Orientation::LandscapeFlipped);
        assert_eq!((p.width(), p.height()), (296, 128));
        p.set_orientation(Orientation::PortraitFlipped);
        assert_eq!((p.width(), p.height()), (128, 296));
    }

    // Getters pick min/max of the physical sides rather than swapping them, so a
    // buffer that is physically wider than tall still reports a tall portrait
    // canvas. Kept as-is; callers rely on the panel being portrait-native.
    #[test]
    fn test_portrait_getters_use_min_max_for_wide_buffers() {
        let mut p = paint(296, 128);
        assert_eq!((p.width(), p.height()), (128, 296));
        p.set_orientation(Orientation::Landscape);
        assert_eq!((p.width(), p.height()), (296, 128));
    }

    #[test]
    fn test_line_stops_before_end_point() {
        let mut p = paint(16, 16);
        p.draw_line(0, 0, 7, 0, true);
        assert_eq!(p.buffer()[0], 0xFE);
        assert_eq!(p.buffer()[1], 0x00);

        let mut p = paint(16, 16);
        p.draw_line(0, 0, 3, 0, true);
        assert_eq!(colored_count(&p), 3);

        let mut p = paint(16, 16);
        p.draw_line(3, 3, 0, 0, true);
        assert_eq!(colored_count(&p), 3);
        for i in 1..4 {
            assert_eq!(p.is_colored_absolute(i, i), Some(true));
        }
        assert_eq!(p.is_colored_absolute(0, 0), Some(false));
    }

    #[test]
    fn test_zero_length_line_draws_nothing() {
        let mut p = paint(16, 16);
        p.draw_line(5, 6, 5, 6, true);
        assert_eq!(colored_count(&p), 0);
    }

    #[test]
    fn test_steep_line_reaches_every_row() {
        let mut p = paint(16, 16);
        p.draw_line(2, 0, 4, 9, true);
        assert_eq!(colored_count(&p), 9);
        for y in 0..9 {
            assert!((0..16).any(|x| p.is_colored_absolute(x, y) == Some(true)));
        }
        assert_eq!(p.is_colored_absolute(4, 9), Some(false));
    }

    #[test]
    fn test_shapes_at_extreme_coordinates_are_clipped() {
        for orientation in ORIENTATIONS {
            let mut p = paint(128, 296).with_orientation(orientation);
            p.draw_line(i32::MIN, 0, i32::MIN + 3, 3, true);
            p.draw_line(i32::MAX - 3, i32::MIN, i32::MAX, i32::MIN + 2, true);
            p.draw_rectangle(i32::MAX - 2, 0, i32::MAX, 2, true);
            p.draw_filled_rectangle(i32::MIN, i32::MIN, i32::MIN + 2, i32::MIN + 2, true);
            p.draw_circle(i32::MAX, 5, 2, true);
            p.draw_filled_circle(i32::MIN, i32::MIN, 3, true);
            p.draw_horizontal_line(i32::MAX - 1, 0, 5, true);
            p.draw_vertical_line(0, i32::MIN, 3, true);
            assert_eq!(colored_count(&p), 0);
        }
    }

    #[test]
    fn test_text_at_extreme_coordinates_is_clipped() {
        let mut p = paint(32, 2);
        assert_eq!(p.draw_string_at(i32::MAX - 4, 0, "!!", &FONT, true), i32::MAX);
        p.draw_char_at(0, i32::MAX, '#', &FONT, true);
        assert_eq!(colored_count(&p), 0);
    }

    #[test]
    fn test_line_is_clipped() {
        let mut p = paint(16, 16);
        p.draw_line(-10, 2, 30, 2, true);
        assert_eq!(colored_count(&p), 16);
    }

    #[test]
    fn test_axis_aligned_lines() {
        let mut p = paint(16, 16);
        p.draw_horizontal_line(2, 1, 5, true);
        assert_eq!(colored_count(&p), 5);
        assert_eq!(p.is_colored_absolute(6, 1), Some(true));
        assert_eq!(p.is_colored_absolute(7, 1), Some(false));

        p.draw_vertical_line(10, 10, 10, true);
        assert_eq!(colored_count(&p), 5 + 6);

        p.draw_horizontal_line(0, 0, 0, true);
        p.draw_vertical_line(0, 0, -3, true);
        assert_eq!(colored_count(&p), 11);
    }

    #[test]
    fn test_rectangle_corner_order_is_irrelevant() {
        let mut a = paint(32, 32);
        let mut b = paint(32, 32);
        a.draw_rectangle(3, 4, 20, 25, true);
        b.draw_rectangle(20, 25, 3, 4, true);
        assert_eq!(a.buffer(), b.buffer());

        let mut c = paint(32, 32);
        c.draw_rectangle(3, 25, 20, 4, true);
        assert_eq!(a.buffer(), c.buffer());
    }

    #[test]
    fn test_rectangle_outline() {
        let mut p = paint(16, 16);
        p.draw_rectangle(1, 1, 4, 3, true);
        // 4x3 outline: 2*4 + 2*1 distinct pixels
        assert_eq!(colored_count(&p), 10);
        assert_eq!(p.is_colored_absolute(2, 2), Some(false));
    }

    #[test]
    fn test_filled_rectangle() {
        let mut a = paint(16, 16);
        a.draw_filled_rectangle(10, 5, 1, 1, true);
        assert_eq!(colored_count(&a), 10 * 5);

        let mut b = paint(16, 16);
        b.draw_filled_rectangle(1, 1, 10, 5, true);
        assert_eq!(a.buffer(), b.buffer());
    }

    #[test]
    fn test_filled_circle_radius_zero_is_one_pixel() {
        let mut p = paint(32, 32);
        p.draw_filled_circle(9, 12, 0, true);
        assert_eq!(colored_count(&p), 1);
        assert_eq!(p.is_colored_absolute(9, 12), Some(true));

        let mut p = paint(32, 32);
        p.draw_circle(9, 12, 0, true);
        assert_eq!(colored_count(&p), 1);
    }

    #[test]
    fn test_circle_is_symmetric() {
        let mut p = paint(32, 32);
        p.draw_circle(16, 16, 5, true);
        for (x, y) in [(21, 16), (11, 16), (16, 21), (16, 11)] {
            assert_eq!(p.is_colored_absolute(x, y), Some(true));
        }
        assert_eq!(p.is_colored_absolute(16, 16), Some(false));
        for y in 0..32 {
            for x in 0..32 {
                let mirrored = p.is_colored_absolute(32 - x, y);
                if x > 0 {
                    assert_eq!(p.is_colored_absolute(x, y), mirrored);
                }
            }
        }
    }

    #[test]
    fn test_filled_circle_covers_interior() {
        let mut outline = paint(32, 32);
        outline.draw_circle(16, 16, 6, true);
        let mut filled = paint(32, 32);
        filled.draw_filled_circle(16, 16, 6, true);

        assert!(colored_count(&filled) > colored_count(&outline));
        for dx in -5..=5 {
            assert_eq!(filled.is_colored_absolute(16 + dx, 16), Some(true));
        }
        for (o, f) in outline.buffer().iter().zip(filled.buffer()) {
            assert_eq!(o & !f, 0);
        }
    }

    #[test]
    fn test_circle_is_clipped_at_edges() {
        let mut p = paint(16, 16);
        p.draw_filled_circle(0, 0, 40, true);
        assert_eq!(colored_count(&p), 16 * 16);
    }

    // Glyphs for ' ', '!', '"', '#': 8x2, one byte per row
    const GLYPHS: [u8; 8] = [0x00, 0x00, 0xFF, 0x00, 0x00, 0xFF, 0x81, 0x81];
    const FONT: Font = Font::new(8, 2, &GLYPHS);

    #[test]
    fn test_string_advances_by_font_width() {
        let mut p = paint(32, 2);
        let end = p.draw_string_at(0, 0, "!\"#", &FONT, true);
        assert_eq!(end, 24);
        assert_eq!(p.buffer(), &[0xFF, 0x00, 0x81, 0x00, 0x00, 0xFF, 0x81, 0x00]);
    }

    #[test]
    fn test_string_stops_at_nul() {
        let mut p = paint(32, 2);
        let end = p.draw_string_at(0, 0, "!\0#", &FONT, true);
        assert_eq!(end, 8);
        assert_eq!(colored_count(&p), 8);
    }

    #[test]
    fn test_char_is_additive() {
        let mut p = paint(8, 2);
        p.draw_absolute_pixel(3, 1, true);
        p.draw_char_at(0, 0, '!', &FONT, true);
        assert_eq!(p.buffer(), &[0xFF, 0x10]);

        // Space has no set bits and leaves the cell alone
        p.draw_char_at(0, 0, ' ', &FONT, false);
        assert_eq!(p.buffer(), &[0xFF, 0x10]);
    }

    #[test]
    fn test_char_outside_font_is_skipped() {
        let mut p = paint(8, 2);
        p.draw_char_at(0, 0, 'A', &FONT, true);
        p.draw_char_at(0, 0, '\n', &FONT, true);
        assert_eq!(colored_count(&p), 0);
    }

    #[test]
    fn test_wide_glyph_advances_source_byte_every_8_columns() {
        // 10 px wide: 2 bytes per row, one glyph (' ') of 1 row
        const WIDE: [u8; 2] = [0x80, 0x40];
        let font = Font::new(10, 1, &WIDE);
        let mut p = paint(16, 1);
        p.draw_char_at(0, 0, ' ', &font, true);
        assert_eq!(p.is_colored_absolute(0, 0), Some(true));
        assert_eq!(p.is_colored_absolute(9, 0), Some(true));
        assert_eq!(colored_count(&p), 2);
    }

    #[test]
    fn test_text_follows_orientation() {
        let mut p = paint(16, 32).with_orientation(Orientation::Landscape);
        p.draw_char_at(0, 0, '!', &FONT, true);
        // Logical row 0 maps to physical column 15, running down
        for y in 0..8 {
            assert_eq!(p.is_colored_absolute(15, y), Some(true));
        }
        assert_eq!(colored_count(&p), 8);
    }
}
