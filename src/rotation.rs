//! Coordinate rotation utilities
//!
//! A [`Paint`](crate::paint::Paint) canvas keeps one physical byte layout: rows of
//! `width / 8` bytes, most significant bit leftmost. Its [`Orientation`] only
//! changes how logical coordinates are mapped onto that layout.
//!
//! ## Orientation Modes
//!
//! - **Portrait**: Native layout, identity mapping
//! - **Landscape**: Axes swapped, origin at the physical top-right corner
//! - **PortraitFlipped**: Both axes mirrored, origin at the bottom-right corner
//! - **LandscapeFlipped**: Axes swapped, origin at the physical bottom-left corner
//!
//! ## Example
//!
//! ```
//! use epd2in9b::{rotation::transform_xy, Orientation};
//!
//! // On a 128x296 canvas, the logical origin in landscape is physical (127, 0)
//! assert_eq!(transform_xy(Orientation::Landscape, 0, 0, 128, 296), (127, 0));
//! assert_eq!(transform_xy(Orientation::Portrait, 5, 9, 128, 296), (5, 9));
//! ```

/// Logical rotation of a frame buffer
///
/// Independent of the controller's
/// [`PanelOrientation`](crate::config::PanelOrientation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Native layout
    #[default]
    Portrait,
    /// Rotated a quarter turn, width and height swapped
    Landscape,
    /// Rotated half a turn
    PortraitFlipped,
    /// Rotated three quarter turns, width and height swapped
    LandscapeFlipped,
}

impl Orientation {
    /// Whether logical width and height are swapped relative to the buffer
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape | Self::LandscapeFlipped)
    }
}

/// Map logical coordinates to physical buffer coordinates
///
/// `width` and `height` are the physical (byte aligned) buffer dimensions.
/// The result is not bounds-checked; coordinates outside the logical canvas map
/// outside the physical one and are clipped by the caller. Mirrored axes
/// saturate, so extreme inputs still land out of range.
pub fn transform_xy(
    orientation: Orientation,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);
    match orientation {
        Orientation::Portrait => (x, y),
        Orientation::Landscape => (last_x.saturating_sub(y), x),
        Orientation::PortraitFlipped => (last_x.saturating_sub(x), last_y.saturating_sub(y)),
        Orientation::LandscapeFlipped => (y, last_y.saturating_sub(x)),
    }
}
