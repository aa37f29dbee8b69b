//! Graphics support via embedded-graphics
//!
//! [`Paint`] implements [`DrawTarget`] with [`BinaryColor`], so any
//! embedded-graphics primitive, font or image can be rendered into a plane.
//! [`BinaryColor::On`] draws colored pixels (black on the black plane, red on
//! the red plane); [`BinaryColor::Off`] clears them. Coordinates are logical:
//! the canvas orientation applies and the reported size follows
//! [`Paint::width`]/[`Paint::height`].
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use epd2in9b::{buffer_len, Orientation, Paint};
//!
//! const LEN: usize = buffer_len(128, 296);
//! let Ok(paint) = Paint::new([0u8; LEN], 128, 296) else {
//!     return;
//! };
//! let mut black = paint.with_orientation(Orientation::Landscape);
//! black.clear(false);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut black);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut black);
//!
//! let _ = Text::new(
//!     "Hello, e-Paper!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut black);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::paint::Paint;

impl<B> DrawTarget for Paint<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.draw_pixel(x, y, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Paint::clear(self, color.is_on());
        Ok(())
    }
}

impl<B> OriginDimensions for Paint<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
