//! Waveshare 2.9" B E-Paper Display Driver
//!
//! A driver for the 128x296 black/white/red e-paper panel driven by an
//! IL0373-class controller, plus a packed frame buffer with drawing primitives.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full frame and partial window updates of both color planes
//! - Busy waiting with a cooperative yield hook
//! - Logical rotation of frame buffers
//!
//! The driver ([`Display`]) and the frame buffers ([`Paint`]) are independent:
//! draw into one `Paint` per color plane, then hand their bytes to the driver.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use epd2in9b::{buffer_len, Builder, Dimensions, Display, Interface, Orientation, Paint};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! const LEN: usize = buffer_len(128, 296);
//!
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = match Builder::new().dimensions(Dimensions::EPD_2IN9B).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(interface, config);
//! if display.init(&mut delay).is_err() {
//!     return;
//! }
//!
//! let (Ok(black), Ok(red)) = (
//!     Paint::new([0u8; LEN], 128, 296),
//!     Paint::new([0u8; LEN], 128, 296),
//! ) else {
//!     return;
//! };
//! let mut black = black.with_orientation(Orientation::Landscape);
//! let mut red = red.with_orientation(Orientation::Landscape);
//! black.clear(false);
//! red.clear(false);
//! black.draw_rectangle(10, 10, 120, 60, true);
//! red.draw_filled_circle(200, 64, 30, true);
//!
//! let _ = display.display_frame(Some(black.buffer()), Some(red.buffer()), &mut delay);
//! let _ = display.wait_until_idle(&mut delay);
//! let _ = display.sleep();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap font tables
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Frame buffer and drawing primitives
pub mod paint;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{
    Builder, Config, Dimensions, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS, PanelOrientation,
};
pub use display::{Display, PanelState, PartialUpdate, Region};
pub use error::{BuilderError, Error, PaintError};
pub use font::Font;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};
pub use paint::{Paint, buffer_len};
pub use rotation::Orientation;
