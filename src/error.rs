//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and frame buffer construction ([`PaintError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`PaintError`] - Storage that cannot back a [`Paint`](crate::paint::Paint)
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Drawing itself never fails: coordinates outside the buffer are clipped.
//!
//! ## Example
//!
//! ```
//! use epd2in9b::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Width must be byte aligned
//! let result = Dimensions::new(100, 296);
//! assert!(result.is_err());
//! ```

use crate::config::{MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The panel reported busy, nothing was sent
    ///
    /// Poll [`Display::wait_until_idle`](crate::display::Display::wait_until_idle)
    /// and retry.
    Busy,
    /// Buffer is too small for the requested transfer
    ///
    /// Checked before any bus activity.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Partial window is empty or does not fit the panel
    InvalidWindow {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
        /// Width
        w: u16,
        /// Height
        h: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Busy => write!(f, "Panel is busy"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::InvalidWindow { x, y, w, h } => {
                write!(f, "Invalid partial window: x={x}, y={y}, w={w}, h={h}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before
    /// building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Requested width
        width: u16,
        /// Requested height
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} \
                 (max {MAX_SOURCE_OUTPUTS}x{MAX_GATE_OUTPUTS}, width must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when creating a frame buffer
#[derive(Debug, PartialEq, Eq)]
pub enum PaintError {
    /// Width or height is zero
    InvalidDimensions {
        /// Requested width
        width: u16,
        /// Requested height
        height: u16,
    },
    /// Backing storage is smaller than the packed frame
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for PaintError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid frame buffer dimensions {width}x{height}")
            }
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Frame buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for PaintError {}
