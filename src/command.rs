//! Controller command definitions
//!
//! Command bytes for the IL0373-class controller that drives the Waveshare
//! 2.9" black/white/red panel. Every command is a single byte sent with the
//! DC pin low, optionally followed by parameter bytes sent with DC high.
//!
//! ## Command Structure
//!
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send data bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use epd2in9b::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let pixel_data = [0xFFu8; 4];
//! // Stream black plane data
//! let _ = interface.send_command(command::DATA_START_TRANSMISSION_1);
//! let _ = interface.send_data(&pixel_data);
//! let _ = interface.send_command(command::DISPLAY_REFRESH);
//! ```

// Power and panel configuration

/// Panel setting command (0x00)
///
/// One byte: resolution/LUT source bits OR'ed with the scan direction bits of
/// [`PanelOrientation`](crate::config::PanelOrientation).
pub const PANEL_SETTING: u8 = 0x00;

/// Power setting command (0x01)
pub const POWER_SETTING: u8 = 0x01;

/// Power off command (0x02)
pub const POWER_OFF: u8 = 0x02;

/// Power off sequence setting command (0x03)
pub const POWER_OFF_SEQUENCE_SETTING: u8 = 0x03;

/// Power on command (0x04)
///
/// BUSY is asserted until the charge pumps are up.
pub const POWER_ON: u8 = 0x04;

/// Power on measure command (0x05)
pub const POWER_ON_MEASURE: u8 = 0x05;

/// Booster soft start command (0x06)
///
/// Requires 3 bytes (phase A, B, C).
pub const BOOSTER_SOFT_START: u8 = 0x06;

/// Deep sleep command (0x07)
///
/// Requires the check code [`DEEP_SLEEP_CHECK_CODE`]. Only a hardware reset wakes
/// the controller afterwards.
pub const DEEP_SLEEP: u8 = 0x07;

/// Check code that must follow [`DEEP_SLEEP`] for the command to execute
pub const DEEP_SLEEP_CHECK_CODE: u8 = 0xA5;

// Frame data

/// Start data transmission 1 (0x10): black plane
pub const DATA_START_TRANSMISSION_1: u8 = 0x10;

/// Data stop command (0x11)
pub const DATA_STOP: u8 = 0x11;

/// Display refresh command (0x12)
///
/// Starts the refresh of the staged frame. BUSY stays asserted for the whole
/// waveform; the driver does not wait for it.
pub const DISPLAY_REFRESH: u8 = 0x12;

/// Start data transmission 2 (0x13): red plane
pub const DATA_START_TRANSMISSION_2: u8 = 0x13;

// Timing, temperature, VCOM

/// PLL control command (0x30)
pub const PLL_CONTROL: u8 = 0x30;

/// Temperature sensor command (0x40)
pub const TEMPERATURE_SENSOR_COMMAND: u8 = 0x40;

/// Temperature sensor calibration command (0x41)
pub const TEMPERATURE_SENSOR_CALIBRATION: u8 = 0x41;

/// Temperature sensor write command (0x42)
pub const TEMPERATURE_SENSOR_WRITE: u8 = 0x42;

/// Temperature sensor read command (0x43)
pub const TEMPERATURE_SENSOR_READ: u8 = 0x43;

/// VCOM and data interval setting command (0x50)
///
/// One byte: border data selection and VCOM/data interval.
pub const VCOM_AND_DATA_INTERVAL_SETTING: u8 = 0x50;

/// Low power detection command (0x51)
pub const LOW_POWER_DETECTION: u8 = 0x51;

/// TCON setting command (0x60)
pub const TCON_SETTING: u8 = 0x60;

/// Resolution setting command (0x61)
pub const TCON_RESOLUTION: u8 = 0x61;

/// Get status command (0x71)
pub const GET_STATUS: u8 = 0x71;

/// Auto measure VCOM command (0x80)
pub const AUTO_MEASURE_VCOM: u8 = 0x80;

/// VCOM value command (0x81)
pub const VCOM_VALUE: u8 = 0x81;

/// VCM DC setting command (0x82)
pub const VCM_DC_SETTING: u8 = 0x82;

// Partial update

/// Partial window command (0x90)
///
/// Requires the 7-byte descriptor built by
/// [`Region::descriptor`](crate::display::Region::descriptor).
pub const PARTIAL_WINDOW: u8 = 0x90;

/// Partial in command (0x91): enter partial window mode
pub const PARTIAL_IN: u8 = 0x91;

/// Partial out command (0x92): leave partial window mode
pub const PARTIAL_OUT: u8 = 0x92;

/// Last byte of the partial window descriptor: gates scan inside and outside the window
pub const PARTIAL_SCAN_INSIDE_AND_OUTSIDE: u8 = 0x01;

// OTP

/// Program mode command (0xA0)
pub const PROGRAM_MODE: u8 = 0xA0;

/// Active program command (0xA1)
pub const ACTIVE_PROGRAM: u8 = 0xA1;

/// Read OTP data command (0xA2)
pub const READ_OTP_DATA: u8 = 0xA2;

/// Power saving command (0xE3)
pub const POWER_SAVING: u8 = 0xE3;
