//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::command::{
    BOOSTER_SOFT_START, DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2, DEEP_SLEEP,
    DEEP_SLEEP_CHECK_CODE, DISPLAY_REFRESH, PANEL_SETTING, PARTIAL_IN, PARTIAL_OUT,
    PARTIAL_SCAN_INSIDE_AND_OUTSIDE, PARTIAL_WINDOW, POWER_ON, TCON_RESOLUTION,
    VCM_DC_SETTING, VCOM_AND_DATA_INTERVAL_SETTING,
};
use crate::config::{Config, Dimensions, PanelOrientation};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver-side view of the panel
///
/// Only what the driver itself did is tracked; the controller's internal state
/// is observable through the busy line alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Reset or never initialized
    #[default]
    Uninitialized,
    /// Bring-up sequence sent
    Ready,
    /// Deep sleep entered; only a hardware reset wakes the panel
    Asleep,
}

/// Region specification for partial updates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// X coordinate in pixels, rounded down to a multiple of 8 on the wire
    pub x: u16,
    /// Y coordinate in pixels
    pub y: u16,
    /// Width in pixels
    pub w: u16,
    /// Height in pixels
    pub h: u16,
}

impl Region {
    /// Create a new region
    #[allow(clippy::many_single_char_names)]
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Partial window parameters
    ///
    /// The horizontal start is rounded down to a byte boundary and the end has
    /// its low 3 bits forced to 1, so the window always covers whole bytes.
    /// Vertical bounds are big-endian.
    pub fn descriptor(&self) -> [u8; 7] {
        let x_start = self.x & 0xF8;
        let x_end = x_start.wrapping_add(self.w).wrapping_sub(1) | 0x07;
        let y_end = self.y.wrapping_add(self.h).wrapping_sub(1);
        [
            x_start as u8,
            x_end as u8,
            (self.y >> 8) as u8,
            (self.y & 0xFF) as u8,
            (y_end >> 8) as u8,
            (y_end & 0xFF) as u8,
            PARTIAL_SCAN_INSIDE_AND_OUTSIDE,
        ]
    }

    /// Bytes transmitted per plane for this region
    pub fn buffer_size(&self) -> usize {
        (self.w as usize / 8) * self.h as usize
    }

    fn fits(&self, dims: &Dimensions) -> bool {
        self.w != 0
            && self.h != 0
            && self.x.saturating_add(self.w) <= dims.width
            && self.y.saturating_add(self.h) <= dims.height
    }
}

/// Data for a partial window transfer
///
/// For each plane with its transmit flag set, the buffer is sent if present,
/// otherwise the plane's window is filled with zero bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartialUpdate<'a> {
    /// Target window
    pub region: Region,
    /// Black plane bytes for the window
    pub black: Option<&'a [u8]>,
    /// Red plane bytes for the window
    pub red: Option<&'a [u8]>,
    /// Whether the black plane is written
    pub transmit_black: bool,
    /// Whether the red plane is written
    pub transmit_red: bool,
}

impl<'a> PartialUpdate<'a> {
    /// Write both planes of `region`
    pub fn new(region: Region, black: Option<&'a [u8]>, red: Option<&'a [u8]>) -> Self {
        Self {
            region,
            black,
            red,
            transmit_black: true,
            transmit_red: true,
        }
    }

    /// Write only the black plane of `region`
    pub fn black(region: Region, buffer: Option<&'a [u8]>) -> Self {
        Self {
            region,
            black: buffer,
            red: None,
            transmit_black: true,
            transmit_red: false,
        }
    }

    /// Write only the red plane of `region`
    pub fn red(region: Region, buffer: Option<&'a [u8]>) -> Self {
        Self {
            region,
            black: None,
            red: buffer,
            transmit_black: false,
            transmit_red: true,
        }
    }
}

/// Controller driver for the 2.9" tri-color panel
///
/// Frame data comes from caller-owned buffers (see [`Paint`](crate::paint::Paint));
/// the driver itself holds no pixel memory.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// What the driver last did to the panel
    state: PanelState,
    /// Called once per busy sample while waiting
    yield_hook: Option<fn()>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: PanelState::Uninitialized,
            yield_hook: None,
        }
    }

    /// Install a hook run on every busy sample
    ///
    /// Lets a cooperative scheduler make progress while the panel works.
    pub fn with_yield_hook(mut self, hook: fn()) -> Self {
        self.yield_hook = Some(hook);
        self
    }

    /// Replace or remove the busy-wait hook
    pub fn set_yield_hook(&mut self, hook: Option<fn()>) {
        self.yield_hook = hook;
    }

    /// Claim the interface, reset the panel and send the bring-up sequence
    ///
    /// Uses the orientation from the configuration. Blocks after power-on until
    /// the panel reports idle.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("init: {:?}", self.config.orientation);
        self.interface.claim().map_err(Error::Interface)?;
        self.reset(delay)?;

        self.send_command(BOOSTER_SOFT_START)?;
        let booster = self.config.booster_soft_start;
        self.send_data(&booster)?;

        self.send_command(POWER_ON)?;
        self.poll_busy(delay, 0)?;

        self.send_command(PANEL_SETTING)?;
        self.send_data(&[self.config.panel_setting_byte()])?;

        self.send_command(VCOM_AND_DATA_INTERVAL_SETTING)?;
        self.send_data(&[self.config.vcom_data_interval])?;

        self.send_command(TCON_RESOLUTION)?;
        let resolution = self.config.init_resolution();
        self.send_data(&resolution)?;

        self.send_command(VCM_DC_SETTING)?;
        self.send_data(&[self.config.vcm_dc])?;

        self.state = PanelState::Ready;
        debug!("init: done");
        Ok(())
    }

    /// [`init`](Self::init) with a different panel scan direction
    ///
    /// The orientation is kept for later re-initializations.
    pub fn init_with_orientation<D: DelayNs>(
        &mut self,
        orientation: PanelOrientation,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.config.orientation = orientation;
        self.init(delay)
    }

    /// Pulse the reset line
    ///
    /// Wakes the panel from deep sleep. The bring-up sequence must be sent
    /// again afterwards.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("reset: hold {}ms", self.config.reset_hold_ms);
        self.interface
            .reset(delay, self.config.reset_hold_ms)
            .map_err(Error::Interface)?;
        self.state = PanelState::Uninitialized;
        Ok(())
    }

    /// Send a command to the display controller
    pub fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        trace!("command {:#04x}", cmd);
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    pub fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Send `value` as data `count` times
    pub fn send_data_repeated(&mut self, value: u8, count: usize) -> DisplayResult<I> {
        self.interface
            .send_data_repeated(value, count)
            .map_err(Error::Interface)
    }

    /// Sample the busy line once
    pub fn is_busy(&mut self) -> Result<bool, Error<I>> {
        self.interface.is_busy().map_err(Error::Interface)
    }

    /// Block until the panel reports idle
    ///
    /// Polls every `busy_poll_ms`. There is no timeout: a panel that never
    /// releases the busy line blocks forever.
    pub fn wait_until_idle<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.poll_busy(delay, self.config.busy_poll_ms)
    }

    /// Fill both planes with the configured clear value
    ///
    /// Stages the data only; call [`refresh`](Self::refresh) to show it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] without touching the bus if the panel is busy.
    pub fn clear_frame<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.ensure_idle()?;
        debug!("clear_frame: fill {:#04x}", self.config.clear_value);

        self.send_command(TCON_RESOLUTION)?;
        let resolution = self.config.frame_resolution();
        self.send_data(&resolution)?;

        let size = self.config.dimensions.buffer_size();
        let fill = self.config.clear_value;
        for cmd in [DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2] {
            self.send_command(cmd)?;
            delay.delay_ms(self.config.settle_ms);
            self.send_data_repeated(fill, size)?;
            delay.delay_ms(self.config.settle_ms);
        }
        Ok(())
    }

    /// Write a window of one or both planes
    ///
    /// Does not refresh the panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] for an empty window or one that leaves
    /// the panel, [`Error::BufferTooSmall`] if a supplied buffer is shorter than
    /// [`Region::buffer_size`] and [`Error::Busy`] if the panel is busy. Nothing
    /// is sent in any of these cases.
    pub fn set_partial_window<D: DelayNs>(
        &mut self,
        update: PartialUpdate<'_>,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let Region { x, y, w, h } = update.region;
        if !update.region.fits(&self.config.dimensions) {
            return Err(Error::InvalidWindow { x, y, w, h });
        }
        let size = update.region.buffer_size();
        let planes = [
            (update.transmit_black, update.black),
            (update.transmit_red, update.red),
        ];
        for (_, buffer) in planes.iter().filter(|(transmit, _)| *transmit) {
            check_len::<I>(*buffer, size)?;
        }
        self.ensure_idle()?;

        let descriptor = update.region.descriptor();
        trace!("partial window {:02x?}", descriptor);
        self.send_command(PARTIAL_IN)?;
        self.send_command(PARTIAL_WINDOW)?;
        self.send_data(&descriptor)?;
        delay.delay_ms(self.config.settle_ms);

        let commands = [DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2];
        for (cmd, (transmit, buffer)) in commands.into_iter().zip(planes) {
            if !transmit {
                continue;
            }
            self.send_command(cmd)?;
            match buffer {
                Some(data) => self.send_data(&data[..size])?,
                None => self.send_data_repeated(0x00, size)?,
            }
            delay.delay_ms(self.config.settle_ms);
        }

        self.send_command(PARTIAL_OUT)
    }

    /// Write a window of the black plane only
    pub fn set_partial_window_black<D: DelayNs>(
        &mut self,
        region: Region,
        buffer: Option<&[u8]>,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.set_partial_window(PartialUpdate::black(region, buffer), delay)
    }

    /// Write a window of the red plane only
    pub fn set_partial_window_red<D: DelayNs>(
        &mut self,
        region: Region,
        buffer: Option<&[u8]>,
        delay: &mut D,
    ) -> DisplayResult<I> {
        self.set_partial_window(PartialUpdate::red(region, buffer), delay)
    }

    /// Transmit full planes and refresh the panel
    ///
    /// `None` leaves that plane's RAM as it is. The refresh is only started;
    /// call [`wait_until_idle`](Self::wait_until_idle) to wait for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] or [`Error::Busy`] before any bus
    /// activity.
    pub fn display_frame<D: DelayNs>(
        &mut self,
        black: Option<&[u8]>,
        red: Option<&[u8]>,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let size = self.config.dimensions.buffer_size();
        check_len::<I>(black, size)?;
        check_len::<I>(red, size)?;
        self.ensure_idle()?;

        let planes = [(DATA_START_TRANSMISSION_1, black), (DATA_START_TRANSMISSION_2, red)];
        for (cmd, buffer) in planes {
            let Some(data) = buffer else {
                continue;
            };
            self.send_command(cmd)?;
            delay.delay_ms(self.config.settle_ms);
            self.send_data(&data[..size])?;
            delay.delay_ms(self.config.settle_ms);
        }

        debug!("refresh");
        self.send_command(DISPLAY_REFRESH)
    }

    /// Refresh the panel from the data already in its RAM
    ///
    /// # Errors
    ///
    /// Returns [`Error::Busy`] without touching the bus if the panel is busy.
    pub fn refresh(&mut self) -> DisplayResult<I> {
        self.ensure_idle()?;
        debug!("refresh");
        self.send_command(DISPLAY_REFRESH)
    }

    /// Enter deep sleep
    ///
    /// The panel ignores everything but a hardware reset afterwards; call
    /// [`init`](Self::init) to bring it back.
    pub fn sleep(&mut self) -> DisplayResult<I> {
        debug!("sleep");
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[DEEP_SLEEP_CHECK_CODE])?;
        self.state = PanelState::Asleep;
        Ok(())
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get panel scan direction
    pub fn orientation(&self) -> PanelOrientation {
        self.config.orientation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// What the driver last did to the panel
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn ensure_idle(&mut self) -> DisplayResult<I> {
        if self.is_busy()? {
            warn!("panel busy, update refused");
            return Err(Error::Busy);
        }
        Ok(())
    }

    fn poll_busy<D: DelayNs>(&mut self, delay: &mut D, interval_ms: u32) -> DisplayResult<I> {
        while self.is_busy()? {
            if let Some(hook) = self.yield_hook {
                hook();
            }
            if interval_ms > 0 {
                delay.delay_ms(interval_ms);
            }
        }
        Ok(())
    }
}

fn check_len<I: DisplayInterface>(buffer: Option<&[u8]>, required: usize) -> DisplayResult<I> {
    match buffer {
        Some(data) if data.len() < required => Err(Error::BufferTooSmall {
            required,
            provided: data.len(),
        }),
        _ => Ok(()),
    }
}
