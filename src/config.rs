//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Maximum gate outputs (rows) driven by the controller
pub const MAX_GATE_OUTPUTS: u16 = 296;

/// Maximum source outputs (columns) driven by the controller
pub const MAX_SOURCE_OUTPUTS: u16 = 160;

/// Panel dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (source outputs)
    pub width: u16,
    /// Height in pixels (gate outputs)
    pub height: u16,
}

impl Dimensions {
    /// Native geometry of the Waveshare 2.9" (B) panel
    pub const EPD_2IN9B: Self = Self {
        width: 128,
        height: 296,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is zero, above MAX_SOURCE_OUTPUTS, or not a multiple of 8
    /// - height is zero or above MAX_GATE_OUTPUTS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_SOURCE_OUTPUTS || width % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Calculate the size of one full-frame plane in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize / 8 * self.height as usize
    }
}

/// Panel scan direction, encoded in the panel setting byte
///
/// This is the controller's notion of orientation. It is unrelated to the
/// logical rotation of a [`Paint`](crate::paint::Paint) canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelOrientation {
    /// Native scan direction
    #[default]
    Normal,
    /// Both gate and source scan reversed
    NormalFlipped,
    /// Source scan reversed
    Mirrored,
    /// Gate scan reversed
    MirroredFlipped,
}

impl PanelOrientation {
    /// Scan direction bits OR'ed into the panel setting byte
    pub fn panel_bits(self) -> u8 {
        match self {
            Self::Normal => 0b0000,
            Self::NormalFlipped => 0b1100,
            Self::Mirrored => 0b0100,
            Self::MirroredFlipped => 0b1000,
        }
    }
}

/// Display configuration
///
/// Holds the bring-up parameters and timing of the controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Panel scan direction
    pub orientation: PanelOrientation,
    /// Booster soft-start phases (3 bytes for command 0x06)
    pub booster_soft_start: [u8; 3],
    /// Panel setting byte before the orientation bits are OR'ed in
    pub panel_setting: u8,
    /// VCOM and data interval byte
    pub vcom_data_interval: u8,
    /// VCM DC setting byte
    pub vcm_dc: u8,
    /// How long RST is held low, then high, during a hardware reset
    pub reset_hold_ms: u32,
    /// Busy line polling interval of `wait_until_idle`
    pub busy_poll_ms: u32,
    /// Pause around frame data transmissions
    pub settle_ms: u32,
    /// Fill byte written to both planes by `clear_frame`
    pub clear_value: u8,
}

impl Config {
    /// Panel setting byte with the orientation bits applied
    pub fn panel_setting_byte(&self) -> u8 {
        self.panel_setting | self.orientation.panel_bits()
    }

    /// Resolution parameters sent during initialization
    ///
    /// The horizontal resolution is a single byte; its low 3 bits are ignored
    /// by the controller.
    pub fn init_resolution(&self) -> [u8; 3] {
        let height = self.dimensions.height;
        [
            self.dimensions.width as u8,
            (height >> 8) as u8,
            (height & 0xFF) as u8,
        ]
    }

    /// Resolution parameters sent by `clear_frame`
    pub fn frame_resolution(&self) -> [u8; 4] {
        let Dimensions { width, height } = self.dimensions;
        [
            (width >> 8) as u8,
            (width & 0xFF) as u8,
            (height >> 8) as u8,
            (height & 0xFF) as u8,
        ]
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use epd2in9b::{Builder, Dimensions, PanelOrientation};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::EPD_2IN9B)
///     .orientation(PanelOrientation::Mirrored)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Panel scan direction
    orientation: PanelOrientation,
    /// Booster soft-start phases
    booster_soft_start: [u8; 3],
    /// Panel setting base byte
    panel_setting: u8,
    /// VCOM and data interval byte
    vcom_data_interval: u8,
    /// VCM DC setting byte
    vcm_dc: u8,
    /// Reset hold time
    reset_hold_ms: u32,
    /// Busy polling interval
    busy_poll_ms: u32,
    /// Settle delay around data transmissions
    settle_ms: u32,
    /// Fill byte for `clear_frame`
    clear_value: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            orientation: PanelOrientation::Normal,
            booster_soft_start: [0x17, 0x17, 0x17],
            // 128x296, LUT from OTP, black/white/red mode, booster on, no soft reset
            panel_setting: 0x83,
            // Border white, VCOM and data interval 10 hsync
            vcom_data_interval: 0x77,
            vcm_dc: 0x0A,
            reset_hold_ms: 200,
            busy_poll_ms: 100,
            settle_ms: 2,
            clear_value: 0xFF,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set panel scan direction
    pub fn orientation(mut self, orientation: PanelOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set booster soft-start phases
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set the panel setting base byte
    pub fn panel_setting(mut self, value: u8) -> Self {
        self.panel_setting = value;
        self
    }

    /// Set the VCOM and data interval byte
    pub fn vcom_data_interval(mut self, value: u8) -> Self {
        self.vcom_data_interval = value;
        self
    }

    /// Set the VCM DC byte
    pub fn vcm_dc(mut self, value: u8) -> Self {
        self.vcm_dc = value;
        self
    }

    /// Set the reset hold time in milliseconds
    pub fn reset_hold_ms(mut self, value: u32) -> Self {
        self.reset_hold_ms = value;
        self
    }

    /// Set the busy polling interval in milliseconds
    pub fn busy_poll_ms(mut self, value: u32) -> Self {
        self.busy_poll_ms = value;
        self
    }

    /// Set the settle delay around data transmissions in milliseconds
    pub fn settle_ms(mut self, value: u32) -> Self {
        self.settle_ms = value;
        self
    }

    /// Set the fill byte written by `clear_frame`
    pub fn clear_value(mut self, value: u8) -> Self {
        self.clear_value = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            orientation: self.orientation,
            booster_soft_start: self.booster_soft_start,
            panel_setting: self.panel_setting,
            vcom_data_interval: self.vcom_data_interval,
            vcm_dc: self.vcm_dc,
            reset_hold_ms: self.reset_hold_ms,
            busy_poll_ms: self.busy_poll_ms,
            settle_ms: self.settle_ms,
            clear_value: self.clear_value,
        })
    }
}
