//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_WIDTH};

/// Capacity of the framebuffer backing storage in bytes (128 columns × 8 pages)
pub const MAX_BUFFER_SIZE: usize = MAX_WIDTH as usize * (MAX_HEIGHT as usize / 8);

/// Highest bus clock the controller accepts (I²C fast mode)
pub const MAX_BUS_SPEED_HZ: u32 = 400_000;

/// Factory default I²C address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate I²C address (SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Panel dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (one segment per column)
    pub width: u16,
    /// Height in pixels (8 rows per page)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_WIDTH
    /// - height == 0 or height > MAX_HEIGHT
    /// - height % 8 != 0 (rows are grouped into 8-row pages)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT || !height.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        (self.height / 8) as u8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }

    fn is_valid(&self) -> bool {
        Self::new(self.width, self.height).is_ok()
    }
}

/// Row traversal order within a page
///
/// Selects which bit of a RAM byte holds the topmost row of its page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Orientation {
    /// Bit 0 is the top row of the page
    #[default]
    TopToBottom,
    /// Bit 7 is the top row of the page
    BottomToTop,
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Row traversal order
    pub orientation: Orientation,
    /// 7-bit I²C device address
    pub address: u8,
    /// Bus clock the transport was configured with
    pub bus_speed_hz: u32,
    /// Contrast level sent during initialization
    pub contrast: u8,
}

impl Config {
    /// Re-check every field against controller limits
    ///
    /// `Config` fields are public, so [`Display::init`](crate::Display::init)
    /// calls this again before touching the bus.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if !self.dimensions.is_valid() {
            return Err(BuilderError::InvalidDimensions {
                width: self.dimensions.width,
                height: self.dimensions.height,
            });
        }
        if self.address > 0x7F {
            return Err(BuilderError::InvalidAddress(self.address));
        }
        if self.bus_speed_hz == 0 || self.bus_speed_hz > MAX_BUS_SPEED_HZ {
            return Err(BuilderError::InvalidBusSpeed(self.bus_speed_hz));
        }
        Ok(())
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_pages::{Builder, Dimensions, Orientation};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .orientation(Orientation::TopToBottom)
///     .address(0x3D)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dimensions.pages(), 4);
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Row traversal order
    orientation: Orientation,
    /// 7-bit I²C device address
    address: u8,
    /// Bus clock in hertz
    bus_speed_hz: u32,
    /// Initial contrast
    contrast: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            orientation: Orientation::TopToBottom,
            address: DEFAULT_ADDRESS,
            bus_speed_hz: MAX_BUS_SPEED_HZ,
            contrast: 0x7F,
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

    /// Set row traversal order
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the 7-bit device address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the bus clock the transport runs at
    pub fn bus_speed_hz(mut self, hz: u32) -> Self {
        self.bus_speed_hz = hz;
        self
    }

    /// Set the contrast sent during initialization
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or the first failure reported by [`Config::validate`].
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            orientation: self.orientation,
            address: self.address,
            bus_speed_hz: self.bus_speed_hz,
            contrast: self.contrast,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_limits() {
        assert!(Dimensions::new(128, 64).is_ok());
        assert!(Dimensions::new(1, 8).is_ok());
        assert!(Dimensions::new(0, 64).is_err());
        assert!(Dimensions::new(129, 64).is_err());
        assert!(Dimensions::new(128, 72).is_err());
        assert!(Dimensions::new(128, 0).is_err());
        assert!(matches!(
            Dimensions::new(128, 30),
            Err(BuilderError::InvalidDimensions {
                width: 128,
                height: 30
            })
        ));
    }

    #[test]
    fn test_dimensions_pages_and_size() {
        let dims = Dimensions::new(96, 16).unwrap();
        assert_eq!(dims.pages(), 2);
        assert_eq!(dims.buffer_size(), 192);
        assert_eq!(
            Dimensions::new(128, 64).unwrap().buffer_size(),
            MAX_BUFFER_SIZE
        );
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.bus_speed_hz, MAX_BUS_SPEED_HZ);
        assert_eq!(config.orientation, Orientation::TopToBottom);
    }

    #[test]
    fn test_builder_rejects_wide_address() {
        let result = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .address(0x80)
            .build();
        assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
    }

    #[test]
    fn test_builder_rejects_bus_speed() {
        let dims = Dimensions::new(128, 64).unwrap();
        let fast = Builder::new().dimensions(dims).bus_speed_hz(1_000_000).build();
        assert!(matches!(fast, Err(BuilderError::InvalidBusSpeed(1_000_000))));

        let zero = Builder::new().dimensions(dims).bus_speed_hz(0).build();
        assert!(matches!(zero, Err(BuilderError::InvalidBusSpeed(0))));
    }

    #[test]
    fn test_validate_catches_hand_built_geometry() {
        let mut config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        config.dimensions.height = 65;
        assert!(matches!(
            config.validate(),
            Err(BuilderError::InvalidDimensions { .. })
        ));
    }
}
