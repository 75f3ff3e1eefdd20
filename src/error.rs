//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]), framebuffer pixel access ([`OutOfBounds`])
//! and bitmap construction ([`ImageError`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! ## Example
//!
//! ```
//! use ssd1306_pages::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(128, 60); // Not a whole number of pages
//! assert!(result.is_err());
//! ```

use crate::display::State;
use crate::interface::DisplayInterface;

/// Maximum segment outputs (columns) supported by the SSD1306 controller
pub const MAX_WIDTH: u16 = 128;

/// Maximum common outputs (rows) supported by the SSD1306 controller
///
/// Must be a multiple of 8; rows are addressed in pages of eight.
pub const MAX_HEIGHT: u16 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (bus write failed)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation verbatim.
    Interface(I::Error),
    /// Operation not allowed in the handle's current lifecycle state
    NotReady {
        /// State the handle was in
        state: State,
    },
    /// Pixel coordinates outside the panel
    OutOfRange {
        /// X coordinate requested
        x: u16,
        /// Y coordinate requested
        y: u16,
    },
    /// Page or segment range that is inverted or exceeds the panel
    InvalidRange {
        /// First index requested
        start: u8,
        /// Last index requested (inclusive)
        end: u8,
        /// Number of valid indices
        limit: u16,
    },
    /// Configuration rejected at init time
    InvalidConfig(BuilderError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotReady { state } => write!(f, "Display not ready (state: {state:?})"),
            Self::OutOfRange { x, y } => write!(f, "Pixel out of range: ({x}, {y})"),
            Self::InvalidRange { start, end, limit } => {
                write!(f, "Invalid range {start}..={end} (limit {limit})")
            }
            Self::InvalidConfig(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<OutOfBounds> for Error<I> {
    fn from(e: OutOfBounds) -> Self {
        Self::OutOfRange { x: e.x, y: e.y }
    }
}

/// Errors that can occur when building configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
    /// Device address does not fit in 7 bits
    InvalidAddress(u8),
    /// Bus clock is zero or above [`MAX_BUS_SPEED_HZ`](crate::config::MAX_BUS_SPEED_HZ)
    InvalidBusSpeed(u32),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT}, height must be multiple of 8)"
            ),
            Self::InvalidAddress(address) => {
                write!(f, "Invalid device address {address:#04x} (must be 7-bit)")
            }
            Self::InvalidBusSpeed(hz) => write!(f, "Invalid bus speed {hz} Hz"),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Pixel write outside the framebuffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutOfBounds {
    /// X coordinate requested
    pub x: u16,
    /// Y coordinate requested
    pub y: u16,
}

impl core::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Pixel ({}, {}) outside framebuffer", self.x, self.y)
    }
}

impl core::error::Error for OutOfBounds {}

/// Errors that can occur when wrapping bitmap data
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageError {
    /// Data slice is shorter than the declared width and height need
    DataTooShort {
        /// Required length in bytes
        required: usize,
        /// Provided length in bytes
        provided: usize,
    },
}

impl core::fmt::Display for ImageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DataTooShort { required, provided } => write!(
                f,
                "Image data too short: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for ImageError {}
