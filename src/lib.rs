//! SSD1306 OLED Display Driver
//!
//! A page-buffered driver for the SSD1306 monochrome OLED controller over I²C,
//! supporting panels up to 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible, no heap: the framebuffer is a fixed 1 KiB array
//! - `embedded-hal` v1.0 support; the I²C bus can be borrowed
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in 8×8 text, integer and fixed-point float rendering
//! - Packed bitmap images in row-major or page layout
//! - Segment, page and full-buffer transfers to display RAM
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_pages::{Builder, Dimensions, Display, I2cInterface, Orientation};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut bus = MockI2c;
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new()
//!     .dimensions(dims)
//!     .orientation(Orientation::TopToBottom)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(I2cInterface::new(&mut bus), config);
//! if display.init().is_err() {
//!     return;
//! }
//! let _ = display.draw_text(0, 0, "Ready", false);
//! let _ = display.buffer_to_ram();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Device handle and RAM transfers
pub mod display;
/// Error types for the driver
pub mod error;
/// 8×8 glyph lookup
pub mod font;
/// Framebuffer model and drawing primitives
pub mod framebuffer;
/// Packed monochrome bitmaps
pub mod image;
/// Bus interface abstraction
pub mod interface;
/// Pixel to RAM byte/bit addressing
pub mod orientation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{
    ALTERNATE_ADDRESS, Builder, Config, DEFAULT_ADDRESS, Dimensions, MAX_BUFFER_SIZE,
    MAX_BUS_SPEED_HZ, MAX_HEIGHT, MAX_WIDTH, Orientation,
};
pub use display::{Display, State};
pub use error::{BuilderError, Error, ImageError, OutOfBounds};
pub use font::{BasicFont, Font};
pub use framebuffer::{DrawStatus, Framebuffer};
pub use image::{Image, ImageLayout};
pub use interface::{DisplayInterface, I2cInterface, InterfaceError};
