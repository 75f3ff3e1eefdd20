//! In-memory mirror of the controller's display RAM
//!
//! [`Framebuffer`] owns a fixed-capacity byte array laid out exactly like the
//! SSD1306's page-organized RAM (see [`orientation`](crate::orientation)) and
//! provides the drawing primitives. It knows nothing about the bus: drawing
//! only mutates memory, and [`Display`](crate::Display) decides when and
//! which parts get transferred.
//!
//! Every drawing primitive clips to the panel and reports whether anything
//! was cut off through [`DrawStatus`]. Only [`Framebuffer::set_pixel`] treats
//! an out-of-range coordinate as an error.
//!
//! ## Example
//!
//! ```
//! use ssd1306_pages::{Dimensions, DrawStatus, Framebuffer, Orientation};
//!
//! let dims = match Dimensions::new(128, 32) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match Framebuffer::new(dims, Orientation::TopToBottom) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! assert_eq!(fb.draw_text(0, 0, "Hello", false), DrawStatus::Complete);
//! assert_eq!(fb.draw_int(100, 8, -1234, false), DrawStatus::Clipped);
//! assert_eq!(fb.draw_float(0, 16, 21.456, 2, true), DrawStatus::Complete);
//! ```

use core::fmt::Write;

use heapless::String;

use crate::config::{BuilderError, Dimensions, MAX_BUFFER_SIZE, Orientation};
use crate::error::OutOfBounds;
use crate::font::{BasicFont, Font, GLYPH_SIZE};
use crate::image::Image;
use crate::orientation::locate;

/// Outcome of a drawing operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawStatus {
    /// Everything requested landed on the panel
    Complete,
    /// Part of the requested content fell outside the panel and was dropped
    Clipped,
}

impl DrawStatus {
    /// Whether some content was dropped
    pub fn is_clipped(self) -> bool {
        self == Self::Clipped
    }

    fn clipped_if(clipped: bool) -> Self {
        if clipped { Self::Clipped } else { Self::Complete }
    }
}

/// Page-organized monochrome framebuffer
#[derive(Clone, Debug)]
pub struct Framebuffer {
    buffer: [u8; MAX_BUFFER_SIZE],
    dimensions: Dimensions,
    orientation: Orientation,
}

impl Framebuffer {
    /// Create a zeroed framebuffer for a panel
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if `dimensions` exceed the
    /// backing storage (possible when the public fields were set by hand).
    pub fn new(dimensions: Dimensions, orientation: Orientation) -> Result<Self, BuilderError> {
        let dimensions = Dimensions::new(dimensions.width, dimensions.height)?;
        Ok(Self {
            buffer: [0; MAX_BUFFER_SIZE],
            dimensions,
            orientation,
        })
    }

    /// Panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Row traversal order
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The active part of the buffer, `width * pages` bytes in RAM order
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.dimensions.buffer_size()]
    }

    /// The `width` bytes of one page, or `None` past the last page
    pub fn page(&self, page: u8) -> Option<&[u8]> {
        if page >= self.dimensions.pages() {
            return None;
        }
        let width = self.dimensions.width as usize;
        let start = page as usize * width;
        Some(&self.buffer[start..start + width])
    }

    /// Set or clear one pixel
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `x >= width` or `y >= height`. Bulk
    /// operations clip instead of failing.
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), OutOfBounds> {
        if self.plot(u32::from(x), u32::from(y), on) {
            Ok(())
        } else {
            Err(OutOfBounds { x, y })
        }
    }

    /// Read one pixel back, `None` outside the panel
    pub fn pixel(&self, x: u16, y: u16) -> Option<bool> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        let (index, bit) = locate(x, y, self.dimensions.width, self.orientation);
        Some(self.buffer[index] & bit != 0)
    }

    /// Set every pixel on (`0xFF` bytes) or off (`0x00` bytes)
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        let len = self.dimensions.buffer_size();
        self.buffer[..len].fill(value);
    }

    /// Set or clear the rectangle spanning `x1..=x2`, `y1..=y2`
    ///
    /// Inverted bounds are swapped. The rectangle is clipped to the panel; a
    /// rectangle entirely outside leaves the buffer untouched.
    pub fn fill_region(&mut self, x1: u16, x2: u16, y1: u16, y2: u16, on: bool) -> DrawStatus {
        let (x_lo, x_hi) = (x1.min(x2), x1.max(x2));
        let (y_lo, y_hi) = (y1.min(y2), y1.max(y2));
        let Dimensions { width, height } = self.dimensions;

        let clipped = x_hi >= width || y_hi >= height;
        if x_lo >= width || y_lo >= height {
            return DrawStatus::clipped_if(clipped);
        }

        for y in y_lo..=y_hi.min(height - 1) {
            for x in x_lo..=x_hi.min(width - 1) {
                self.plot(u32::from(x), u32::from(y), on);
            }
        }
        DrawStatus::clipped_if(clipped)
    }

    /// Render text with the built-in 8×8 font
    ///
    /// See [`draw_text_with`](Self::draw_text_with).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, invert: bool) -> DrawStatus {
        self.draw_text_with(&BasicFont, x, y, text, invert)
    }

    /// Render text with a caller-supplied font
    ///
    /// Each character occupies an 8×8 cell starting at the cursor, which
    /// advances 8 columns per character. The whole cell is painted: glyph ink
    /// sets pixels, background clears them, and `invert` swaps the two.
    /// Cells crossing the panel edge are clipped pixel by pixel.
    pub fn draw_text_with<F: Font + ?Sized>(
        &mut self,
        font: &F,
        x: u16,
        y: u16,
        text: &str,
        invert: bool,
    ) -> DrawStatus {
        let mut cursor = TextCursor::new(self, font, x, y, invert);
        text.chars().for_each(|c| cursor.put(c));
        cursor.finish()
    }

    /// Render a signed integer in decimal
    pub fn draw_int(&mut self, x: u16, y: u16, value: i32, invert: bool) -> DrawStatus {
        let mut text: String<11> = String::new();
        if write!(text, "{value}").is_err() {
            return DrawStatus::Clipped;
        }
        self.draw_text(x, y, &text, invert)
    }

    /// Render a float with `decimals` fractional digits
    ///
    /// The last displayed digit is rounded to nearest; exact binary ties
    /// round half to even, as `core::fmt` does. Non-finite values render as
    /// `NaN`, `inf` or `-inf`. Digits are streamed straight into glyph cells,
    /// so any `decimals` is honored and whatever runs past the right edge is
    /// reported as [`DrawStatus::Clipped`].
    pub fn draw_float(
        &mut self,
        x: u16,
        y: u16,
        value: f32,
        decimals: u8,
        invert: bool,
    ) -> DrawStatus {
        let decimals = usize::from(decimals);
        let mut cursor = TextCursor::new(self, &BasicFont, x, y, invert);
        if write!(cursor, "{value:.decimals$}").is_err() {
            return DrawStatus::Clipped;
        }
        cursor.finish()
    }

    /// Copy a bitmap with its top-left corner at `(x, y)`
    ///
    /// Set image bits become lit pixels (unlit with `invert`); the rest of
    /// the image rectangle is cleared (lit with `invert`).
    pub fn draw_image(&mut self, x: u16, y: u16, image: &Image<'_>, invert: bool) -> DrawStatus {
        let (x0, y0) = (u32::from(x), u32::from(y));
        let width = u32::from(self.dimensions.width);
        let height = u32::from(self.dimensions.height);
        let clipped =
            x0 + u32::from(image.width()) > width || y0 + u32::from(image.height()) > height;

        let visible_w = width.saturating_sub(x0).min(u32::from(image.width()));
        let visible_h = height.saturating_sub(y0).min(u32::from(image.height()));

        for iy in 0..visible_h {
            for ix in 0..visible_w {
                let on = image.pixel(ix as u16, iy as u16) ^ invert;
                self.plot(x0 + ix, y0 + iy, on);
            }
        }
        DrawStatus::clipped_if(clipped)
    }

    /// Paint one glyph cell, returning whether any of it was clipped
    fn blit_glyph(&mut self, x: u32, y: u32, glyph: &[u8; 8], invert: bool) -> bool {
        let mut clipped = false;
        for (row, bits) in (0u32..).zip(glyph.iter()) {
            for col in 0..u32::from(GLYPH_SIZE) {
                let ink = (bits >> col) & 1 != 0;
                clipped |= !self.plot(x + col, y + row, ink ^ invert);
            }
        }
        clipped
    }

    /// Write one bit if the pixel is on the panel; returns whether it was
    pub(crate) fn plot(&mut self, x: u32, y: u32, on: bool) -> bool {
        if x >= u32::from(self.dimensions.width) || y >= u32::from(self.dimensions.height) {
            return false;
        }
        let (index, bit) = locate(x as u16, y as u16, self.dimensions.width, self.orientation);
        if on {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
        true
    }
}

/// Left-to-right run of glyph cells on one text row
struct TextCursor<'a, F: Font + ?Sized> {
    framebuffer: &'a mut Framebuffer,
    font: &'a F,
    x: u32,
    y: u32,
    invert: bool,
    clipped: bool,
}

impl<'a, F: Font + ?Sized> TextCursor<'a, F> {
    fn new(framebuffer: &'a mut Framebuffer, font: &'a F, x: u16, y: u16, invert: bool) -> Self {
        Self {
            framebuffer,
            font,
            x: u32::from(x),
            y: u32::from(y),
            invert,
            clipped: false,
        }
    }

    /// Paint the next cell; cells starting past the right edge are dropped
    fn put(&mut self, c: char) {
        if self.x >= u32::from(self.framebuffer.dimensions.width) {
            self.clipped = true;
            return;
        }
        let glyph = self.font.glyph(c);
        self.clipped |= self
            .framebuffer
            .blit_glyph(self.x, self.y, &glyph, self.invert);
        self.x += u32::from(GLYPH_SIZE);
    }

    fn finish(self) -> DrawStatus {
        DrawStatus::clipped_if(self.clipped)
    }
}

impl<F: Font + ?Sized> Write for TextCursor<'_, F> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        s.chars().for_each(|c| self.put(c));
        Ok(())
    }
}
