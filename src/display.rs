//! Core display operations
//!
//! [`Display`] is the device handle: it binds a bus interface, a validated
//! [`Config`] and the [`Framebuffer`] mirroring the controller's RAM.
//!
//! Drawing and presenting are separate steps. Drawing calls only touch the
//! framebuffer; nothing reaches the panel until one of the `*_to_ram`
//! transfers is called for the region that changed.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --init()--> Ready --deinit()--> Closed
//! ```
//!
//! Every drawing and transfer operation requires [`State::Ready`] and fails
//! with [`Error::NotReady`] otherwise.

use log::{debug, trace};

use crate::command::{
    DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY, SET_CONTRAST, init_sequence,
    page_address,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::{DrawStatus, Framebuffer};
use crate::image::Image;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;
type DrawResult<I> = core::result::Result<DrawStatus, Error<I>>;

/// Lifecycle state of a [`Display`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Created, controller not configured yet
    #[default]
    Uninitialized,
    /// Controller configured, framebuffer allocated
    Ready,
    /// Deinitialized; terminal
    Closed,
}

/// SSD1306 device handle
///
/// Owns the framebuffer and the bus interface value. To keep the bus usable
/// by other peripherals, hand in an interface over `&mut bus`
/// (see [`I2cInterface`](crate::I2cInterface)).
///
/// ## Example
///
/// ```rust,no_run
/// use embedded_hal::i2c::{ErrorType, I2c, Operation};
/// use ssd1306_pages::{Builder, Dimensions, Display, I2cInterface};
/// # use core::convert::Infallible;
/// # struct MockI2c;
/// # impl ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # let mut bus = MockI2c;
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
///
/// let mut display = Display::new(I2cInterface::new(&mut bus), config);
/// let _ = display.init();
///
/// // Compose a frame, then present it
/// let _ = display.draw_text(0, 0, "Temp:", false);
/// let _ = display.draw_float(48, 0, 21.456, 1, false);
/// let _ = display.page_to_ram(0);
///
/// let _ = display.deinit();
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Bus interface
    interface: I,
    /// Display configuration
    config: Config,
    /// RAM mirror, present only while `Ready`
    framebuffer: Option<Framebuffer>,
    /// Lifecycle state
    state: State,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new, uninitialized Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            framebuffer: None,
            state: State::Uninitialized,
        }
    }

    /// Validate the configuration, configure the controller and zero the framebuffer
    ///
    /// # Errors
    ///
    /// - `Error::NotReady` if the handle was already initialized or closed
    /// - `Error::InvalidConfig` if the configuration fails validation
    /// - `Error::Interface` if the bring-up sequence cannot be written; the
    ///   handle stays `Uninitialized`
    pub fn init(&mut self) -> DisplayResult<I> {
        if self.state != State::Uninitialized {
            return Err(Error::NotReady { state: self.state });
        }
        self.config.validate().map_err(Error::InvalidConfig)?;
        let framebuffer = Framebuffer::new(self.config.dimensions, self.config.orientation)
            .map_err(Error::InvalidConfig)?;

        debug!(
            "initializing SSD1306 {}x{} at {:#04x}",
            self.config.dimensions.width, self.config.dimensions.height, self.config.address
        );
        let sequence = init_sequence(&self.config);
        self.send_commands(&sequence)?;

        self.framebuffer = Some(framebuffer);
        self.state = State::Ready;
        Ok(())
    }

    /// Release the framebuffer and close the handle
    ///
    /// Idempotent once closed. No bus traffic is generated; the panel keeps
    /// showing whatever its RAM holds.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotReady` if the handle was never initialized.
    pub fn deinit(&mut self) -> DisplayResult<I> {
        match self.state {
            State::Uninitialized => Err(Error::NotReady { state: self.state }),
            State::Closed => Ok(()),
            State::Ready => {
                debug!("deinitializing SSD1306 at {:#04x}", self.config.address);
                self.framebuffer = None;
                self.state = State::Closed;
                Ok(())
            }
        }
    }

    /// Consume the handle and give the interface back
    pub fn release(self) -> I {
        self.interface
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The framebuffer, while `Ready`
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    /// The framebuffer for direct drawing, while `Ready`
    pub fn framebuffer_mut(&mut self) -> Option<&mut Framebuffer> {
        self.framebuffer.as_mut()
    }

    // Drawing

    /// Set every pixel on or off
    pub fn fill(&mut self, on: bool) -> DisplayResult<I> {
        self.ready_mut()?.fill(on);
        Ok(())
    }

    /// Set or clear one pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` for coordinates outside the panel.
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> DisplayResult<I> {
        self.ready_mut()?.set_pixel(x, y, on)?;
        Ok(())
    }

    /// Set or clear the rectangle spanning `x1..=x2`, `y1..=y2`
    pub fn fill_region(&mut self, x1: u16, x2: u16, y1: u16, y2: u16, on: bool) -> DrawResult<I> {
        Ok(self.ready_mut()?.fill_region(x1, x2, y1, y2, on))
    }

    /// Render text with the built-in 8×8 font
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, invert: bool) -> DrawResult<I> {
        Ok(self.ready_mut()?.draw_text(x, y, text, invert))
    }

    /// Render text with a caller-supplied font
    pub fn draw_text_with<F: Font + ?Sized>(
        &mut self,
        font: &F,
        x: u16,
        y: u16,
        text: &str,
        invert: bool,
    ) -> DrawResult<I> {
        Ok(self.ready_mut()?.draw_text_with(font, x, y, text, invert))
    }

    /// Render a signed integer in decimal
    pub fn draw_int(&mut self, x: u16, y: u16, value: i32, invert: bool) -> DrawResult<I> {
        Ok(self.ready_mut()?.draw_int(x, y, value, invert))
    }

    /// Render a float with `decimals` fractional digits
    pub fn draw_float(
        &mut self,
        x: u16,
        y: u16,
        value: f32,
        decimals: u8,
        invert: bool,
    ) -> DrawResult<I> {
        Ok(self.ready_mut()?.draw_float(x, y, value, decimals, invert))
    }

    /// Copy a bitmap with its top-left corner at `(x, y)`
    pub fn draw_image(&mut self, x: u16, y: u16, image: &Image<'_>, invert: bool) -> DrawResult<I> {
        Ok(self.ready_mut()?.draw_image(x, y, image, invert))
    }

    // Transfers

    /// Transfer one byte of RAM
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if `page` or `segment` is past the panel.
    pub fn segment_to_ram(&mut self, page: u8, segment: u8) -> DisplayResult<I> {
        self.segments_to_ram(page, segment, segment)
    }

    /// Transfer segments `start..=end` of one page
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if `start > end`, `end` is past the
    /// panel width, or `page` is past the last page. Nothing is sent then.
    pub fn segments_to_ram(&mut self, page: u8, start: u8, end: u8) -> DisplayResult<I> {
        let dims = self.ready()?.dimensions();
        if page >= dims.pages() {
            return Err(Error::InvalidRange {
                start: page,
                end: page,
                limit: u16::from(dims.pages()),
            });
        }
        if start > end || u16::from(end) >= dims.width {
            return Err(Error::InvalidRange {
                start,
                end,
                limit: dims.width,
            });
        }
        self.transfer(page, start, end)
    }

    /// Transfer one full page
    pub fn page_to_ram(&mut self, page: u8) -> DisplayResult<I> {
        let last = self.last_segment()?;
        self.segments_to_ram(page, 0, last)
    }

    /// Transfer pages `start..=end`, in order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` if `start > end` or `end` is past the
    /// last page. Nothing is sent then.
    pub fn pages_to_ram(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        let pages = self.ready()?.dimensions().pages();
        if start > end || end >= pages {
            return Err(Error::InvalidRange {
                start,
                end,
                limit: u16::from(pages),
            });
        }
        let last = self.last_segment()?;
        for page in start..=end {
            self.transfer(page, 0, last)?;
        }
        Ok(())
    }

    /// Transfer the whole framebuffer
    pub fn buffer_to_ram(&mut self) -> DisplayResult<I> {
        let pages = self.ready()?.dimensions().pages();
        self.pages_to_ram(0, pages - 1)
    }

    // Controller settings

    /// Set the contrast level
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.ready()?;
        self.send_commands(&[SET_CONTRAST, contrast])
    }

    /// Turn the panel on, or put it to sleep (RAM is kept)
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.ready()?;
        debug!("SSD1306 display {}", if on { "on" } else { "off" });
        self.send_commands(&[if on { DISPLAY_ON } else { DISPLAY_OFF }])
    }

    /// Invert how RAM bits map to lit pixels, without touching RAM
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.ready()?;
        self.send_commands(&[if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        }])
    }

    fn ready(&self) -> Result<&Framebuffer, Error<I>> {
        match (self.state, self.framebuffer.as_ref()) {
            (State::Ready, Some(framebuffer)) => Ok(framebuffer),
            _ => Err(Error::NotReady { state: self.state }),
        }
    }

    fn ready_mut(&mut self) -> Result<&mut Framebuffer, Error<I>> {
        match (self.state, self.framebuffer.as_mut()) {
            (State::Ready, Some(framebuffer)) => Ok(framebuffer),
            (state, _) => Err(Error::NotReady { state }),
        }
    }

    fn last_segment(&self) -> Result<u8, Error<I>> {
        Ok((self.ready()?.dimensions().width - 1) as u8)
    }

    /// Address `(page, start)` and send segments `start..=end`; bounds already checked
    fn transfer(&mut self, page: u8, start: u8, end: u8) -> DisplayResult<I> {
        let Some(bytes) = self.framebuffer.as_ref().and_then(|fb| fb.page(page)) else {
            return Err(Error::NotReady { state: self.state });
        };
        let payload = &bytes[usize::from(start)..=usize::from(end)];
        trace!(
            "page {} segments {}..={} ({} bytes)",
            page,
            start,
            end,
            payload.len()
        );

        let address = self.config.address;
        self.interface
            .write_commands(address, &page_address(page, start))
            .map_err(Error::Interface)?;
        self.interface
            .write_data(address, payload)
            .map_err(Error::Interface)
    }

    /// Send a command stream to the display controller
    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .write_commands(self.config.address, commands)
            .map_err(Error::Interface)
    }
}
