//! Graphics support via embedded-graphics
//!
//! This module implements the [`DrawTarget`] and [`OriginDimensions`] traits
//! from the embedded-graphics ecosystem for both [`Framebuffer`] and
//! [`Display`], using [`BinaryColor`] (`On` = lit pixel).
//!
//! Pixels outside the panel are dropped silently, like the built-in drawing
//! primitives. As with those, nothing is sent to the panel until one of the
//! `*_to_ram` transfers is called.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_pages::{Builder, Dimensions, Display, I2cInterface};
//! # use core::convert::Infallible;
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
//! # let dims = match Dimensions::new(128, 64) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(I2cInterface::new(&mut bus), config);
//! let _ = display.init();
//!
//! let _ = Circle::new(Point::new(40, 8), 48)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(0, 62),
//!     MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
//! )
//! .draw(&mut display);
//!
//! let _ = display.buffer_to_ram();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Negative coordinates are off-panel like any other
            if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
                self.plot(x, y, color.is_on());
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let state = self.state();
        let Some(framebuffer) = self.framebuffer_mut() else {
            return Err(Error::NotReady { state });
        };
        match framebuffer.draw_iter(pixels) {
            Ok(()) => Ok(()),
            Err(never) => match never {},
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Orientation};
    use crate::display::State;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn write_commands(&mut self, _address: u8, _commands: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write_data(&mut self, _address: u8, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface, config)
    }

    #[test]
    fn test_size_matches_panel() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(128, 32));
    }

    #[test]
    fn test_draw_before_init_is_rejected() {
        let mut display = test_display();
        let result = Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut display);
        assert!(matches!(
            result,
            Err(Error::NotReady {
                state: State::Uninitialized
            })
        ));
    }

    #[test]
    fn test_rectangle_matches_fill_region() {
        let mut display = test_display();
        display.init().unwrap();
        Rectangle::new(Point::new(2, 3), Size::new(10, 20))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        let mut expected =
            Framebuffer::new(Dimensions::new(128, 32).unwrap(), Orientation::TopToBottom)
                .unwrap();
        expected.fill_region(2, 11, 3, 22, true);
        assert_eq!(
            display.framebuffer().unwrap().as_bytes(),
            expected.as_bytes()
        );
    }

    #[test]
    fn test_off_panel_pixels_are_clipped() {
        let mut fb =
            Framebuffer::new(Dimensions::new(16, 8).unwrap(), Orientation::TopToBottom).unwrap();
        Line::new(Point::new(-5, 0), Point::new(30, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut fb)
            .unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0x01));
    }

    #[test]
    fn test_pixels_past_each_edge_are_dropped() {
        let mut fb =
            Framebuffer::new(Dimensions::new(16, 8).unwrap(), Orientation::TopToBottom).unwrap();
        let pixels = [(-1, 0), (0, -1), (16, 0), (0, 8), (15, 7)]
            .map(|(x, y)| Pixel(Point::new(x, y), BinaryColor::On));
        fb.draw_iter(pixels).unwrap();

        assert_eq!(fb.pixel(15, 7), Some(true));
        assert_eq!(fb.as_bytes().iter().filter(|b| **b != 0).count(), 1);
    }

    #[test]
    fn test_clear_fills_buffer() {
        let mut display = test_display();
        display.init().unwrap();
        display.clear(BinaryColor::On).unwrap();
        assert!(
            display
                .framebuffer()
                .unwrap()
                .as_bytes()
                .iter()
                .all(|b| *b == 0xFF)
        );
    }
}
