//! Packed monochrome bitmaps
//!
//! An [`Image`] borrows bitmap data and knows how to read one pixel of it.
//! Two layouts are understood:
//!
//! - [`ImageLayout::RowMajor`]: each row is `ceil(width / 8)` bytes, most
//!   significant bit = leftmost pixel. This is what most bitmap converters
//!   emit for "horizontal, 1 bit per pixel".
//! - [`ImageLayout::Paged`]: the controller's own RAM layout, `ceil(height / 8)`
//!   pages of `width` bytes each, bit 0 = top row of the page.
//!
//! ## Example
//!
//! ```
//! use ssd1306_pages::{Image, ImageLayout};
//!
//! // 8x2 image: top row fully on, bottom row only the leftmost pixel
//! let data = [0xFF, 0x80];
//! let image = match Image::new(&data, 8, 2) {
//!     Ok(image) => image,
//!     Err(_) => return,
//! };
//! assert_eq!(image.layout(), ImageLayout::RowMajor);
//! assert!(image.pixel(7, 0));
//! assert!(image.pixel(0, 1));
//! assert!(!image.pixel(1, 1));
//! ```

use crate::error::ImageError;

/// Bit packing of an [`Image`]'s data
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ImageLayout {
    /// Rows of `ceil(width / 8)` bytes, MSB first
    #[default]
    RowMajor,
    /// Pages of `width` vertical bytes, LSB = top row
    Paged,
}

impl ImageLayout {
    /// Bytes needed to hold a `width` × `height` bitmap in this layout
    pub fn data_len(self, width: u16, height: u16) -> usize {
        let (width, height) = (width as usize, height as usize);
        match self {
            Self::RowMajor => width.div_ceil(8) * height,
            Self::Paged => height.div_ceil(8) * width,
        }
    }
}

/// Borrowed monochrome bitmap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Image<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
    layout: ImageLayout,
}

impl<'a> Image<'a> {
    /// Wrap row-major bitmap data
    ///
    /// # Errors
    ///
    /// Returns `ImageError::DataTooShort` if `data` cannot hold
    /// `width` × `height` pixels.
    pub fn new(data: &'a [u8], width: u16, height: u16) -> Result<Self, ImageError> {
        Self::with_layout(data, width, height, ImageLayout::RowMajor)
    }

    /// Wrap bitmap data in an explicit layout
    ///
    /// # Errors
    ///
    /// Returns `ImageError::DataTooShort` if `data` cannot hold
    /// `width` × `height` pixels in `layout`.
    pub fn with_layout(
        data: &'a [u8],
        width: u16,
        height: u16,
        layout: ImageLayout,
    ) -> Result<Self, ImageError> {
        let required = layout.data_len(width, height);
        if data.len() < required {
            return Err(ImageError::DataTooShort {
                required,
                provided: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            layout,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Data layout
    pub fn layout(&self) -> ImageLayout {
        self.layout
    }

    /// Whether the pixel at `(x, y)` is set; `false` outside the image
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        let (index, mask) = match self.layout {
            ImageLayout::RowMajor => {
                let stride = (self.width as usize).div_ceil(8);
                (y * stride + x / 8, 0x80 >> (x % 8))
            }
            ImageLayout::Paged => ((y / 8) * self.width as usize + x, 1 << (y % 8)),
        };
        self.data[index] & mask != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_stride_rounds_up() {
        // 10 pixels wide needs 2 bytes per row
        let data = [0x00, 0x40, 0x80, 0x00];
        let image = Image::new(&data, 10, 2).unwrap();
        assert!(image.pixel(9, 0));
        assert!(image.pixel(0, 1));
        assert!(!image.pixel(8, 0));
    }

    #[test]
    fn test_paged_layout_reads_vertical_bytes() {
        // 2 columns, 16 rows: column 1 has its top row and row 9 set
        let data = [0x00, 0x01, 0x00, 0x02];
        let image = Image::with_layout(&data, 2, 16, ImageLayout::Paged).unwrap();
        assert!(image.pixel(1, 0));
        assert!(image.pixel(1, 9));
        assert!(!image.pixel(0, 0));
        assert!(!image.pixel(1, 8));
    }

    #[test]
    fn test_short_data_rejected() {
        let data = [0u8; 3];
        assert_eq!(
            Image::new(&data, 16, 2),
            Err(ImageError::DataTooShort {
                required: 4,
                provided: 3
            })
        );
        assert!(Image::with_layout(&data, 4, 9, ImageLayout::Paged).is_err());
    }

    #[test]
    fn test_outside_image_reads_off() {
        let data = [0xFF];
        let image = Image::new(&data, 8, 1).unwrap();
        assert!(!image.pixel(8, 0));
        assert!(!image.pixel(0, 1));
    }
}
