//! Pixel addressing utilities
//!
//! This module maps logical pixel coordinates onto the controller's display
//! RAM layout. RAM is organized in pages: each page is a horizontal band of 8
//! rows, and each byte of a page (a *segment*) holds the 8 vertically stacked
//! pixels of one column.
//!
//! ```text
//!            x = 0      x = 1            x = width-1
//! page 0   [byte 0]   [byte 1]   ...   [byte width-1]      rows 0..=7
//! page 1   [byte w]   [byte w+1] ...   [byte 2w-1]         rows 8..=15
//! ```
//!
//! The [`Orientation`] only decides which bit inside the byte carries which
//! row of the page. Every drawing operation goes through [`locate`], so the
//! two orientations cannot drift apart.
//!
//! ## Example
//!
//! ```
//! use ssd1306_pages::{orientation::locate, Orientation};
//!
//! // 128-wide panel: pixel (5, 10) lives in page 1, column 5, row 2 of the page
//! let (idx, bit) = locate(5, 10, 128, Orientation::TopToBottom);
//! assert_eq!(idx, 128 + 5);
//! assert_eq!(bit, 0x04);
//!
//! // Same pixel with rows traversed bottom-to-top within the page
//! let (idx, bit) = locate(5, 10, 128, Orientation::BottomToTop);
//! assert_eq!(idx, 128 + 5);
//! assert_eq!(bit, 0x20);
//! ```

use crate::config::Orientation;

/// Bit position (0..=7) of row `y` inside its page byte
pub fn bit_index(y: u16, orientation: Orientation) -> u8 {
    let row = (y % 8) as u8;
    match orientation {
        Orientation::TopToBottom => row,
        Orientation::BottomToTop => 7 - row,
    }
}

/// Get the buffer index and bit mask for a pixel
///
/// # Arguments
///
/// * `x` - Column, 0 to width-1
/// * `y` - Row, 0 to height-1
/// * `width` - Panel width in pixels (bytes per page)
/// * `orientation` - Row traversal order within a page
///
/// # Returns
///
/// `(byte_index, bit_mask)` where `byte_index = (y / 8) * width + x`.
/// Bounds are the caller's responsibility.
pub fn locate(x: u16, y: u16, width: u16, orientation: Orientation) -> (usize, u8) {
    let page = (y / 8) as usize;
    let index = page * width as usize + x as usize;
    (index, 1 << bit_index(y, orientation))
}
