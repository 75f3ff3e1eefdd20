//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller. Over I²C every write starts with a control byte that tells the
//! controller how to interpret the rest of the transaction:
//!
//! | Control byte | Meaning                                  |
//! |--------------|------------------------------------------|
//! | `0x00`       | The remaining bytes are a command stream |
//! | `0x40`       | The remaining bytes are display RAM data |
//!
//! ## Command Structure
//!
//! 1. Start condition + 7-bit device address (write)
//! 2. Control byte
//! 3. Command or data bytes
//! 4. Stop condition
//!
//! ## Example
//!
//! ```
//! use ssd1306_pages::command;
//!
//! // Address page 2, column 0x25
//! let addressing = command::page_address(2, 0x25);
//! assert_eq!(addressing, [0xB2, 0x05, 0x12]);
//! ```

use crate::config::Config;

/// Control byte prefix for a command stream
pub const CONTROL_COMMAND_STREAM: u8 = 0x00;

/// Control byte prefix for a display RAM data stream
pub const CONTROL_DATA_STREAM: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Requires 1 byte: contrast level, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal display, RAM bit 1 = pixel on (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, RAM bit 0 = pixel on (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Page addressing mode argument for [`SET_MEMORY_MODE`]
pub const MEMORY_MODE_PAGE: u8 = 0x02;

/// Set lower column start address for page addressing mode (0x00..=0x0F)
pub const SET_LOWER_COLUMN: u8 = 0x00;

/// Set higher column start address for page addressing mode (0x10..=0x1F)
pub const SET_HIGHER_COLUMN: u8 = 0x10;

/// Set page start address for page addressing mode (0xB0..=0xB7)
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display start line (0x40..=0x7F)
pub const SET_START_LINE: u8 = 0x40;

/// Segment re-map, column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 byte: number of active rows minus one.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, remapped (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 byte: 0x02 for sequential (≤32 rows), 0x12 for alternative.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9)
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set V_COMH deselect level (0xDB)
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting (0x8D)
///
/// Requires 1 byte: 0x14 = enable, 0x10 = disable.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Length of the bring-up sequence returned by [`init_sequence`]
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Build the controller bring-up sequence for a configuration
///
/// Everything is fixed except the multiplex ratio and COM pin layout (derived
/// from the panel height) and the contrast.
pub fn init_sequence(config: &Config) -> [u8; INIT_SEQUENCE_LEN] {
    let height = config.dimensions.height;
    let com_pins = if height > 32 { 0x12 } else { 0x02 };

    [
        DISPLAY_OFF,
        SET_CLOCK_DIV,
        0x80,
        SET_MULTIPLEX,
        (height - 1) as u8,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_START_LINE,
        CHARGE_PUMP,
        0x14,
        SET_MEMORY_MODE,
        MEMORY_MODE_PAGE,
        SEGMENT_REMAP,
        COM_SCAN_DEC,
        SET_COM_PINS,
        com_pins,
        SET_CONTRAST,
        config.contrast,
        SET_PRECHARGE,
        0xF1,
        SET_VCOM_DETECT,
        0x40,
        DISPLAY_ALL_ON_RESUME,
        NORMAL_DISPLAY,
        DISPLAY_ON,
    ]
}

/// Page addressing prefix for a transfer starting at `(page, segment)`
pub fn page_address(page: u8, segment: u8) -> [u8; 3] {
    [
        SET_PAGE_START | (page & 0x07),
        SET_LOWER_COLUMN | (segment & 0x0F),
        SET_HIGHER_COLUMN | ((segment >> 4) & 0x0F),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};

    #[test]
    fn test_page_address_splits_column_nibbles() {
        assert_eq!(page_address(0, 0), [0xB0, 0x00, 0x10]);
        assert_eq!(page_address(7, 127), [0xB7, 0x0F, 0x17]);
    }

    #[test]
    fn test_init_sequence_tracks_height() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .contrast(0x42)
            .build()
            .unwrap();
        let seq = init_sequence(&config);

        assert_eq!(seq[0], DISPLAY_OFF);
        assert_eq!(seq[3..5], [SET_MULTIPLEX, 31]);
        assert_eq!(seq[14..16], [SET_COM_PINS, 0x02]);
        assert_eq!(seq[16..18], [SET_CONTRAST, 0x42]);
        assert_eq!(seq[INIT_SEQUENCE_LEN - 1], DISPLAY_ON);
    }

    #[test]
    fn test_init_sequence_uses_page_addressing() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        let seq = init_sequence(&config);

        assert_eq!(seq[10..12], [SET_MEMORY_MODE, MEMORY_MODE_PAGE]);
        assert_eq!(seq[14..16], [SET_COM_PINS, 0x12]);
    }
}
