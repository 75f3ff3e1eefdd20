//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the SSD1306 controller over I²C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I²C mode needs only SDA and SCL. The bus itself (clock
//! speed, timeout, retries) is owned by the HAL; this driver issues plain
//! addressed writes and treats any failure as fatal for the current operation.
//!
//! ## Borrowing the bus
//!
//! `embedded-hal` implements `I2c` for `&mut T`, so a bus shared with other
//! peripherals can be lent to the driver instead of moved into it:
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306_pages::{DisplayInterface, I2cInterface};
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
//! let mut bus = MockI2c;
//! {
//!     let mut interface = I2cInterface::new(&mut bus);
//!     // Display off
//!     let _ = interface.write_commands(0x3C, &[0xAE]);
//!     // Eight bytes of RAM data
//!     let _ = interface.write_data(0x3C, &[0xFF; 8]);
//! }
//! // The bus is usable again once the interface is dropped
//! let _ = bus.write(0x50, &[0x00]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_COMMAND_STREAM, CONTROL_DATA_STREAM};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the bus transport to the SSD1306 controller
///
/// This trait abstracts over different transports, allowing the
/// [`Display`](crate::display::Display) to work with any implementation
/// that can perform an addressed write.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`]. Implement this trait on
/// your own type to route writes through something else (a bus manager, a
/// recording mock, a simulator).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command stream to the controller at `address`
    ///
    /// The bytes must reach the controller in one transaction, interpreted as
    /// commands and their arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_commands(&mut self, address: u8, commands: &[u8])
    -> InterfaceResult<(), Self::Error>;

    /// Send a display RAM data burst to the controller at `address`
    ///
    /// The bytes land at the RAM position set by the previous addressing
    /// commands; the column pointer advances after each byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_data(&mut self, address: u8, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I²C communication error
    I2c(I2cErr),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// I²C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus,
/// including `&mut` borrows of one.
///
/// Each write is a single transaction: the control byte followed by the
/// payload, sent as two adjacent write operations so no restart occurs
/// between them and no intermediate copy is needed.
pub struct I2cInterface<I2C> {
    /// I²C bus (owned or borrowed)
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface over an I²C bus
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_prefixed(
        &mut self,
        address: u8,
        control: u8,
        payload: &[u8],
    ) -> InterfaceResult<(), InterfaceError<I2C::Error>> {
        self.i2c
            .transaction(
                address,
                &mut [Operation::Write(&[control]), Operation::Write(payload)],
            )
            .map_err(InterfaceError::I2c)
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn write_commands(
        &mut self,
        address: u8,
        commands: &[u8],
    ) -> InterfaceResult<(), Self::Error> {
        self.write_prefixed(address, CONTROL_COMMAND_STREAM, commands)
    }

    fn write_data(&mut self, address: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_prefixed(address, CONTROL_DATA_STREAM, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::i2c::{ErrorKind, ErrorType};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records each transaction as (address, concatenated write bytes)
    #[derive(Debug, Default)]
    struct MockI2c {
        transactions: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transactions.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn test_commands_are_prefixed_with_command_control_byte() {
        let mut bus = MockI2c::default();
        let mut interface = I2cInterface::new(&mut bus);
        interface.write_commands(0x3C, &[0xB0, 0x00, 0x10]).unwrap();

        assert_eq!(bus.transactions.len(), 1);
        assert_eq!(bus.transactions[0], (0x3C, alloc::vec![0x00, 0xB0, 0x00, 0x10]));
    }

    #[test]
    fn test_data_is_prefixed_with_data_control_byte() {
        let mut bus = MockI2c::default();
        let mut interface = I2cInterface::new(&mut bus);
        interface.write_data(0x3D, &[0xAA, 0x55]).unwrap();

        assert_eq!(bus.transactions[0], (0x3D, alloc::vec![0x40, 0xAA, 0x55]));
    }

    #[test]
    fn test_bus_error_is_wrapped() {
        let mut bus = MockI2c {
            fail: true,
            ..MockI2c::default()
        };
        let mut interface = I2cInterface::new(&mut bus);
        let result = interface.write_data(0x3C, &[0x00]);
        assert!(matches!(result, Err(InterfaceError::I2c(MockError))));
    }

    #[test]
    fn test_release_returns_owned_bus() {
        let interface = I2cInterface::new(MockI2c::default());
        let bus = interface.release();
        assert!(bus.transactions.is_empty());
    }
}
