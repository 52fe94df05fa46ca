//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for communicating with the SSD1306 controller over I2C.
//!
//! ## Hardware requirements
//!
//! The controller is driven entirely over a two-wire bus (SDA + SCL); no
//! reset, data/command or busy pins are involved. Every operation is a
//! single addressed write whose first byte is a control byte:
//! [`CONTROL_COMMAND`](crate::command::CONTROL_COMMAND) introduces command
//! bytes, [`CONTROL_DATA`](crate::command::CONTROL_DATA) introduces display
//! RAM data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_bringup::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! // Create interface over an I2C bus
//! let mut interface = Interface::new(MockI2c);
//!
//! // Probe the bus
//! assert!(interface.is_ready());
//!
//! // Select page 0
//! let _ = interface.send_commands(&[0xB0]);
//!
//! // Send one column of display data
//! let _ = interface.send_data(&[0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::command::{CONTROL_COMMAND, CONTROL_DATA, NOP};
use crate::config::{DEVICE_ADDRESS, WIDTH};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Longest command burst accepted by [`DisplayInterface::send_commands`]
///
/// Sized for the power-up configuration sequence with a little headroom,
/// the largest burst the harness ever issues.
pub const MAX_COMMAND_BYTES: usize = 27;

/// Longest payload accepted by [`DisplayInterface::send_data`]: one page
/// row of the visible area
pub const MAX_DATA_BYTES: usize = WIDTH;

/// On-wire frame length for a full command burst (control byte included)
const COMMAND_FRAME_LEN: usize = 1 + MAX_COMMAND_BYTES;

/// On-wire frame length for a full data payload (control byte included)
const DATA_FRAME_LEN: usize = 1 + MAX_DATA_BYTES;

/// Trait for the bus-side interface to the SSD1306 controller
///
/// This trait abstracts over the transport, allowing the
/// [`Display`](crate::display::Display) and the animation harness to run
/// against recording fakes in tests. For hardware, use the provided
/// [`Interface`] struct over any embedded-hal I2C bus.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Report whether the transport can address the controller
    ///
    /// Consulted once before bring-up; implementations should answer
    /// without disturbing controller state.
    fn is_ready(&mut self) -> bool;

    /// Send a burst of command bytes to the controller
    ///
    /// The implementation must:
    /// 1. Prefix the command control byte
    /// 2. Deliver the burst as a single bus write
    ///
    /// # Errors
    ///
    /// Returns an error if the burst exceeds the transaction limit or
    /// the bus write fails.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send display RAM data to the controller
    ///
    /// The implementation must:
    /// 1. Prefix the data control byte
    /// 2. Deliver the payload as a single bus write
    ///
    /// # Errors
    ///
    /// Returns an error if the payload exceeds one page row or the bus
    /// write fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the bus error type.
#[derive(Debug)]
pub enum InterfaceError<E> {
    /// I2C communication error
    Bus(E),
    /// Payload larger than its fixed on-wire frame
    ///
    /// Command sequences are static in this driver, so hitting this means
    /// a programming error rather than a runtime condition.
    CapacityExceeded {
        /// Bytes the caller asked to send
        requested: usize,
        /// Bytes the frame can carry
        capacity: usize,
    },
}

impl<E: Debug> core::fmt::Display for InterfaceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C error: {e:?}"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Transaction too large: {requested} bytes, capacity {capacity}"
                )
            }
        }
    }
}

impl<E: Debug> core::error::Error for InterfaceError<E> {}

/// I2C interface implementation for the SSD1306
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 I2C bus,
/// framing every transaction with the right control byte and writing it to
/// the fixed controller address
/// ([`DEVICE_ADDRESS`](crate::config::DEVICE_ADDRESS)).
///
/// ## Type parameters
///
/// * `I2C` - bus implementing [`I2c`] with seven-bit addressing
pub struct Interface<I2C> {
    /// Underlying I2C bus
    i2c: I2C,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface over an I2C bus
    ///
    /// The bus may be shared; the interface only issues addressed writes
    /// and holds no state between them.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error>;

    fn is_ready(&mut self) -> bool {
        // An acknowledged NOP write means the device is powered and
        // answering at its address.
        self.i2c.write(DEVICE_ADDRESS, &[CONTROL_COMMAND, NOP]).is_ok()
    }

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        if commands.len() > MAX_COMMAND_BYTES {
            return Err(InterfaceError::CapacityExceeded {
                requested: commands.len(),
                capacity: MAX_COMMAND_BYTES,
            });
        }

        let mut frame: Vec<u8, COMMAND_FRAME_LEN> = Vec::new();
        // Cannot fail: checked against the frame capacity above
        let _ = frame.push(CONTROL_COMMAND);
        let _ = frame.extend_from_slice(commands);

        self.i2c
            .write(DEVICE_ADDRESS, &frame)
            .map_err(|e| InterfaceError::Bus(e))
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        if data.len() > MAX_DATA_BYTES {
            return Err(InterfaceError::CapacityExceeded {
                requested: data.len(),
                capacity: MAX_DATA_BYTES,
            });
        }

        let mut frame: Vec<u8, DATA_FRAME_LEN> = Vec::new();
        // Cannot fail: checked against the frame capacity above
        let _ = frame.push(CONTROL_DATA);
        let _ = frame.extend_from_slice(data);

        self.i2c
            .write(DEVICE_ADDRESS, &frame)
            .map_err(|e| InterfaceError::Bus(e))
    }
}
