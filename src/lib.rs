//! SSD1306 OLED bring-up harness
//!
//! A raw-I2C driver and animation harness for the 72x40 SSD1306 OLED
//! module class, built for hardware validation: there is nothing between
//! the code and the bus except the embedded-hal `I2c` trait, so a ball
//! bouncing on the panel proves that addressing, initialization and
//! page-mode data transfer all work on a given board.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - byte-exact initialization for the 72x40 module class
//! - page-packed in-memory framebuffer with minimal drawing primitives
//! - page-addressed flush with best-effort error reporting
//! - the full animation cycle runs against fakes in tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use ssd1306_bringup::{Animation, Display, Interface};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(i2c);
//! let display = Display::new(interface);
//! let animation = Animation::new(display);
//!
//! // Runs until power-off; only a failed readiness probe returns
//! if let Err(err) = animation.run(&mut delay) {
//!     let _ = err;
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Bouncing-ball state and the run-forever harness
pub mod animation;
/// SSD1306 command definitions
pub mod command;
/// Compile-time panel and animation configuration
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Page-packed framebuffer and drawing primitives
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

pub use animation::{Animation, Ball};
pub use display::Display;
pub use error::Error;
pub use framebuffer::Framebuffer;
pub use interface::{
    DisplayInterface, Interface, InterfaceError, MAX_COMMAND_BYTES, MAX_DATA_BYTES,
};
