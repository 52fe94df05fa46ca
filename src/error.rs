//! Error types for the driver
//!
//! This module defines [`Error`], the display-level error type. Bus-level
//! failures are described by
//! [`InterfaceError`](crate::interface::InterfaceError) and arrive here
//! wrapped in [`Error::Interface`].
//!
//! ## Example
//!
//! ```
//! use ssd1306_bringup::{DisplayInterface, Error};
//! # struct NullInterface;
//! # impl DisplayInterface for NullInterface {
//! #     type Error = ();
//! #     fn is_ready(&mut self) -> bool { false }
//! #     fn send_commands(&mut self, _commands: &[u8]) -> Result<(), ()> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), ()> { Ok(()) }
//! # }
//! let error: Error<NullInterface> = Error::NotReady;
//! assert_eq!(format!("{error}"), "Display bus not ready");
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when driving the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying transport
/// error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (framing or bus)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// The transport did not answer the startup readiness probe
    ///
    /// Unlike transient write failures this is fatal: the animation
    /// harness refuses to start without an addressable controller.
    NotReady,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotReady => write!(f, "Display bus not ready"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}
