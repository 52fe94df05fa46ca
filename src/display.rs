//! Core display operations

use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_ON, COLUMN_HIGH, COLUMN_LOW, COM_SCAN_DEC, DEACTIVATE_SCROLL,
    DISPLAY_FOLLOWS_RAM, DISPLAY_OFF, DISPLAY_ON, MEMORY_MODE_PAGE, NORMAL_DISPLAY, PAGE_START,
    SEG_REMAP, SET_CLOCK_DIVIDE, SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET,
    SET_MEMORY_MODE, SET_MULTIPLEX_RATIO, SET_PRECHARGE, SET_START_LINE, SET_VCOM_DESELECT,
};
use crate::config::{NATIVE_ROWS, X_OFFSET};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Power-up configuration for the 72x40 module class, sent as one burst
///
/// The order is part of the protocol contract: the charge pump must be
/// enabled before display-on, and page addressing must be selected before
/// the first data write. The tuning arguments (clock, contrast,
/// pre-charge, VCOMH) are the values this module class is specified with.
const INIT_SEQUENCE: [u8; 26] = [
    DISPLAY_OFF,
    DEACTIVATE_SCROLL,
    SET_CLOCK_DIVIDE, 0x80, // divide by 1, mid oscillator band
    SET_MULTIPLEX_RATIO, (NATIVE_ROWS - 1) as u8,
    SET_DISPLAY_OFFSET, 0x00,
    SET_START_LINE,
    CHARGE_PUMP, CHARGE_PUMP_ON,
    SET_MEMORY_MODE, MEMORY_MODE_PAGE,
    SEG_REMAP,
    COM_SCAN_DEC,
    SET_COM_PINS, 0x12, // alternative COM configuration, no remap
    SET_CONTRAST, 0xCF,
    SET_PRECHARGE, 0xF1,
    SET_VCOM_DESELECT, 0x20, // 0.77 x VCC
    DISPLAY_FOLLOWS_RAM,
    NORMAL_DISPLAY,
    DISPLAY_ON,
];

/// Core display driver for the SSD1306
///
/// Owns the hardware interface and speaks the paging protocol. The driver
/// holds no pixel state of its own; it reads a
/// [`Framebuffer`](crate::framebuffer::Framebuffer) during flush and never
/// writes one.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display over an interface
    pub fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Report whether the transport answers at the controller's address
    pub fn is_ready(&mut self) -> bool {
        self.interface.is_ready()
    }

    /// Bring the panel up with the fixed configuration sequence
    ///
    /// Safe to call on an already initialized controller; the sequence
    /// ends with display-on, so the panel is live when this returns.
    pub fn initialize(&mut self) -> DisplayResult<I> {
        self.send_commands(&INIT_SEQUENCE)
    }

    /// Push a framebuffer to the panel, page by page
    ///
    /// Each page is addressed at the visible window's column offset and
    /// its row is sent in one data transaction, in ascending page order.
    /// Failed writes are not retried and do not stop the remaining pages;
    /// the first failure is returned once every page has been attempted.
    pub fn flush(&mut self, frame: &Framebuffer) -> DisplayResult<I> {
        let mut first_failure = Ok(());

        for (page, row) in frame.pages().enumerate() {
            let addressing = [
                PAGE_START | page as u8,
                COLUMN_LOW | (X_OFFSET & 0x0F),
                COLUMN_HIGH | ((X_OFFSET >> 4) & 0x0F),
            ];
            if let Err(e) = self.send_commands(&addressing) {
                if first_failure.is_ok() {
                    first_failure = Err(e);
                }
            }
            if let Err(e) = self.send_data(row) {
                if first_failure.is_ok() {
                    first_failure = Err(e);
                }
            }
        }

        first_failure
    }

    /// Send a command burst to the controller
    fn send_commands(&mut self, commands: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_commands(commands)
            .map_err(Error::Interface)
    }

    /// Send display data to the controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
