//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! display controller, plus the control bytes that frame them on the wire.
//!
//! ## Transaction structure
//!
//! Every bus write starts with a control byte telling the controller how to
//! interpret the rest of the transaction:
//!
//! 1. [`CONTROL_COMMAND`] (0x00) - the remaining bytes are commands and
//!    command arguments, executed in order
//! 2. [`CONTROL_DATA`] (0x40) - the remaining bytes are display RAM data,
//!    written at the current page/column address
//!
//! Commands that take arguments consume the following byte(s) of the same
//! transaction, so a whole configuration sequence can travel as one write.

// Control bytes

/// Control byte introducing a command transaction (Co = 0, D/C# = 0)
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte introducing a display-data transaction (Co = 0, D/C# = 1)
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Display off command (0xAE)
///
/// Puts the panel to sleep. RAM contents are retained.
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
///
/// Must come after charge pump enable, or the panel stays dark.
pub const DISPLAY_ON: u8 = 0xAF;

/// Set contrast command (0x81)
///
/// Requires 1 byte: contrast level 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Display-follows-RAM command (0xA4)
///
/// Output shows RAM contents (0xA5 is the all-pixels-lit variant).
pub const DISPLAY_FOLLOWS_RAM: u8 = 0xA4;

/// Normal (non-inverted) display command (0xA6)
///
/// RAM bit 1 lights the pixel (0xA7 is the inverted variant).
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// No-operation command (0xE3)
///
/// Does nothing, but the controller still has to acknowledge the
/// transaction, which makes it a safe addressability probe.
pub const NOP: u8 = 0xE3;

// Scrolling commands

/// Deactivate scroll command (0x2E)
///
/// Stops any scroll left running by previous firmware. RAM writes are
/// disallowed while a scroll is active, so this precedes RAM setup.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical,
/// [`MEMORY_MODE_PAGE`] = page. This driver always selects page mode.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Page addressing mode argument for [`SET_MEMORY_MODE`]
///
/// The column address auto-increments within the current page and wraps;
/// moving to another page takes an explicit [`PAGE_START`] command.
pub const MEMORY_MODE_PAGE: u8 = 0x02;

/// Page start address command (0xB0)
///
/// OR the page index (0..=7) into the low three bits.
/// Page addressing mode only.
pub const PAGE_START: u8 = 0xB0;

/// Lower column start address command (0x00)
///
/// OR the low nibble of the column address into the low four bits.
/// Page addressing mode only.
pub const COLUMN_LOW: u8 = 0x00;

/// Higher column start address command (0x10)
///
/// OR the high nibble of the column address into the low four bits.
/// Page addressing mode only.
pub const COLUMN_HIGH: u8 = 0x10;

// Hardware configuration commands

/// Set display start line command (0x40)
///
/// OR the start line (0..=63) into the low six bits. This driver always
/// starts at line 0.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap command, mirrored (0xA1)
///
/// Maps column address 127 to SEG0, flipping the image horizontally to
/// match the module's mounting orientation (0xA0 is the unmirrored
/// variant).
pub const SEG_REMAP: u8 = 0xA1;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 byte: number of driven COM rows minus one.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;

/// COM output scan direction command, remapped (0xC8)
///
/// Scans from COM\[N-1\] to COM\[0\], flipping the image vertically (0xC0
/// is the unremapped variant).
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 byte: vertical shift by COM, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte. 0x12 selects the alternative COM pin configuration
/// without left/right remap, matching this module class.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio and oscillator frequency command (0xD5)
///
/// Requires 1 byte: low nibble divide ratio minus one, high nibble
/// oscillator frequency band.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 byte: low nibble phase 1, high nibble phase 2, in DCLKs.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 byte selecting the deselect voltage relative to VCC.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

// Charge pump command

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: [`CHARGE_PUMP_ON`] enables the internal pump. Panels
/// without an external VCC supply need the pump enabled before
/// [`DISPLAY_ON`].
pub const CHARGE_PUMP: u8 = 0x8D;

/// Enable argument for [`CHARGE_PUMP`]
pub const CHARGE_PUMP_ON: u8 = 0x14;
