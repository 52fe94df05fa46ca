//! Page-packed framebuffer and drawing primitives
//!
//! The in-memory image of the panel, packed exactly the way the
//! controller's RAM is organized. Each byte holds eight vertically stacked
//! pixels of one column, bit 0 being the topmost row of its page, and the
//! buffer stores pages top to bottom:
//!
//! ```text
//! byte index = (y / 8) * WIDTH + x
//! bit        = y % 8
//! ```
//!
//! This layout is the wire contract with the controller: a page row can be
//! copied into a data transaction unchanged.
//!
//! Drawing is deliberately minimal. Pixels only turn on, and anything
//! landing outside the buffer is dropped silently so shape code needs no
//! clipping of its own; [`Framebuffer::clear`] is the only way to turn
//! pixels off again.
//!
//! ## Example
//!
//! ```
//! use ssd1306_bringup::Framebuffer;
//!
//! let mut frame = Framebuffer::new();
//! frame.set_pixel(10, 9);
//! assert!(frame.pixel(10, 9));
//!
//! // (10, 9) lives in page 1, bit 1
//! assert_eq!(frame.as_bytes()[72 + 10], 0b0000_0010);
//!
//! frame.clear();
//! assert!(!frame.pixel(10, 9));
//! ```

use crate::config::{BUFFER_LEN, PAGES, WIDTH};

/// Buffer height in pixel rows
///
/// The full page span, taller than the visible area; renderers offset
/// their content into the visible window.
const ROWS: i16 = (PAGES * 8) as i16;

/// In-memory pixel buffer in the controller's page layout
///
/// Owned by whoever runs the render loop and lent out by reference: the
/// renderer mutates it between frames, the driver only reads it during
/// flush.
#[derive(Clone)]
pub struct Framebuffer {
    /// Packed pixel storage, [`PAGES`] rows of [`WIDTH`] bytes
    buf: [u8; BUFFER_LEN],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a framebuffer with every pixel off
    pub fn new() -> Self {
        Self {
            buf: [0; BUFFER_LEN],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Turn on the pixel at (x, y)
    ///
    /// Coordinates outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: i16, y: i16) {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= ROWS {
            return;
        }
        self.buf[(y as usize / 8) * WIDTH + x as usize] |= 1 << (y as usize % 8);
    }

    /// Read back the pixel at (x, y)
    ///
    /// Out-of-bounds coordinates read as off.
    pub fn pixel(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= ROWS {
            return false;
        }
        self.buf[(y as usize / 8) * WIDTH + x as usize] & (1 << (y as usize % 8)) != 0
    }

    /// Draw the outline of an axis-aligned rectangle
    ///
    /// Corners must be ordered (`x0 <= x1`, `y0 <= y1`); only the four
    /// border lines are set, the interior is left untouched.
    pub fn draw_rect(&mut self, x0: i16, y0: i16, x1: i16, y1: i16) {
        for x in x0..=x1 {
            self.set_pixel(x, y0);
            self.set_pixel(x, y1);
        }
        for y in y0..=y1 {
            self.set_pixel(x0, y);
            self.set_pixel(x1, y);
        }
    }

    /// Draw a filled disk of radius `r` centered on (cx, cy)
    ///
    /// A pixel belongs to the disk when `dx^2 + dy^2 <= r^2`, boundary
    /// included.
    pub fn draw_filled_circle(&mut self, cx: i16, cy: i16, r: i16) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy);
                }
            }
        }
    }

    /// Iterate the buffer one page row at a time, top page first
    ///
    /// Each item is exactly [`WIDTH`] bytes, ready to be sent as one data
    /// transaction.
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.buf.chunks_exact(WIDTH)
    }

    /// Raw packed bytes, page-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
