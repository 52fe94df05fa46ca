//! Compile-time panel and animation configuration
//!
//! The entire configuration surface of the harness lives here. Retargeting
//! different panel wiring or animation parameters means editing these
//! constants and rebuilding; nothing is configurable at runtime.
//!
//! The 72x40 module class drives a panel smaller than the controller's
//! native 132x64 grid, with the visible glass wired centered in that
//! window. The derived offsets place drawing and flushing inside the
//! visible area.

/// Width of the visible panel area in pixels
pub const WIDTH: usize = 72;

/// Height of the visible panel area in pixels
pub const HEIGHT: usize = 40;

/// Column count of the controller's native segment grid
pub const NATIVE_COLUMNS: usize = 132;

/// Row count driven by the controller (multiplex ratio)
pub const NATIVE_ROWS: usize = 64;

/// Number of 8-row pages covering the native row span
pub const PAGES: usize = NATIVE_ROWS.div_ceil(8);

/// Framebuffer length in bytes: one byte per column per page
pub const BUFFER_LEN: usize = WIDTH * PAGES;

/// First native column of the visible area
///
/// Applied to the column address during flush; the framebuffer itself
/// knows nothing about the native grid.
pub const X_OFFSET: u8 = ((NATIVE_COLUMNS - WIDTH) / 2) as u8;

/// First native row of the visible area
///
/// Unlike [`X_OFFSET`] this is applied when drawing, not when flushing:
/// the framebuffer spans the full native row range and renderers shift
/// their content down into the visible window.
pub const Y_OFFSET: i16 = ((NATIVE_ROWS - HEIGHT) / 2) as i16;

/// Fixed seven-bit bus address of the controller
pub const DEVICE_ADDRESS: u8 = 0x3C;

/// Ball radius in pixels
pub const BALL_RADIUS: i16 = 4;

/// Pause between animation frames in milliseconds
pub const FRAME_DELAY_MS: u32 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        assert_eq!(PAGES, 8);
        assert_eq!(BUFFER_LEN, 576);
        assert_eq!(X_OFFSET, 30);
        assert_eq!(Y_OFFSET, 12);
    }

    #[test]
    fn test_visible_window_fits_native_grid() {
        assert!(X_OFFSET as usize + WIDTH <= NATIVE_COLUMNS);
        assert!(Y_OFFSET as usize + HEIGHT <= NATIVE_ROWS);
    }

    #[test]
    fn test_ball_fits_between_walls() {
        // Reflection nudges by one velocity step; the diameter plus the
        // wall margins must leave room for that on both axes.
        assert!(2 * BALL_RADIUS + 4 < WIDTH as i16);
        assert!(2 * BALL_RADIUS + 4 < HEIGHT as i16);
    }
}
