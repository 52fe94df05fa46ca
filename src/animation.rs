//! Bouncing-ball animation harness
//!
//! The steady-state behavior of the whole crate: repaint the playfield,
//! flush it, advance the ball, sleep, forever. Running this loop exercises
//! initialization, framebuffer packing and the paging protocol on every
//! frame, which is the point of a bring-up harness.
//!
//! Bring-up consults the readiness probe once and treats a silent bus as
//! fatal. After that, failed writes are logged and tolerated: a flaky bus
//! drops frames but never stops the animation.

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use crate::config::{BALL_RADIUS, FRAME_DELAY_MS, HEIGHT, WIDTH, Y_OFFSET};
use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

/// Ball kinematics in playfield coordinates
///
/// The position is the ball center. Playfield coordinates have their
/// origin at the top-left of the visible area, before the vertical window
/// offset is applied; rendering adds the offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    /// Horizontal center position
    pub x: i16,
    /// Vertical center position
    pub y: i16,
    /// Horizontal velocity in pixels per tick
    pub dx: i16,
    /// Vertical velocity in pixels per tick
    pub dy: i16,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Ball at the playfield center with unit diagonal velocity
    pub fn new() -> Self {
        Self {
            x: (WIDTH / 2) as i16,
            y: (HEIGHT / 2) as i16,
            dx: 1,
            dy: 1,
        }
    }

    /// Advance one tick: move by the velocity, then reflect off any wall
    /// the ball has reached
    ///
    /// Both axes are checked independently, so a corner hit flips both
    /// velocity components in the same tick. A reflection steps the
    /// position once along the new velocity; with unit velocity that
    /// always lands back inside the walls.
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;

        if self.x - BALL_RADIUS <= 1 || self.x + BALL_RADIUS >= WIDTH as i16 - 2 {
            self.dx = -self.dx;
            self.x += self.dx;
        }
        if self.y - BALL_RADIUS <= 1 || self.y + BALL_RADIUS >= HEIGHT as i16 - 2 {
            self.dy = -self.dy;
            self.y += self.dy;
        }
    }
}

/// Run-forever animation harness over a display driver
///
/// Owns the whole mutable state of the program: the driver, the
/// framebuffer it repaints and the ball. The hardware stays injectable,
/// any [`DisplayInterface`] below the driver and any [`DelayNs`] for
/// pacing, so the full cycle runs against recording fakes in tests.
pub struct Animation<I>
where
    I: DisplayInterface,
{
    /// Controller driver
    display: Display<I>,
    /// Frame under construction
    frame: Framebuffer,
    /// Ball state
    ball: Ball,
}

impl<I> Animation<I>
where
    I: DisplayInterface,
{
    /// Create the harness with a blank frame and the ball centered
    pub fn new(display: Display<I>) -> Self {
        Self {
            display,
            frame: Framebuffer::new(),
            ball: Ball::new(),
        }
    }

    /// Current ball state
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// One-time bring-up: readiness gate, controller init, one blank frame
    ///
    /// A transport that fails the readiness probe is reported as
    /// [`Error::NotReady`] and nothing is sent. Unacknowledged init or
    /// blank-frame writes are only logged; the animation retries the panel
    /// every tick anyway.
    pub fn start(&mut self) -> Result<(), Error<I>> {
        if !self.display.is_ready() {
            error!("display bus not ready");
            return Err(Error::NotReady);
        }

        if let Err(err) = self.display.initialize() {
            warn!("controller init not acknowledged: {err}");
        }

        self.frame.clear();
        if let Err(err) = self.display.flush(&self.frame) {
            warn!("blank frame not flushed: {err}");
        }

        info!("display ready");
        Ok(())
    }

    /// One animation tick: repaint, flush, advance
    ///
    /// The ball advances whether or not the flush was acknowledged, so a
    /// flaky bus skips frames instead of freezing the motion. The flush
    /// result is returned for the caller to log.
    pub fn tick(&mut self) -> Result<(), Error<I>> {
        self.frame.clear();
        self.frame
            .draw_rect(0, Y_OFFSET, WIDTH as i16 - 1, Y_OFFSET + HEIGHT as i16 - 1);
        self.frame
            .draw_filled_circle(self.ball.x, Y_OFFSET + self.ball.y, BALL_RADIUS);

        let flushed = self.display.flush(&self.frame);
        self.ball.advance();
        flushed
    }

    /// Bring the panel up and animate until power-off
    ///
    /// The only error that escapes is the startup readiness failure.
    /// Flush failures inside the loop are logged and the loop keeps going
    /// at its fixed frame pace.
    pub fn run<D: DelayNs>(mut self, delay: &mut D) -> Result<Infallible, Error<I>> {
        self.start()?;

        loop {
            if let Err(err) = self.tick() {
                warn!("frame not flushed: {err}");
            }
            delay.delay_ms(FRAME_DELAY_MS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PAGES;

    #[derive(Debug)]
    struct MockInterface {
        /// Command transactions, in order
        commands: alloc::vec::Vec<alloc::vec::Vec<u8>>,
        /// Data transactions, in order
        data: alloc::vec::Vec<alloc::vec::Vec<u8>>,
        /// Answer for the readiness probe
        ready: bool,
        /// When set, every transaction fails
        fail: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: alloc::vec::Vec::new(),
                data: alloc::vec::Vec::new(),
                ready: true,
                fail: false,
            }
        }

        fn not_ready() -> Self {
            Self {
                ready: false,
                ..Self::new()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn is_ready(&mut self) -> bool {
            self.ready
        }

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            self.commands.push(commands.to_vec());
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), MockError> {
            if self.fail {
                return Err(MockError);
            }
            self.data.push(data.to_vec());
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_animation(interface: MockInterface) -> Animation<MockInterface> {
        Animation::new(Display::new(interface))
    }

    #[test]
    fn test_ball_starts_centered_with_unit_velocity() {
        let ball = Ball::new();
        assert_eq!(
            ball,
            Ball {
                x: 36,
                y: 20,
                dx: 1,
                dy: 1,
            }
        );
    }

    #[test]
    fn test_ball_reflects_at_right_wall() {
        let mut ball = Ball {
            x: 65,
            y: 20,
            dx: 1,
            dy: 0,
        };
        ball.advance();
        assert_eq!(ball.dx, -1);
        assert_eq!(ball.x, 65);
        assert_eq!(ball.y, 20);
    }

    #[test]
    fn test_ball_reflects_at_left_wall() {
        let mut ball = Ball {
            x: 6,
            y: 20,
            dx: -1,
            dy: 0,
        };
        ball.advance();
        assert_eq!(ball.dx, 1);
        assert_eq!(ball.x, 6);
    }

    #[test]
    fn test_ball_reflects_at_bottom_wall() {
        let mut ball = Ball {
            x: 36,
            y: 33,
            dx: 0,
            dy: 1,
        };
        ball.advance();
        assert_eq!(ball.dy, -1);
        assert_eq!(ball.y, 33);
    }

    #[test]
    fn test_corner_hit_reflects_both_axes_in_one_tick() {
        let mut ball = Ball {
            x: 65,
            y: 33,
            dx: 1,
            dy: 1,
        };
        ball.advance();
        assert_eq!(
            ball,
            Ball {
                x: 65,
                y: 33,
                dx: -1,
                dy: -1,
            }
        );
    }

    #[test]
    fn test_ball_reflects_once_in_34_ticks_from_center() {
        let mut animation = test_animation(MockInterface::new());

        let mut previous_dx = animation.ball().dx;
        let mut dx_flips = 0;
        for _ in 0..34 {
            let result = animation.tick();
            assert!(result.is_ok());

            let ball = animation.ball();
            if ball.dx != previous_dx {
                dx_flips += 1;
                previous_dx = ball.dx;
            }
            // The ball stays clear of the border after every tick
            assert!(ball.x - BALL_RADIUS >= 1);
            assert!(ball.x + BALL_RADIUS <= WIDTH as i16 - 2);
            assert!(ball.y - BALL_RADIUS >= 1);
            assert!(ball.y + BALL_RADIUS <= HEIGHT as i16 - 2);
        }

        assert_eq!(dx_flips, 1);
    }

    #[test]
    fn test_start_requires_ready_transport() {
        let mut animation = test_animation(MockInterface::not_ready());
        let result = animation.start();
        assert!(matches!(result, Err(Error::NotReady)));

        // Nothing was sent to a bus that never answered
        assert!(animation.display.interface().commands.is_empty());
        assert!(animation.display.interface().data.is_empty());
    }

    #[test]
    fn test_start_initializes_then_blanks_the_panel() {
        let mut animation = test_animation(MockInterface::new());
        let result = animation.start();
        assert!(result.is_ok());

        let interface = animation.display.interface();
        // Init burst plus one addressing burst per page
        assert_eq!(interface.commands.len(), 1 + PAGES);
        assert_eq!(interface.commands[0].len(), 26);
        assert_eq!(interface.commands[0][0], 0xAE);

        // The blank frame reached every page
        assert_eq!(interface.data.len(), PAGES);
        for row in &interface.data {
            assert!(row.iter().all(|byte| *byte == 0));
        }
    }

    #[test]
    fn test_tick_flushes_then_advances() {
        let mut animation = test_animation(MockInterface::new());
        let result = animation.tick();
        assert!(result.is_ok());

        assert_eq!(animation.display.interface().data.len(), PAGES);
        assert_eq!(
            *animation.ball(),
            Ball {
                x: 37,
                y: 21,
                dx: 1,
                dy: 1,
            }
        );
    }

    #[test]
    fn test_tick_draws_border_and_ball_in_visible_window() {
        let mut animation = test_animation(MockInterface::new());
        let result = animation.tick();
        assert!(result.is_ok());

        let data = &animation.display.interface().data;

        // Top border row: native y = 12, page 1, bit 4
        assert!(data[1].iter().all(|byte| byte & 0x10 != 0));
        // Bottom border row: native y = 51, page 6, bit 3
        assert!(data[6].iter().all(|byte| byte & 0x08 != 0));
        // Side borders fill whole pages in the window interior
        assert_eq!(data[3][0], 0xFF);
        assert_eq!(data[3][WIDTH - 1], 0xFF);
        // Away from ball and border nothing is lit
        assert_eq!(data[2][35], 0x00);
        // Ball center: native (36, 32), page 4, bit 0
        assert!(data[4][36] & 0x01 != 0);
    }

    #[test]
    fn test_tick_advances_ball_even_when_flush_fails() {
        let mut animation = test_animation(MockInterface::failing());
        let result = animation.tick();
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert_eq!(animation.ball().x, 37);
    }

    #[test]
    fn test_run_refuses_unready_transport() {
        let animation = test_animation(MockInterface::not_ready());
        let mut delay = MockDelay;
        let result = animation.run(&mut delay);
        assert!(matches!(result, Err(Error::NotReady)));
    }
}
