//! Frame pacing for animated drawing.

use std::thread;
use std::time::Duration;

/// Suspension point between animation frames.
///
/// Every drawing step the animator performs is followed by exactly one call
/// to [`FrameClock::next_frame`].
pub trait FrameClock {
    /// Blocks until the next frame may be drawn.
    fn next_frame(&mut self);
}

/// Clock that never waits. Counts the frames it was asked for.
///
/// # Examples
/// ```
/// use spanwise_core::{FrameClock, Immediate};
///
/// let mut clock = Immediate::default();
/// clock.next_frame();
/// clock.next_frame();
/// assert_eq!(clock.frames(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Immediate {
    frames: u64,
}

impl Immediate {
    /// Returns the number of frames elapsed.
    #[must_use]
    #[rustfmt::skip]
    pub fn frames(&self) -> u64 { self.frames }
}

impl FrameClock for Immediate {
    fn next_frame(&mut self) {
        self.frames += 1;
    }
}

/// Clock that sleeps the current thread for a fixed interval per frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    /// Creates a clock that waits `interval` between frames.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Returns the configured interval.
    #[must_use]
    #[rustfmt::skip]
    pub fn interval(&self) -> Duration { self.interval }
}

impl FrameClock for FixedInterval {
    fn next_frame(&mut self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}
