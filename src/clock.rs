//! Monotonic elapsed-time sources.
//!
//! A clock is started once and never reset. The frame loop reads it exactly once
//! per frame.

use std::cell::Cell;

use instant::Instant;

/// Seconds elapsed since the clock started.
pub trait Clock {
    fn elapsed(&self) -> f32;
}

/// Wall clock backed by `instant`, which also works on wasm.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for InstantClock {
    fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// A clock the host advances by hand, e.g. a fixed-step host or a test.
///
/// Negative or NaN steps are ignored so the clock stays monotonic.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<f32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, seconds: f32) {
        if seconds > 0.0 {
            self.now.set(self.now.get() + seconds);
        }
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f32 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> f32 {
        (**self).elapsed()
    }
}
