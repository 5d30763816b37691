//! Frame timing sources.
//!
//! The sandbox only reads a clock. Whoever drives the frame loop advances it.

use crate::float::Float;

/// Elapsed time and the delta of the current frame, in seconds.
pub trait FrameClock<F: Float> {
    /// Time since the clock started. Never decreases.
    fn elapsed(&self) -> F;
    /// Length of the current frame.
    fn delta(&self) -> F;
}

/// Advances by the same delta every tick, as a vsync-capped loop does.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepClock<F: Float> {
    step: F,
    elapsed: F,
}

impl<F: Float> FixedStepClock<F> {
    pub fn new(step: F) -> Self {
        FixedStepClock { step, elapsed: F::zero() }
    }

    /// 60 Hz.
    pub fn sixty_hz() -> Self {
        Self::new(F::one() / F::from_f32(60.0))
    }

    pub fn tick(&mut self) {
        self.elapsed = self.elapsed + self.step;
    }
}

impl<F: Float> FrameClock<F> for FixedStepClock<F> {
    fn elapsed(&self) -> F { self.elapsed }
    fn delta(&self) -> F { self.step }
}

/// Takes the measured frame delta from the host each tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualClock<F: Float> {
    delta: F,
    elapsed: F,
}

impl<F: Float> ManualClock<F> {
    pub fn new() -> Self {
        ManualClock { delta: F::zero(), elapsed: F::zero() }
    }

    /// Record a frame of length `dt`. Negative deltas are clamped to zero so
    /// elapsed time stays monotonic.
    pub fn tick(&mut self, dt: F) {
        self.delta = dt.max(F::zero());
        self.elapsed = self.elapsed + self.delta;
    }
}

impl<F: Float> FrameClock<F> for ManualClock<F> {
    fn elapsed(&self) -> F { self.elapsed }
    fn delta(&self) -> F { self.delta }
}
