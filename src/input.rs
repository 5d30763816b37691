//! Per-frame input delivered by the host's event loop.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A discrete user action. Positions are in world space, the same space
/// point positions are stored in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent<F: Float> {
    /// Flip between editing and simulating.
    ToggleMode,
    /// Primary button pressed: place a point or toggle its lock.
    Primary(Vec2<F>),
    /// Secondary button pressed: begin a link.
    SecondaryPressed(Vec2<F>),
    /// Secondary button released: finish a link.
    SecondaryReleased(Vec2<F>),
    /// Replace the scene with the seed lattice.
    GenerateGrid,
}

/// Everything the sandbox reads from the host for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput<F: Float> {
    /// Current pointer position.
    pub pointer: Vec2<F>,
    /// Discrete events in arrival order.
    pub events: AllocVec<InputEvent<F>>,
    /// Whether the secondary button is down right now.
    pub secondary_held: bool,
}

impl<F: Float> FrameInput<F> {
    /// A frame with the pointer at `pointer` and nothing else happening.
    pub fn idle(pointer: Vec2<F>) -> Self {
        FrameInput { pointer, events: AllocVec::new(), secondary_held: false }
    }

    pub fn with_event(mut self, event: InputEvent<F>) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_secondary_held(mut self, held: bool) -> Self {
        self.secondary_held = held;
        self
    }
}
