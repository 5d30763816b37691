//! Point masses: Verlet particles that can be locked in place.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Stable handle to a point in an [`EntityStore`](crate::store::EntityStore).
///
/// Handles are insertion indices. They stay valid until the point is removed
/// or the store is cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointId(pub usize);

impl PointId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A Verlet point mass. Velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointMass<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub locked: bool,
}

impl<F: Float> PointMass<F> {
    /// An unlocked point at rest.
    pub fn new(pos: Vec2<F>) -> Self {
        PointMass { pos, prev_pos: pos, locked: false }
    }

    /// A locked point at rest.
    pub fn locked(pos: Vec2<F>) -> Self {
        PointMass { pos, prev_pos: pos, locked: true }
    }

    /// One Störmer-Verlet step under constant acceleration.
    ///
    /// Locked points are left untouched, including `prev_pos`.
    pub fn integrate(&mut self, acceleration: Vec2<F>, dt: F) {
        if self.locked {
            return;
        }
        let velocity = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity + acceleration.scale(dt * dt);
    }

    /// Flip the lock flag and return the new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    /// Move to `pos` unless locked. Used by relaxation, which must not carry
    /// the correction into velocity, so `prev_pos` is kept.
    pub fn project(&mut self, pos: Vec2<F>) {
        if !self.locked {
            self.pos = pos;
        }
    }
}
