//! Rigid distance links ("sticks") between two point masses.

use crate::error::SandboxError;
use crate::float::Float;
use crate::point::{PointId, PointMass};
use crate::vec::Vec;

/// Handle to a stick: its current position in the store's stick list.
///
/// Unlike [`PointId`], stick handles shift when an earlier stick is removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickId(pub usize);

impl StickId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A fixed-length link between two distinct points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StickData<F>")
)]
pub struct Stick<F: Float> {
    pub a: PointId,
    pub b: PointId,
    pub rest_length: F,
}

/// Wire form of a [`Stick`]; decoded sticks go through [`Stick::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StickData<F: Float> {
    a: PointId,
    b: PointId,
    rest_length: F,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<StickData<F>> for Stick<F> {
    type Error = SandboxError;

    fn try_from(data: StickData<F>) -> Result<Self, SandboxError> {
        Stick::new(data.a, data.b, data.rest_length)
    }
}

impl<F: Float> Stick<F> {
    /// Build a stick, rejecting self-links and non-positive rest lengths.
    pub fn new(a: PointId, b: PointId, rest_length: F) -> Result<Self, SandboxError> {
        if a == b {
            return Err(SandboxError::DegenerateStick { point: a.index() });
        }
        if !rest_length.is_finite() || rest_length <= F::zero() {
            return Err(SandboxError::InvalidRestLength);
        }
        Ok(Stick { a, b, rest_length })
    }

    /// Build a stick whose rest length is the current distance between `a` and `b`.
    pub fn from_points(a: PointId, b: PointId, points: &[PointMass<F>]) -> Result<Self, SandboxError> {
        let count = points.len();
        let pa = points
            .get(a.index())
            .ok_or(SandboxError::PointOutOfBounds { index: a.index(), count })?;
        let pb = points
            .get(b.index())
            .ok_or(SandboxError::PointOutOfBounds { index: b.index(), count })?;
        Stick::new(a, b, pa.pos.distance(pb.pos))
    }

    /// True when either endpoint is `id`.
    pub fn touches(&self, id: PointId) -> bool {
        self.a == id || self.b == id
    }

    /// Current length of the stick, or `None` if an endpoint is missing from `points`.
    pub fn length(&self, points: &[PointMass<F>]) -> Option<F> {
        let a = points.get(self.a.index())?;
        let b = points.get(self.b.index())?;
        Some(a.pos.distance(b.pos))
    }

    /// Project both endpoints onto the rest length around their shared
    /// midpoint. Locked endpoints stay where they are, so a stick with one
    /// locked end pulls the free end onto a circle around it.
    ///
    /// `points` must hold both endpoints; the store guarantees this.
    pub(crate) fn relax(&self, points: &mut [PointMass<F>]) {
        let a_pos = points[self.a.index()].pos;
        let b_pos = points[self.b.index()].pos;

        let center = a_pos.midpoint(b_pos);
        let offset = (a_pos - b_pos).normalize().scale(self.rest_length * F::half());

        points[self.a.index()].project(center + offset);
        points[self.b.index()].project(center - offset);
    }
}
