//! Owner of every point mass and stick in the scene.

use crate::constraint::{Stick, StickId};
use crate::error::SandboxError;
use crate::float::Float;
use crate::geometry::{point_in_disc, point_near_segment};
use crate::point::{PointId, PointMass};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Points and sticks, in insertion order.
///
/// Sticks refer to points by [`PointId`]. Every stick in the store resolves;
/// [`add_constraint`](Self::add_constraint) checks the handles and
/// [`remove_point`](Self::remove_point) cascades.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StoreData<F>")
)]
pub struct EntityStore<F: Float> {
    points: AllocVec<PointMass<F>>,
    sticks: AllocVec<Stick<F>>,
}

/// Wire form of an [`EntityStore`]. Sticks are re-added one by one so a
/// decoded store holds the same guarantees as a built one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoreData<F: Float> {
    points: AllocVec<PointMass<F>>,
    sticks: AllocVec<Stick<F>>,
}

#[cfg(feature = "serde")]
impl<F: Float> TryFrom<StoreData<F>> for EntityStore<F> {
    type Error = SandboxError;

    fn try_from(data: StoreData<F>) -> Result<Self, SandboxError> {
        let mut store = EntityStore { points: data.points, sticks: AllocVec::with_capacity(data.sticks.len()) };
        for stick in data.sticks {
            store.add_constraint(stick.a, stick.b, stick.rest_length)?;
        }
        Ok(store)
    }
}

impl<F: Float> EntityStore<F> {
    pub fn new() -> Self {
        EntityStore {
            points: AllocVec::new(),
            sticks: AllocVec::new(),
        }
    }

    pub fn add_point(&mut self, pos: Vec2<F>, locked: bool) -> PointId {
        let id = PointId(self.points.len());
        let mut point = PointMass::new(pos);
        point.locked = locked;
        self.points.push(point);
        id
    }

    /// Add a stick between two live points.
    pub fn add_constraint(&mut self, a: PointId, b: PointId, rest_length: F) -> Result<StickId, SandboxError> {
        self.check_point(a)?;
        self.check_point(b)?;
        let stick = Stick::new(a, b, rest_length)?;
        let id = StickId(self.sticks.len());
        self.sticks.push(stick);
        Ok(id)
    }

    /// Add a stick whose rest length is the current distance between `a` and `b`.
    pub fn link(&mut self, a: PointId, b: PointId) -> Result<StickId, SandboxError> {
        let stick = Stick::from_points(a, b, &self.points)?;
        let id = StickId(self.sticks.len());
        self.sticks.push(stick);
        Ok(id)
    }

    /// Remove a stick, keeping the order of the rest. Later handles shift down by one.
    pub fn remove_constraint(&mut self, id: StickId) -> Option<Stick<F>> {
        if id.index() < self.sticks.len() {
            Some(self.sticks.remove(id.index()))
        } else {
            None
        }
    }

    pub fn clear_constraints(&mut self) {
        self.sticks.clear();
    }

    /// Drop every point and stick.
    pub fn clear(&mut self) {
        self.points.clear();
        self.sticks.clear();
    }

    /// Remove a point and every stick attached to it.
    ///
    /// Handles of later points shift down by one; the surviving sticks are
    /// rewritten to match.
    pub fn remove_point(&mut self, id: PointId) -> Option<PointMass<F>> {
        if id.index() >= self.points.len() {
            return None;
        }
        self.sticks.retain(|s| !s.touches(id));
        for s in self.sticks.iter_mut() {
            if s.a > id {
                s.a = PointId(s.a.index() - 1);
            }
            if s.b > id {
                s.b = PointId(s.b.index() - 1);
            }
        }
        Some(self.points.remove(id.index()))
    }

    /// The most recently inserted point whose disc contains `pos`.
    pub fn find_point_near(&self, pos: Vec2<F>, radius: F) -> Option<PointId> {
        self.points
            .iter()
            .rposition(|p| point_in_disc(p.pos, pos, radius))
            .map(PointId)
    }

    /// The earliest inserted stick passing within `epsilon` of `pos`.
    pub fn find_constraint_near(&self, pos: Vec2<F>, epsilon: F) -> Option<StickId> {
        self.sticks
            .iter()
            .position(|s| {
                let a = self.points[s.a.index()].pos;
                let b = self.points[s.b.index()].pos;
                point_near_segment(a, b, pos, epsilon)
            })
            .map(StickId)
    }

    /// Flip a point's lock flag. Returns the new state, or `None` for a stale handle.
    pub fn toggle_lock(&mut self, id: PointId) -> Option<bool> {
        self.points.get_mut(id.index()).map(PointMass::toggle_lock)
    }

    pub fn set_locked(&mut self, id: PointId, locked: bool) -> Result<(), SandboxError> {
        self.check_point(id)?;
        self.points[id.index()].locked = locked;
        Ok(())
    }

    pub fn point(&self, id: PointId) -> Option<&PointMass<F>> {
        self.points.get(id.index())
    }

    pub fn point_mut(&mut self, id: PointId) -> Option<&mut PointMass<F>> {
        self.points.get_mut(id.index())
    }

    pub fn stick(&self, id: StickId) -> Option<&Stick<F>> {
        self.sticks.get(id.index())
    }

    pub fn points(&self) -> &[PointMass<F>] { &self.points }
    pub fn sticks(&self) -> &[Stick<F>] { &self.sticks }
    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn stick_count(&self) -> usize { self.sticks.len() }

    /// Endpoint positions of a stick.
    pub fn segment(&self, id: StickId) -> Option<(Vec2<F>, Vec2<F>)> {
        let s = self.sticks.get(id.index())?;
        Some((self.points[s.a.index()].pos, self.points[s.b.index()].pos))
    }

    /// Swap in a fresh set of points and sticks wholesale.
    pub(crate) fn replace(&mut self, points: AllocVec<PointMass<F>>, sticks: AllocVec<Stick<F>>) {
        self.points = points;
        self.sticks = sticks;
    }

    /// Mutable points alongside the sticks that read them, for relaxation.
    pub(crate) fn parts_mut(&mut self) -> (&mut [PointMass<F>], &[Stick<F>]) {
        (&mut self.points, &self.sticks)
    }

    fn check_point(&self, id: PointId) -> Result<(), SandboxError> {
        if id.index() < self.points.len() {
            Ok(())
        } else {
            Err(SandboxError::PointOutOfBounds { index: id.index(), count: self.points.len() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2<f32> {
        Vec2::new(x, y)
    }

    #[test]
    fn find_point_near_prefers_latest() {
        let mut store = EntityStore::new();
        let first = store.add_point(v(100.0, 100.0), false);
        let second = store.add_point(v(104.0, 100.0), false);
        assert_ne!(first, second);
        assert_eq!(store.find_point_near(v(102.0, 100.0), 10.0), Some(second));
    }

    #[test]
    fn find_point_near_misses() {
        let mut store = EntityStore::new();
        store.add_point(v(0.0, 0.0), false);
        assert_eq!(store.find_point_near(v(50.0, 50.0), 10.0), None);
    }

    #[test]
    fn find_constraint_near_prefers_earliest() {
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let b = store.add_point(v(100.0, 0.0), false);
        let c = store.add_point(v(0.0, 1.0), false);
        let d = store.add_point(v(100.0, 1.0), false);
        let first = store.add_constraint(a, b, 100.0).unwrap();
        store.add_constraint(c, d, 100.0).unwrap();
        assert_eq!(store.find_constraint_near(v(50.0, 0.5), 2.5), Some(first));
    }

    #[test]
    fn add_constraint_rejects_stale_handle() {
        let mut store = EntityStore::<f32>::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let err = store.add_constraint(a, PointId(4), 1.0).unwrap_err();
        assert_eq!(err, SandboxError::PointOutOfBounds { index: 4, count: 1 });
        assert_eq!(store.stick_count(), 0);
    }

    #[test]
    fn remove_constraint_keeps_order() {
        let mut store = EntityStore::new();
        let p: AllocVec<_> = (0..4).map(|i| store.add_point(v(i as f32 * 10.0, 0.0), false)).collect();
        store.add_constraint(p[0], p[1], 10.0).unwrap();
        store.add_constraint(p[1], p[2], 10.0).unwrap();
        store.add_constraint(p[2], p[3], 10.0).unwrap();
        let removed = store.remove_constraint(StickId(0)).unwrap();
        assert_eq!(removed.a, p[0]);
        assert_eq!(store.sticks()[0].a, p[1]);
        assert_eq!(store.sticks()[1].a, p[2]);
        assert!(store.remove_constraint(StickId(9)).is_none());
    }

    #[test]
    fn remove_point_cascades_and_reindexes() {
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let b = store.add_point(v(10.0, 0.0), false);
        let c = store.add_point(v(20.0, 0.0), false);
        let d = store.add_point(v(30.0, 0.0), false);
        store.add_constraint(a, b, 10.0).unwrap();
        store.add_constraint(b, c, 10.0).unwrap();
        store.add_constraint(c, d, 10.0).unwrap();

        store.remove_point(b).unwrap();

        assert_eq!(store.point_count(), 3);
        assert_eq!(store.stick_count(), 1);
        let s = &store.sticks()[0];
        assert_eq!((s.a, s.b), (PointId(1), PointId(2)));
        let (pa, pb) = store.segment(StickId(0)).unwrap();
        assert!((pa.x - 20.0).abs() < 1e-6);
        assert!((pb.x - 30.0).abs() < 1e-6);
    }

    #[test]
    fn toggle_lock_reports_state() {
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        assert_eq!(store.toggle_lock(a), Some(true));
        assert_eq!(store.toggle_lock(a), Some(false));
        assert_eq!(store.toggle_lock(PointId(3)), None);
    }

    #[test]
    fn link_uses_current_distance() {
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let b = store.add_point(v(6.0, 8.0), true);
        let id = store.link(a, b).unwrap();
        assert!((store.stick(id).unwrap().rest_length - 10.0).abs() < 1e-6);
    }
}
