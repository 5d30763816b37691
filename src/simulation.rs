//! One fixed physics step: cut, integrate, relax.

use crate::config::SandboxConfig;
use crate::constraint::StickId;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::store::EntityStore;
use crate::vec::Vec2;
use tracing::{debug, trace};

/// Remove the earliest stick within `epsilon` of `pos`. At most one stick
/// goes per call.
pub fn cut_at<F: Float>(store: &mut EntityStore<F>, pos: Vec2<F>, epsilon: F) -> Option<StickId> {
    let id = store.find_constraint_near(pos, epsilon)?;
    store.remove_constraint(id)?;
    debug!(stick = id.index(), "cut stick");
    Some(id)
}

/// Verlet-integrate every unlocked point under constant `gravity`.
pub fn integrate<F: Float>(store: &mut EntityStore<F>, gravity: Vec2<F>, dt: F) {
    let (points, _) = store.parts_mut();
    for p in points.iter_mut() {
        p.integrate(gravity, dt);
    }
}

/// Run `iterations` Gauss-Seidel passes over every stick in insertion order.
pub fn relax<F: Float, O: StepObserver>(store: &mut EntityStore<F>, iterations: usize, observer: &mut O) {
    let (points, sticks) = store.parts_mut();
    for i in 0..iterations {
        for stick in sticks {
            stick.relax(points);
        }
        observer.on_relax_iteration(i);
    }
}

/// Advance the scene by `dt`.
///
/// When `cut` carries the pointer position, the cut gesture runs first and
/// the removed stick is returned.
pub fn step<F: Float, O: StepObserver>(
    store: &mut EntityStore<F>,
    config: &SandboxConfig<F>,
    dt: F,
    cut: Option<Vec2<F>>,
    observer: &mut O,
) -> Option<StickId> {
    let removed = cut.and_then(|pos| cut_at(store, pos, config.cut_epsilon));
    if let Some(id) = removed {
        observer.on_stick_cut(id);
    }

    integrate(store, config.gravity, dt);
    observer.on_integrate();

    relax(store, config.iterations, observer);

    trace!(points = store.point_count(), sticks = store.stick_count(), "step complete");
    observer.on_step_complete();
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NoOpStepObserver, StepCounter};
    use crate::vec::Vec;

    #[test]
    fn verlet_step_is_exact() {
        let mut store = EntityStore::new();
        let id = store.add_point(Vec2::new(100.0f64, 100.0), false);
        store.point_mut(id).unwrap().prev_pos = Vec2::new(98.0, 101.0);
        let g = Vec2::new(0.0, 1962.0);
        let dt = 1.0 / 60.0;

        integrate(&mut store, g, dt);

        let p = store.point(id).unwrap();
        let expected = Vec2::new(100.0 + 2.0, 100.0 - 1.0 + 1962.0 * dt * dt);
        assert!((p.pos.x - expected.x).abs() < 1e-9);
        assert!((p.pos.y - expected.y).abs() < 1e-9);
        assert_eq!(p.prev_pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn cut_removes_one_stick_per_call() {
        let mut store = EntityStore::new();
        let a = store.add_point(Vec2::new(0.0f32, 0.0), true);
        let b = store.add_point(Vec2::new(100.0, 0.0), true);
        store.add_constraint(a, b, 100.0).unwrap();
        store.add_constraint(a, b, 100.0).unwrap();

        assert_eq!(cut_at(&mut store, Vec2::new(50.0, 0.0), 2.5), Some(StickId(0)));
        assert_eq!(store.stick_count(), 1);
        assert_eq!(cut_at(&mut store, Vec2::new(50.0, 40.0), 2.5), None);
        assert_eq!(store.stick_count(), 1);
    }

    #[test]
    fn step_reports_to_observer() {
        let mut store = EntityStore::new();
        let a = store.add_point(Vec2::new(0.0f32, 0.0), true);
        let b = store.add_point(Vec2::new(10.0, 0.0), false);
        store.add_constraint(a, b, 10.0).unwrap();
        let config = SandboxConfig::new();
        let mut counter = StepCounter::default();

        let cut = step(&mut store, &config, 1.0 / 60.0, Some(Vec2::new(5.0, 0.0)), &mut counter);

        assert_eq!(cut, Some(StickId(0)));
        assert_eq!(store.stick_count(), 0);
        assert_eq!(counter.cuts, 1);
        assert_eq!(counter.integrations, 1);
        assert_eq!(counter.relax_iterations, 5);
        assert_eq!(counter.steps, 1);
    }

    #[test]
    fn pendulum_keeps_length() {
        let mut store = EntityStore::new();
        let anchor = store.add_point(Vec2::new(0.0f64, 0.0), true);
        let bob = store.add_point(Vec2::new(40.0, 0.0), false);
        store.add_constraint(anchor, bob, 40.0).unwrap();
        let config = SandboxConfig::new().with_iterations(20);

        for _ in 0..30 {
            step(&mut store, &config, 1.0 / 60.0, None, &mut NoOpStepObserver);
        }

        let len = store.point(anchor).unwrap().pos.distance(store.point(bob).unwrap().pos);
        assert!((len - 40.0).abs() < 0.5, "length drifted to {}", len);
        assert!(store.point(bob).unwrap().pos.y > 0.0, "bob should swing below the anchor");
        assert_eq!(store.point(anchor).unwrap().pos, Vec2::new(0.0, 0.0));
    }
}
