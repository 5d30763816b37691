//! Edit-mode gestures: placing points, toggling locks, drawing links.

use crate::config::{NewPointPolicy, SandboxConfig};
use crate::constraint::StickId;
use crate::float::Float;
use crate::point::PointId;
use crate::store::EntityStore;
use crate::vec::Vec2;
use tracing::{debug, warn};

/// Link gesture progress while editing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    /// Secondary button went down on `start` and has not been released yet.
    Linking { start: PointId },
}

/// What an edit gesture did to the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// An existing point had its lock flipped to `locked`.
    ToggledLock { point: PointId, locked: bool },
    /// A new point was placed; `cleared` sticks were dropped with it.
    Placed { point: PointId, cleared: usize },
    LinkStarted { start: PointId },
    Linked { stick: StickId },
    /// The link gesture ended without producing a stick.
    LinkCancelled,
    /// The scene was replaced by the seed lattice.
    Generated { points: usize, sticks: usize },
    /// The gesture had nothing to act on.
    Ignored,
}

impl EditState {
    /// Pending link start, if a link gesture is in progress.
    pub fn pending_link(&self) -> Option<PointId> {
        match *self {
            EditState::Linking { start } => Some(start),
            EditState::Idle => None,
        }
    }

    /// Primary action: toggle the lock of the point under `pos`, or place a
    /// new unlocked point there.
    pub fn place_or_toggle<F: Float>(
        &mut self,
        store: &mut EntityStore<F>,
        pos: Vec2<F>,
        config: &SandboxConfig<F>,
    ) -> EditAction {
        if let Some(point) = store.find_point_near(pos, config.point_radius) {
            let locked = store.toggle_lock(point).unwrap_or(false);
            debug!(point = point.index(), locked, "toggled lock");
            return EditAction::ToggledLock { point, locked };
        }

        let point = store.add_point(pos, false);
        let cleared = match config.new_point_policy {
            NewPointPolicy::ClearConstraints => {
                let n = store.stick_count();
                store.clear_constraints();
                n
            }
            NewPointPolicy::KeepConstraints => 0,
        };
        debug!(point = point.index(), cleared, "placed point");
        EditAction::Placed { point, cleared }
    }

    /// Secondary press: start linking from the point under `pos`, if any.
    pub fn begin_link<F: Float>(
        &mut self,
        store: &EntityStore<F>,
        pos: Vec2<F>,
        config: &SandboxConfig<F>,
    ) -> EditAction {
        match store.find_point_near(pos, config.point_radius) {
            Some(start) => {
                *self = EditState::Linking { start };
                debug!(start = start.index(), "link started");
                EditAction::LinkStarted { start }
            }
            None => {
                *self = EditState::Idle;
                EditAction::Ignored
            }
        }
    }

    /// Secondary release: link the pending start to the point under `pos`.
    /// Always returns to idle.
    pub fn end_link<F: Float>(
        &mut self,
        store: &mut EntityStore<F>,
        pos: Vec2<F>,
        config: &SandboxConfig<F>,
    ) -> EditAction {
        let start = match core::mem::take(self) {
            EditState::Linking { start } => start,
            EditState::Idle => return EditAction::Ignored,
        };

        let end = match store.find_point_near(pos, config.point_radius) {
            Some(end) if end != start => end,
            _ => return EditAction::LinkCancelled,
        };

        match store.link(start, end) {
            Ok(stick) => {
                debug!(stick = stick.index(), a = start.index(), b = end.index(), "linked points");
                EditAction::Linked { stick }
            }
            Err(err) => {
                warn!(%err, "link rejected");
                EditAction::LinkCancelled
            }
        }
    }

    /// Replace every point and stick with the configured seed lattice.
    pub fn generate_grid<F: Float>(
        &mut self,
        store: &mut EntityStore<F>,
        config: &SandboxConfig<F>,
    ) -> EditAction {
        match config.grid.build() {
            Ok((points, sticks)) => {
                let counts = (points.len(), sticks.len());
                store.replace(points, sticks);
                *self = EditState::Idle;
                debug!(points = counts.0, sticks = counts.1, "generated grid");
                EditAction::Generated { points: counts.0, sticks: counts.1 }
            }
            Err(err) => {
                warn!(%err, "grid generation skipped");
                EditAction::Ignored
            }
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
    fn primary_on_empty_space_places_and_clears() {
        let config = SandboxConfig::new();
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let b = store.add_point(v(100.0, 0.0), false);
        store.add_constraint(a, b, 100.0).unwrap();

        let mut state = EditState::Idle;
        let action = state.place_or_toggle(&mut store, v(300.0, 300.0), &config);

        assert_eq!(action, EditAction::Placed { point: PointId(2), cleared: 1 });
        assert_eq!(store.point_count(), 3);
        assert_eq!(store.stick_count(), 0);
    }

    #[test]
    fn keep_policy_preserves_sticks() {
        let config = SandboxConfig::new().with_new_point_policy(NewPointPolicy::KeepConstraints);
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let b = store.add_point(v(100.0, 0.0), false);
        store.add_constraint(a, b, 100.0).unwrap();

        let mut state = EditState::Idle;
        state.place_or_toggle(&mut store, v(300.0, 300.0), &config);
        assert_eq!(store.stick_count(), 1);
    }

    #[test]
    fn begin_link_on_miss_stays_idle() {
        let config = SandboxConfig::new();
        let mut store = EntityStore::new();
        store.add_point(v(0.0, 0.0), false);
        let mut state = EditState::Idle;
        assert_eq!(state.begin_link(&store, v(500.0, 0.0), &config), EditAction::Ignored);
        assert_eq!(state, EditState::Idle);
    }

    #[test]
    fn end_link_on_same_point_cancels() {
        let config = SandboxConfig::new();
        let mut store = EntityStore::new();
        let a = store.add_point(v(0.0, 0.0), false);
        let mut state = EditState::Idle;
        state.begin_link(&store, v(1.0, 1.0), &config);
        assert_eq!(state.pending_link(), Some(a));
        assert_eq!(state.end_link(&mut store, v(2.0, 0.0), &config), EditAction::LinkCancelled);
        assert_eq!(state, EditState::Idle);
        assert_eq!(store.stick_count(), 0);
    }

    #[test]
    fn end_link_on_coincident_point_is_rejected() {
        let config = SandboxConfig::new();
        let mut store = EntityStore::new();
        store.add_point(v(50.0, 50.0), false);
        store.add_point(v(50.0, 50.0), false);
        let mut state = EditState::Linking { start: PointId(0) };
        // resolves to the later point, which sits at zero distance
        assert_eq!(state.end_link(&mut store, v(50.0, 50.0), &config), EditAction::LinkCancelled);
        assert_eq!(store.stick_count(), 0);
    }

    #[test]
    fn end_link_while_idle_is_ignored() {
        let config = SandboxConfig::new();
        let mut store = EntityStore::<f32>::new();
        let mut state = EditState::Idle;
        assert_eq!(state.end_link(&mut store, v(0.0, 0.0), &config), EditAction::Ignored);
    }

    #[test]
    fn generate_grid_replaces_scene() {
        let config = SandboxConfig::new();
        let mut store = EntityStore::new();
        store.add_point(v(1000.0, 1000.0), true);
        let mut state = EditState::Linking { start: PointId(0) };
        let action = state.generate_grid(&mut store, &config);
        assert_eq!(action, EditAction::Generated { points: 225, sticks: 420 });
        assert_eq!(state, EditState::Idle);
        assert!(store.points().iter().all(|p| !p.locked));
    }
}
