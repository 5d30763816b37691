//! Read-only scene access for renderers.

use crate::float::Float;
use crate::store::EntityStore;
use crate::vec::Vec2;

/// Snapshot of what a renderer needs after a frame settles.
pub struct SceneView<'a, F: Float> {
    store: &'a EntityStore<F>,
    preview: Option<(Vec2<F>, Vec2<F>)>,
    point_radius: F,
    simulating: bool,
}

impl<'a, F: Float> SceneView<'a, F> {
    pub(crate) fn new(
        store: &'a EntityStore<F>,
        preview: Option<(Vec2<F>, Vec2<F>)>,
        point_radius: F,
        simulating: bool,
    ) -> Self {
        SceneView { store, preview, point_radius, simulating }
    }

    /// Position and lock flag of every point, in insertion order.
    pub fn points(&self) -> impl Iterator<Item = (Vec2<F>, bool)> + 'a {
        self.store.points().iter().map(|p| (p.pos, p.locked))
    }

    /// Endpoint positions of every stick, in insertion order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + 'a {
        let points = self.store.points();
        self.store
            .sticks()
            .iter()
            .map(move |s| (points[s.a.index()].pos, points[s.b.index()].pos))
    }

    /// From the pending link start to the pointer, while a link is being drawn.
    pub fn preview_link(&self) -> Option<(Vec2<F>, Vec2<F>)> {
        self.preview
    }

    pub fn point_radius(&self) -> F {
        self.point_radius
    }

    pub fn is_simulating(&self) -> bool {
        self.simulating
    }

    pub fn point_count(&self) -> usize {
        self.store.point_count()
    }

    pub fn stick_count(&self) -> usize {
        self.store.stick_count()
    }
}
