//! The owned sandbox state and its per-frame entry point.

use crate::clock::FrameClock;
use crate::config::SandboxConfig;
use crate::constraint::StickId;
use crate::editor::EditAction;
use crate::error::SandboxError;
use crate::float::Float;
use crate::input::{FrameInput, InputEvent};
use crate::mode::Mode;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::simulation;
use crate::store::EntityStore;
use crate::vec::Vec2;
use crate::view::SceneView;
use alloc::vec::Vec as AllocVec;
use tracing::{trace, warn};

/// What one call to [`Sandbox::advance`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Outcome of each edit-mode event, in arrival order.
    pub edits: AllocVec<EditAction>,
    /// Stick removed by the cut gesture this frame.
    pub cut: Option<StickId>,
    /// Whether a physics step ran.
    pub stepped: bool,
}

/// Points, sticks, mode, and configuration behind one frame loop.
///
/// Each [`advance`](Self::advance) first applies every queued event in
/// order, then, in simulate mode, runs the cut gesture and one physics step.
pub struct Sandbox<F: Float> {
    store: EntityStore<F>,
    mode: Mode,
    config: SandboxConfig<F>,
    steps: u64,
    simulated_time: F,
}

impl<F: Float> Sandbox<F> {
    pub fn new(config: SandboxConfig<F>) -> Result<Self, SandboxError> {
        config.validate()?;
        Ok(Sandbox {
            store: EntityStore::new(),
            mode: Mode::default(),
            config,
            steps: 0,
            simulated_time: F::zero(),
        })
    }

    /// Process one frame of input and, when simulating, step by `dt`.
    ///
    /// A negative or non-finite `dt` is treated as zero: the frame still
    /// counts as a step, but nothing moves and simulated time holds.
    pub fn advance(&mut self, input: &FrameInput<F>, dt: F) -> FrameReport {
        self.advance_observed(input, dt, &mut NoOpStepObserver)
    }

    /// [`advance`](Self::advance) with the step length read from `clock`.
    pub fn advance_with_clock<C: FrameClock<F>>(&mut self, input: &FrameInput<F>, clock: &C) -> FrameReport {
        self.advance(input, clock.delta())
    }

    /// [`advance`](Self::advance), reporting the physics step to `observer`.
    pub fn advance_observed<O: StepObserver>(
        &mut self,
        input: &FrameInput<F>,
        dt: F,
        observer: &mut O,
    ) -> FrameReport {
        let mut report = FrameReport::default();

        for event in &input.events {
            if let Some(action) = self.handle_event(*event) {
                report.edits.push(action);
            }
        }

        if self.mode.is_simulating() {
            let dt = sanitize_dt(dt);
            let cut = input.secondary_held.then_some(input.pointer);
            report.cut = simulation::step(&mut self.store, &self.config, dt, cut, observer);
            self.steps += 1;
            self.simulated_time = self.simulated_time + dt;
            report.stepped = true;
        }

        report
    }

    fn handle_event(&mut self, event: InputEvent<F>) -> Option<EditAction> {
        if let InputEvent::ToggleMode = event {
            self.mode.toggle();
            return None;
        }

        let state = match &mut self.mode {
            Mode::Edit(state) => state,
            Mode::Simulate => {
                trace!(?event, "ignored outside edit mode");
                return None;
            }
        };

        let action = match event {
            InputEvent::Primary(pos) => state.place_or_toggle(&mut self.store, pos, &self.config),
            InputEvent::SecondaryPressed(pos) => state.begin_link(&self.store, pos, &self.config),
            InputEvent::SecondaryReleased(pos) => state.end_link(&mut self.store, pos, &self.config),
            InputEvent::GenerateGrid => state.generate_grid(&mut self.store, &self.config),
            InputEvent::ToggleMode => return None,
        };
        Some(action)
    }

    /// Read-only view for rendering; `pointer` anchors the link preview.
    pub fn view(&self, pointer: Vec2<F>) -> SceneView<'_, F> {
        let preview = self
            .mode
            .pending_link()
            .and_then(|start| self.store.point(start))
            .map(|p| (p.pos, pointer));
        SceneView::new(&self.store, preview, self.config.point_radius, self.mode.is_simulating())
    }

    pub fn store(&self) -> &EntityStore<F> { &self.store }

    /// Direct store access for hosts that script scenes. Handles held by the
    /// current link gesture are not revalidated.
    pub fn store_mut(&mut self) -> &mut EntityStore<F> { &mut self.store }

    pub fn mode(&self) -> &Mode { &self.mode }
    pub fn config(&self) -> &SandboxConfig<F> { &self.config }

    /// Physics steps run so far.
    pub fn step_count(&self) -> u64 { self.steps }

    /// Sum of `dt` over all physics steps.
    pub fn simulated_time(&self) -> F { self.simulated_time }
}

impl<F: Float> Default for Sandbox<F> {
    fn default() -> Self {
        Sandbox {
            store: EntityStore::new(),
            mode: Mode::default(),
            config: SandboxConfig::default(),
            steps: 0,
            simulated_time: F::zero(),
        }
    }
}

fn sanitize_dt<F: Float>(dt: F) -> F {
    if dt.is_finite() && dt >= F::zero() {
        dt
    } else {
        warn!(?dt, "invalid frame delta, stepping by zero");
        F::zero()
    }
}
