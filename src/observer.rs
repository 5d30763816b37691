//! Step observer trait for monitoring the simulation.

use crate::constraint::StickId;

/// Trait for observing simulation steps.
///
/// Implement this to hook debugging overlays or profiling into the frame
/// loop. All methods have default no-op implementations.
pub trait StepObserver {
    /// Called when the cut gesture removes a stick.
    fn on_stick_cut(&mut self, _stick: StickId) {}

    /// Called after all points have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the sticks.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts every callback it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub cuts: usize,
    pub integrations: usize,
    pub relax_iterations: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_stick_cut(&mut self, _stick: StickId) {
        self.cuts += 1;
    }

    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_relax_iteration(&mut self, _iteration: usize) {
        self.relax_iterations += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
