//! Tunables for editing and simulation.

use crate::error::SandboxError;
use crate::float::Float;
use crate::grid::GridConfig;
use crate::vec::Vec2;

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Visual-scale multiplier applied to [`STANDARD_GRAVITY`] so that falls
/// read well at screen-pixel units.
pub const DEFAULT_GRAVITY_SCALE: f32 = 200.0;

/// What happens to existing sticks when a new point is placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NewPointPolicy {
    /// Drop every stick.
    #[default]
    ClearConstraints,
    /// Leave sticks alone. A new point never invalidates an existing handle.
    KeepConstraints,
}

/// Configuration for the sandbox.
///
/// # Builder Pattern
/// ```
/// use sticks::config::SandboxConfig;
/// use sticks::vec::Vec2;
///
/// let config: SandboxConfig<f32> = SandboxConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec2::new(0.0, 981.0))
///     .with_point_radius(12.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SandboxConfig<F: Float> {
    /// Relaxation passes over all sticks per step. Default: 5.
    pub iterations: usize,
    /// Gravity acceleration, y pointing down. Default: (0, 9.81 * 200).
    pub gravity: Vec2<F>,
    /// Radius shared by point selection and the placement check. Default: 10.
    pub point_radius: F,
    /// Triangle-inequality slack used by the cut gesture. Default: 2.5.
    pub cut_epsilon: F,
    pub new_point_policy: NewPointPolicy,
    /// Lattice produced by the bulk-generate command.
    pub grid: GridConfig<F>,
}

impl<F: Float> SandboxConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SandboxConfig {
            iterations: 5,
            gravity: Vec2::new(F::zero(), F::from_f32(STANDARD_GRAVITY * DEFAULT_GRAVITY_SCALE)),
            point_radius: F::from_f32(10.0),
            cut_epsilon: F::from_f32(2.5),
            new_point_policy: NewPointPolicy::default(),
            grid: GridConfig::default(),
        }
    }

    /// Set the number of relaxation iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Straight-down gravity of `9.81 * scale`.
    pub fn with_gravity_scale(mut self, scale: F) -> Self {
        self.gravity = Vec2::new(F::zero(), F::from_f32(STANDARD_GRAVITY) * scale);
        self
    }

    pub fn with_point_radius(mut self, radius: F) -> Self {
        self.point_radius = radius;
        self
    }

    pub fn with_cut_epsilon(mut self, epsilon: F) -> Self {
        self.cut_epsilon = epsilon;
        self
    }

    pub fn with_new_point_policy(mut self, policy: NewPointPolicy) -> Self {
        self.new_point_policy = policy;
        self
    }

    pub fn with_grid(mut self, grid: GridConfig<F>) -> Self {
        self.grid = grid;
        self
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        if !self.point_radius.is_finite() || self.point_radius <= F::zero() {
            return Err(SandboxError::InvalidRadius);
        }
        if !self.cut_epsilon.is_finite() || self.cut_epsilon < F::zero() {
            return Err(SandboxError::InvalidEpsilon);
        }
        if !self.gravity.is_finite() {
            return Err(SandboxError::InvalidGravity);
        }
        self.grid.validate()
    }
}

impl<F: Float> Default for SandboxConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
