//! Error types for store mutations and configuration.

use core::fmt;

/// Errors raised when building sticks or validating configuration.
///
/// Interactive gestures never surface these: the editor logs and drops a
/// rejected link instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    /// A stick would connect a point to itself.
    DegenerateStick { point: usize },
    /// Rest length must be positive and finite.
    InvalidRestLength,
    /// Point handle does not resolve in the store.
    PointOutOfBounds { index: usize, count: usize },
    /// Grid must have at least one row and one column.
    InvalidGridDimensions,
    /// Grid spacing must be positive and finite.
    InvalidSpacing,
    /// Point radius must be positive and finite.
    InvalidRadius,
    /// Hit-test epsilon must be non-negative and finite.
    InvalidEpsilon,
    /// Gravity must be finite.
    InvalidGravity,
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandboxError::DegenerateStick { point } => {
                write!(f, "stick would link point {} to itself", point)
            }
            SandboxError::InvalidRestLength => write!(f, "rest length must be positive and finite"),
            SandboxError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            SandboxError::InvalidGridDimensions => write!(f, "grid must be at least 1x1"),
            SandboxError::InvalidSpacing => write!(f, "grid spacing must be positive and finite"),
            SandboxError::InvalidRadius => write!(f, "point radius must be positive and finite"),
            SandboxError::InvalidEpsilon => write!(f, "hit-test epsilon must be non-negative and finite"),
            SandboxError::InvalidGravity => write!(f, "gravity must be finite"),
        }
    }
}

impl core::error::Error for SandboxError {}
