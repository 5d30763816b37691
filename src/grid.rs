//! Bulk seeding of a rectangular lattice of points and sticks.

use crate::constraint::Stick;
use crate::error::SandboxError;
use crate::float::Float;
use crate::point::{PointId, PointMass};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Shape of the seed lattice produced by the bulk-generate command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    /// Position of the point at column 0, row 0.
    pub origin: Vec2<F>,
}

impl<F: Float> GridConfig<F> {
    /// A `size`×`size` lattice.
    pub fn square(size: usize, spacing: F, origin: Vec2<F>) -> Self {
        GridConfig { cols: size, rows: size, spacing, origin }
    }

    /// Point at (col, row) has index `row * cols + col`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    pub fn point_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Horizontal plus vertical nearest-neighbour links.
    pub fn stick_count(&self) -> usize {
        self.rows * self.cols.saturating_sub(1) + self.cols * self.rows.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(SandboxError::InvalidGridDimensions);
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(SandboxError::InvalidSpacing);
        }
        Ok(())
    }

    /// Build the lattice: unlocked points at rest, each linked to its right
    /// and lower neighbour with rest length `spacing`.
    pub fn build(&self) -> Result<(AllocVec<PointMass<F>>, AllocVec<Stick<F>>), SandboxError> {
        self.validate()?;
        let cols = self.cols;
        let rows = self.rows;

        let mut points = AllocVec::with_capacity(self.point_count());
        for row in 0..rows {
            for col in 0..cols {
                let x = self.origin.x + F::from_usize(col) * self.spacing;
                let y = self.origin.y + F::from_usize(row) * self.spacing;
                points.push(PointMass::new(Vec2::new(x, y)));
            }
        }

        let mut sticks = AllocVec::with_capacity(self.stick_count());
        for row in 0..rows {
            for col in 0..cols {
                let here = PointId(self.index(col, row));
                if col + 1 < cols {
                    sticks.push(Stick::new(here, PointId(self.index(col + 1, row)), self.spacing)?);
                }
                if row + 1 < rows {
                    sticks.push(Stick::new(here, PointId(self.index(col, row + 1)), self.spacing)?);
                }
            }
        }

        Ok((points, sticks))
    }
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        let fifty = F::from_f32(50.0);
        GridConfig::square(15, fifty, Vec2::new(fifty, fifty))
    }
}
