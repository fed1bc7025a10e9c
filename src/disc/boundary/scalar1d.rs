use serde::Deserialize;

use crate::{
    disc::{boundary::BoundaryPosition, mesh::GridOrigin},
    error::SolverError,
};

/// Edge treatment for a scalar 1D field, fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// The domain wraps; the last node mirrors the first.
    Periodic,
    /// Dirichlet values pinned at both ends.
    Fixed { left: f64, right: f64 },
}
impl BoundaryPolicy {
    pub fn grid_origin(&self) -> GridOrigin {
        match self {
            BoundaryPolicy::Periodic => GridOrigin::Zero,
            BoundaryPolicy::Fixed { .. } => GridOrigin::Centered,
        }
    }
    pub fn validate(&self) -> Result<(), SolverError> {
        if let BoundaryPolicy::Fixed { left, right } = self {
            if !left.is_finite() || !right.is_finite() {
                return Err(SolverError::invalid_configuration(format!(
                    "fixed boundary values must be finite, got left = {}, right = {}",
                    left, right
                )));
            }
        }
        Ok(())
    }
    /// Pinned value at `position`, `None` for periodic boundaries.
    pub fn fixed_value(&self, position: BoundaryPosition) -> Option<f64> {
        match (self, position) {
            (BoundaryPolicy::Periodic, _) => None,
            (BoundaryPolicy::Fixed { left, .. }, BoundaryPosition::Left) => Some(*left),
            (BoundaryPolicy::Fixed { right, .. }, BoundaryPosition::Right) => Some(*right),
        }
    }
}
