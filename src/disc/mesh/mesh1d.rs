use ndarray::{Array1, ArrayView1};

use super::GridOrigin;
use crate::error::SolverError;

/// Uniform 1D grid of `node_num` points with spacing `length / node_num`.
/// The right end is excluded, so the last node sits at `right_coord() - dx`.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub node_num: usize,
    pub length: f64,
    pub dx: f64,
    pub left_coord: f64,
    x: Array1<f64>,
}
impl Mesh1d {
    pub fn new(node_num: usize, length: f64, origin: GridOrigin) -> Result<Self, SolverError> {
        if node_num < 3 {
            return Err(SolverError::invalid_configuration(format!(
                "node_num must be at least 3, got {}",
                node_num
            )));
        }
        if !(length.is_finite() && length > 0.0) {
            return Err(SolverError::invalid_configuration(format!(
                "domain_length must be positive, got {}",
                length
            )));
        }
        let dx = length / node_num as f64;
        let left_coord = origin.left_coord(length);
        let x = Array1::from_shape_fn(node_num, |i| left_coord + i as f64 * dx);
        Ok(Self {
            node_num,
            length,
            dx,
            left_coord,
            x,
        })
    }
    pub fn right_coord(&self) -> f64 {
        self.left_coord + self.length
    }
    pub fn coords(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }
}
