use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;

use super::{Disc1dBurgers, flux::wave_speed};
use crate::disc::boundary::BoundaryPosition;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDiagnostics {
    pub min: f64,
    pub max: f64,
    /// Discrete integral of the field, sum(u) * dx.
    pub mass: f64,
    pub max_wave_speed: f64,
    /// dt * max|u| / dx; the scheme is only stable while this stays at or below one.
    pub cfl_number: f64,
}

impl Disc1dBurgers {
    /// Returns `None` once the field holds a NaN or an infinity.
    pub fn compute_diagnostics(&self, solutions: ArrayView1<f64>) -> Option<FieldDiagnostics> {
        if !solutions.iter().all(|u| u.is_finite()) {
            return None;
        }
        let min = *solutions.min().ok()?;
        let max = *solutions.max().ok()?;
        let max_wave_speed = wave_speed(min).max(wave_speed(max));
        Some(FieldDiagnostics {
            min,
            max,
            mass: solutions.sum() * self.mesh.dx,
            max_wave_speed,
            cfl_number: self.time_step * max_wave_speed / self.mesh.dx,
        })
    }
    /// Checks `solutions` against the range of a reference field (usually the
    /// initial condition). Lax-Friedrichs is monotone inside its stability
    /// region, so any excursion past that range means the step is too large.
    pub fn detect_instability(
        &self,
        reference: &FieldDiagnostics,
        solutions: ArrayView1<f64>,
    ) -> bool {
        !self.numerical_admissibility_detection(reference, solutions)
    }
    fn numerical_admissibility_detection(
        &self,
        reference: &FieldDiagnostics,
        solutions: ArrayView1<f64>,
    ) -> bool {
        let delta0: f64 = 1e-4;
        let epsilon: f64 = 1e-4;

        let mut min_sol = reference.min;
        let mut max_sol = reference.max;
        // Pinned boundary values are admissible even when the reference field never reached them.
        for position in [BoundaryPosition::Left, BoundaryPosition::Right] {
            if let Some(value) = self.boundary.fixed_value(position) {
                min_sol = min_sol.min(value);
                max_sol = max_sol.max(value);
            }
        }
        let delta = delta0.max(epsilon * (max_sol - min_sol));
        solutions
            .iter()
            .all(|&u| u.is_finite() && u + delta >= min_sol && u - delta <= max_sol)
    }
}

#[cfg(test)]
mod tests {
    use crate::disc::{
        boundary::scalar1d::BoundaryPolicy,
        burgers1d::Disc1dBurgers,
        mesh::{GridOrigin, mesh1d::Mesh1d},
    };
    use approx::assert_relative_eq;
    use ndarray::array;

    fn disc(boundary: BoundaryPolicy) -> Disc1dBurgers {
        let mesh = Mesh1d::new(4, 2.0, GridOrigin::Zero).unwrap();
        Disc1dBurgers::new(mesh, boundary, 0.1)
    }

    #[test]
    fn test_diagnostics() {
        let disc = disc(BoundaryPolicy::Periodic);
        let diagnostics = disc.compute_diagnostics(array![0.5, -2.0, 1.0, 0.5].view()).unwrap();
        assert_relative_eq!(diagnostics.min, -2.0);
        assert_relative_eq!(diagnostics.max, 1.0);
        assert_relative_eq!(diagnostics.mass, 0.0);
        assert_relative_eq!(diagnostics.max_wave_speed, 2.0);
        // 0.1 * 2 / 0.5
        assert_relative_eq!(diagnostics.cfl_number, 0.4);
    }

    #[test]
    fn test_diagnostics_reject_non_finite() {
        let disc = disc(BoundaryPolicy::Periodic);
        assert!(disc.compute_diagnostics(array![0.0, f64::NAN, 1.0, 0.0].view()).is_none());
        assert!(disc.compute_diagnostics(array![0.0, f64::INFINITY, 1.0, 0.0].view()).is_none());
    }

    #[test]
    fn test_detect_instability() {
        let disc = disc(BoundaryPolicy::Periodic);
        let reference = disc.compute_diagnostics(array![-1.0, 0.0, 1.0, 0.0].view()).unwrap();
        assert!(!disc.detect_instability(&reference, array![-0.5, 0.2, 0.9, 0.0].view()));
        assert!(disc.detect_instability(&reference, array![-0.5, 1.5, 0.9, 0.0].view()));
        assert!(disc.detect_instability(&reference, array![-0.5, f64::NAN, 0.9, 0.0].view()));
    }

    #[test]
    fn test_fixed_values_widen_admissible_range() {
        let disc = disc(BoundaryPolicy::Fixed {
            left: 0.0,
            right: 2.0,
        });
        let reference = disc.compute_diagnostics(array![0.0, 0.5, 1.0, 1.0].view()).unwrap();
        assert!(!disc.detect_instability(&reference, array![0.0, 1.2, 1.8, 2.0].view()));
        assert!(disc.detect_instability(&reference, array![0.0, 1.2, 2.5, 2.0].view()));
    }
}
