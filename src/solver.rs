use crate::{
    disc::{
        boundary::scalar1d::BoundaryPolicy, burgers1d::Disc1dBurgers, mesh::mesh1d::Mesh1d,
    },
    error::SolverError,
};
use ndarray::{Array1, ArrayView1};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    pub node_num: usize,
    pub domain_length: f64,
    pub time_step: f64,
    pub final_time: f64,
    pub boundary: BoundaryPolicy,
}

/// Explicit integrator for the inviscid Burgers' equation.
///
/// Owns the grid and the field. The field is double buffered: `step` writes
/// the update into `new_solutions` and swaps, so the stencil always reads
/// pre-step values. The CFL bound `dt * max|u| / dx <= 1` is the caller's
/// responsibility; violating it lets the field grow without bound.
pub struct ConservationLawSolver {
    pub disc: Disc1dBurgers,
    solutions: Array1<f64>,
    new_solutions: Array1<f64>,
    final_step: usize,
    current_step: usize,
}
impl ConservationLawSolver {
    pub fn new(
        solver_params: &SolverParameters,
        init_func: &dyn Fn(f64) -> f64,
    ) -> Result<Self, SolverError> {
        let time_step = solver_params.time_step;
        let final_time = solver_params.final_time;
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(SolverError::invalid_configuration(format!(
                "time_step must be positive, got {}",
                time_step
            )));
        }
        if !(final_time.is_finite() && final_time > 0.0) {
            return Err(SolverError::invalid_configuration(format!(
                "final_time must be positive, got {}",
                final_time
            )));
        }
        solver_params.boundary.validate()?;
        let mesh = Mesh1d::new(
            solver_params.node_num,
            solver_params.domain_length,
            solver_params.boundary.grid_origin(),
        )?;
        let final_step = (final_time / time_step).floor() as usize;
        let disc = Disc1dBurgers::new(mesh, solver_params.boundary, time_step);
        let mut solutions = Array1::zeros(solver_params.node_num);
        disc.initialize_solution(solutions.view_mut(), init_func);
        let new_solutions = solutions.clone();
        debug!(
            node_num = solver_params.node_num,
            dx = disc.mesh.dx,
            time_step,
            final_step,
            boundary = ?solver_params.boundary,
            "constructed solver"
        );
        Ok(Self {
            disc,
            solutions,
            new_solutions,
            final_step,
            current_step: 0,
        })
    }
    /// Advances the field by one time step. Stepping past `step_count()` is allowed.
    pub fn step(&mut self) {
        self.disc
            .advance(self.solutions.view(), self.new_solutions.view_mut());
        std::mem::swap(&mut self.solutions, &mut self.new_solutions);
        self.current_step += 1;
    }
    /// Runs exactly `step_count()` steps and returns the final field.
    pub fn solve(&mut self) -> ArrayView1<'_, f64> {
        for _ in 0..self.final_step {
            self.step();
        }
        self.current_solution()
    }
    pub fn current_solution(&self) -> ArrayView1<'_, f64> {
        self.solutions.view()
    }
    pub fn grid_points(&self) -> ArrayView1<'_, f64> {
        self.disc.mesh.coords()
    }
    pub fn time_step(&self) -> f64 {
        self.disc.time_step
    }
    /// floor(final_time / time_step), fixed at construction.
    pub fn step_count(&self) -> usize {
        self.final_step
    }
    pub fn current_step(&self) -> usize {
        self.current_step
    }
    pub fn current_time(&self) -> f64 {
        self.current_step as f64 * self.disc.time_step
    }
}
