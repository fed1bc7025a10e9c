pub mod flux;
pub mod stability_detector;
use super::{boundary::scalar1d::BoundaryPolicy, mesh::mesh1d::Mesh1d};
use flux::lax_friedrichs;
use ndarray::{ArrayView1, ArrayViewMut1, Zip, s};

/// Lax-Friedrichs discretization of u_t + (u²/2)_x = 0 on a uniform grid.
#[derive(Clone, Debug)]
pub struct Disc1dBurgers {
    pub mesh: Mesh1d,
    pub boundary: BoundaryPolicy,
    pub time_step: f64,
}
impl Disc1dBurgers {
    pub fn new(mesh: Mesh1d, boundary: BoundaryPolicy, time_step: f64) -> Disc1dBurgers {
        Disc1dBurgers {
            mesh,
            boundary,
            time_step,
        }
    }
    pub fn initialize_solution(
        &self,
        mut solutions: ArrayViewMut1<f64>,
        init_func: &dyn Fn(f64) -> f64,
    ) {
        Zip::from(&mut solutions)
            .and(self.mesh.coords())
            .for_each(|u, &x| *u = init_func(x));
    }
    /// Writes one Lax-Friedrichs step of `solutions` into `new_solutions`.
    /// The two views must not alias: every node reads pre-step neighbours.
    pub fn advance(&self, solutions: ArrayView1<f64>, mut new_solutions: ArrayViewMut1<f64>) {
        let n = self.mesh.node_num;
        let ratio = self.time_step / self.mesh.dx;
        Zip::from(new_solutions.slice_mut(s![1..n - 1]))
            .and(solutions.windows(3))
            .for_each(|u_new, stencil| *u_new = lax_friedrichs(stencil[0], stencil[2], ratio));
        match self.boundary {
            BoundaryPolicy::Periodic => {
                new_solutions[0] = lax_friedrichs(solutions[n - 1], solutions[1], ratio);
                // single degree of freedom at the seam
                new_solutions[n - 1] = new_solutions[0];
            }
            BoundaryPolicy::Fixed { left, right } => {
                new_solutions[0] = left;
                new_solutions[n - 1] = right;
            }
        }
    }
}
