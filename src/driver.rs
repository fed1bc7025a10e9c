use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    disc::burgers1d::stability_detector::FieldDiagnostics,
    error::SolverError,
    initialization::{InitialCondition, initialize_solver},
    io::{
        create_output_dir,
        write_to_csv::{self, FrameRecord},
        write_to_vtu,
    },
    solver::{ConservationLawSolver, SolverParameters},
};

#[derive(Clone, Debug, PartialEq)]
pub struct OutputParameters {
    pub directory: PathBuf,
    pub name: String,
    pub frame_interval: usize,
    pub write_csv: bool,
    pub write_vtu: bool,
}
#[derive(Clone, Debug, PartialEq)]
pub struct MonitorParameters {
    pub cfl_limit: f64,
    pub halt_on_instability: bool,
}
#[derive(Clone, Debug, PartialEq)]
pub struct RunParameters {
    pub solver_params: SolverParameters,
    pub initial_condition: InitialCondition,
    pub output_params: OutputParameters,
    pub monitor_params: MonitorParameters,
}
impl RunParameters {
    /// Checks the driver-side settings; the solver validates its own parameters.
    pub fn validate(&self) -> Result<(), SolverError> {
        self.initial_condition.validate()?;
        if self.output_params.frame_interval == 0 {
            return Err(SolverError::invalid_configuration(
                "output.frame_interval must be at least 1",
            ));
        }
        let cfl_limit = self.monitor_params.cfl_limit;
        if !(cfl_limit.is_finite() && cfl_limit > 0.0) {
            return Err(SolverError::invalid_configuration(format!(
                "monitor.cfl_limit must be positive, got {}",
                cfl_limit
            )));
        }
        Ok(())
    }
}
#[derive(Debug)]
pub struct RunSummary {
    pub steps: usize,
    pub final_time: f64,
    pub frames_written: usize,
    pub output_dir: PathBuf,
    pub final_diagnostics: Option<FieldDiagnostics>,
    pub unstable: bool,
}

/// Frame writer driving a solver for `step_count()` steps.
struct FrameRecorder<'a> {
    output_params: &'a OutputParameters,
    output_dir: PathBuf,
    records: Vec<FrameRecord>,
}
impl FrameRecorder<'_> {
    fn record(
        &mut self,
        solver: &ConservationLawSolver,
        diagnostics: Option<&FieldDiagnostics>,
    ) -> Result<(), SolverError> {
        let frame = self.records.len();
        let step = solver.current_step();
        let time = solver.current_time();
        if self.output_params.write_csv {
            let filename = self
                .output_dir
                .join(format!("{}_{}.csv", self.output_params.name, step));
            write_to_csv::write_frame(solver.current_solution(), &solver.disc.mesh, &filename)?;
        }
        if self.output_params.write_vtu {
            let filename = self
                .output_dir
                .join(format!("{}_{}.vtu", self.output_params.name, step));
            write_to_vtu::write_frame(solver.current_solution(), &solver.disc.mesh, time, &filename)?;
        }
        debug!(frame, step, time, "wrote frame");
        self.records
            .push(FrameRecord::new(frame, step, time, diagnostics));
        Ok(())
    }
}

pub fn run(run_params: &RunParameters) -> Result<RunSummary, SolverError> {
    run_params.validate()?;
    let mut solver = initialize_solver(&run_params.solver_params, &run_params.initial_condition)?;
    let output_params = &run_params.output_params;
    let monitor_params = &run_params.monitor_params;
    let output_dir = create_output_dir(&output_params.directory)?;
    info!(
        node_num = solver.disc.mesh.node_num,
        dx = solver.disc.mesh.dx,
        left = solver.disc.mesh.left_coord,
        right = solver.disc.mesh.right_coord(),
        time_step = solver.time_step(),
        step_count = solver.step_count(),
        output_dir = %output_dir.display(),
        "starting run"
    );

    let reference = solver
        .disc
        .compute_diagnostics(solver.current_solution())
        .ok_or_else(|| {
            SolverError::invalid_configuration("initial condition produced non-finite values")
        })?;
    if reference.cfl_number > monitor_params.cfl_limit {
        warn!(
            cfl_number = reference.cfl_number,
            cfl_limit = monitor_params.cfl_limit,
            "initial CFL number exceeds the stability limit, expect the field to blow up"
        );
    }

    let mut recorder = FrameRecorder {
        output_params,
        output_dir: output_dir.clone(),
        records: Vec::new(),
    };
    recorder.record(&solver, Some(&reference))?;

    let final_step = solver.step_count();
    let mut unstable = false;
    let mut diagnostics = Some(reference);
    while solver.current_step() < final_step {
        solver.step();
        let step = solver.current_step();
        if step % output_params.frame_interval == 0 || step == final_step {
            diagnostics = solver.disc.compute_diagnostics(solver.current_solution());
            recorder.record(&solver, diagnostics.as_ref())?;
            if let Some(d) = &diagnostics {
                info!(
                    step,
                    time = solver.current_time(),
                    min = d.min,
                    max = d.max,
                    mass = d.mass,
                    cfl_number = d.cfl_number,
                    "frame"
                );
            }
        }
        if !unstable && solver.disc.detect_instability(&reference, solver.current_solution()) {
            unstable = true;
            warn!(
                step,
                time = solver.current_time(),
                "field left the admissible range, the time step violates the CFL bound"
            );
            if monitor_params.halt_on_instability {
                write_to_csv::write_history(
                    &recorder.records,
                    &output_dir.join(format!("{}_history.csv", output_params.name)),
                )?;
                return Err(SolverError::NumericalInstability {
                    step,
                    time: solver.current_time(),
                });
            }
        }
    }

    write_to_csv::write_history(
        &recorder.records,
        &output_dir.join(format!("{}_history.csv", output_params.name)),
    )?;
    Ok(RunSummary {
        steps: solver.current_step(),
        final_time: solver.current_time(),
        frames_written: recorder.records.len(),
        output_dir,
        final_diagnostics: diagnostics,
        unstable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::boundary::scalar1d::BoundaryPolicy;
    use approx::assert_relative_eq;
    use std::fs;

    fn run_params(name: &str, time_step: f64, halt_on_instability: bool) -> RunParameters {
        RunParameters {
            solver_params: SolverParameters {
                node_num: 100,
                domain_length: 2.0 * std::f64::consts::PI,
                time_step,
                final_time: 40.0 * time_step,
                boundary: BoundaryPolicy::Periodic,
            },
            initial_condition: InitialCondition::SineWave {
                amplitude: 1.0,
                wavenumber: 1.0,
            },
            output_params: OutputParameters {
                directory: std::env::temp_dir()
                    .join(format!("burgers_driver_{}_{}", name, std::process::id())),
                name: name.to_string(),
                frame_interval: 15,
                write_csv: true,
                write_vtu: true,
            },
            monitor_params: MonitorParameters {
                cfl_limit: 1.0,
                halt_on_instability,
            },
        }
    }

    #[test]
    fn test_run_writes_frames() {
        let params = run_params("stable", 0.01, true);
        let summary = run(&params).unwrap();
        let steps = summary.steps;
        let solver = ConservationLawSolver::new(&params.solver_params, &|x| x.sin()).unwrap();
        assert_eq!(steps, solver.step_count());
        assert_relative_eq!(summary.final_time, steps as f64 * 0.01);
        assert!(!summary.unstable);
        // the initial frame, every 15th step, and the last step
        let expected_frames = 1 + steps / 15 + usize::from(steps % 15 != 0);
        assert_eq!(summary.frames_written, expected_frames);
        assert!(summary.output_dir.join("stable_0.csv").exists());
        assert!(summary.output_dir.join("stable_0.vtu").exists());
        assert!(summary.output_dir.join(format!("stable_{}.csv", steps)).exists());
        let history = fs::read_to_string(summary.output_dir.join("stable_history.csv")).unwrap();
        assert_eq!(history.lines().count(), expected_frames + 1);
        fs::remove_dir_all(&params.output_params.directory).unwrap();
    }

    #[test]
    fn test_run_rejects_invalid_driver_settings() {
        let mut params = run_params("zero_interval", 0.01, false);
        params.output_params.frame_interval = 0;
        assert!(matches!(
            run(&params),
            Err(SolverError::InvalidConfiguration(_))
        ));
        // rejected before any output directory is created
        assert!(!params.output_params.directory.exists());

        let mut params = run_params("bad_cfl_limit", 0.01, false);
        params.monitor_params.cfl_limit = 0.0;
        assert!(matches!(
            run(&params),
            Err(SolverError::InvalidConfiguration(_))
        ));

        let mut params = run_params("bad_ramp", 0.01, false);
        params.initial_condition = InitialCondition::Ramp { slope: -1.0 };
        assert!(run(&params).is_err());
        assert!(!params.output_params.directory.exists());
    }

    #[test]
    fn test_run_halts_on_instability() {
        let params = run_params("unstable", 0.5, true);
        let result = run(&params);
        assert!(matches!(
            result,
            Err(SolverError::NumericalInstability { .. })
        ));
        fs::remove_dir_all(&params.output_params.directory).unwrap();
    }
}
