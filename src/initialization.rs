use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    driver::{MonitorParameters, OutputParameters, RunParameters},
    error::SolverError,
    io::param_parser::SolverParamParser,
    solver::{ConservationLawSolver, SolverParameters},
};

fn one() -> f64 {
    1.0
}

/// Initial velocity profiles.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InitialCondition {
    /// u0(x) = amplitude * sin(wavenumber * x)
    SineWave {
        #[serde(default = "one")]
        amplitude: f64,
        #[serde(default = "one")]
        wavenumber: f64,
    },
    /// 0 left of the origin, slope * x up to x = 1 / slope, 1 beyond.
    Ramp { slope: f64 },
}
impl InitialCondition {
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            InitialCondition::SineWave {
                amplitude,
                wavenumber,
            } => amplitude * (wavenumber * x).sin(),
            InitialCondition::Ramp { slope } => {
                if x < 0.0 {
                    0.0
                } else if x < 1.0 / slope {
                    slope * x
                } else {
                    1.0
                }
            }
        }
    }
    pub fn validate(&self) -> Result<(), SolverError> {
        match *self {
            InitialCondition::SineWave {
                amplitude,
                wavenumber,
            } if !(amplitude.is_finite() && wavenumber.is_finite()) => Err(
                SolverError::invalid_configuration("sine_wave parameters must be finite"),
            ),
            InitialCondition::Ramp { slope } if !(slope.is_finite() && slope > 0.0) => {
                Err(SolverError::invalid_configuration(format!(
                    "ramp slope must be positive, got {}",
                    slope
                )))
            }
            _ => Ok(()),
        }
    }
}

pub fn initialize_params_by_file(file_path: impl AsRef<Path>) -> Result<RunParameters, SolverError> {
    let param = SolverParamParser::parse(file_path)?;
    initialize_params(param)
}
pub fn initialize_params(param: SolverParamParser) -> Result<RunParameters, SolverError> {
    let solver_params = SolverParameters {
        node_num: param.node_num,
        domain_length: param.domain_length,
        time_step: param.time_step,
        final_time: param.final_time,
        boundary: param.boundary,
    };
    let output_params = OutputParameters {
        directory: PathBuf::from(param.output.directory),
        name: param.output.name,
        frame_interval: param.output.frame_interval,
        write_csv: param.output.write_csv,
        write_vtu: param.output.write_vtu,
    };
    let monitor_params = MonitorParameters {
        cfl_limit: param.monitor.cfl_limit,
        halt_on_instability: param.monitor.halt_on_instability,
    };
    let run_params = RunParameters {
        solver_params,
        initial_condition: param.initial_condition,
        output_params,
        monitor_params,
    };
    run_params.validate()?;
    Ok(run_params)
}
pub fn initialize_solver(
    solver_params: &SolverParameters,
    initial_condition: &InitialCondition,
) -> Result<ConservationLawSolver, SolverError> {
    ConservationLawSolver::new(solver_params, &|x| initial_condition.evaluate(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::boundary::scalar1d::BoundaryPolicy;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_sine_wave() {
        let ic = InitialCondition::SineWave {
            amplitude: 2.0,
            wavenumber: 0.5,
        };
        assert_relative_eq!(ic.evaluate(PI), 2.0);
        assert_relative_eq!(ic.evaluate(0.0), 0.0);
    }

    #[test]
    fn test_ramp() {
        let ic = InitialCondition::Ramp { slope: 4.0 };
        assert_eq!(ic.evaluate(-0.1), 0.0);
        assert_eq!(ic.evaluate(0.0), 0.0);
        assert_relative_eq!(ic.evaluate(0.125), 0.5);
        assert_eq!(ic.evaluate(0.25), 1.0);
        assert_eq!(ic.evaluate(3.0), 1.0);
        assert!(InitialCondition::Ramp { slope: 0.0 }.validate().is_err());
    }

    #[test]
    fn test_initialize_params() {
        let param = SolverParamParser::parse_str(
            r#"{
                "node_num": 50,
                "domain_length": 2.0,
                "time_step": 0.01,
                "final_time": 0.2,
                "boundary": { "type": "fixed", "left": 0.0, "right": 1.0 },
                "initial_condition": { "type": "ramp", "slope": 2.0 },
                "output": { "frame_interval": 0 }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            initialize_params(param),
            Err(SolverError::InvalidConfiguration(_))
        ));

        let param = SolverParamParser::parse_str(
            r#"{
                "node_num": 50,
                "domain_length": 2.0,
                "time_step": 0.01,
                "final_time": 0.2,
                "boundary": { "type": "fixed", "left": 0.0, "right": 1.0 },
                "initial_condition": { "type": "ramp", "slope": 2.0 }
            }"#,
        )
        .unwrap();
        let run_params = initialize_params(param).unwrap();
        assert_eq!(run_params.solver_params.node_num, 50);
        assert_eq!(
            run_params.solver_params.boundary,
            BoundaryPolicy::Fixed {
                left: 0.0,
                right: 1.0
            }
        );
        let solver =
            initialize_solver(&run_params.solver_params, &run_params.initial_condition).unwrap();
        assert_eq!(solver.current_solution()[0], 0.0);
        assert_eq!(solver.current_solution()[49], 1.0);
    }
}
