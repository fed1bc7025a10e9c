mod disc;
mod driver;
mod error;
mod initialization;
mod io;
mod solver;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let param_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "inputs/solverparam.json".to_string());
    info!(param_file = %param_file, "loading parameters");

    let result = initialization::initialize_params_by_file(&param_file)
        .and_then(|run_params| driver::run(&run_params));
    match result {
        Ok(summary) => {
            info!(
                steps = summary.steps,
                final_time = summary.final_time,
                frames = summary.frames_written,
                unstable = summary.unstable,
                output_dir = %summary.output_dir.display(),
                "done"
            );
            if let Some(d) = summary.final_diagnostics {
                info!(min = d.min, max = d.max, mass = d.mass, "final field");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
