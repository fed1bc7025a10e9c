use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    /// Rejected at construction: too few grid points, or a non-positive length/step/duration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Raised by the driver's stability monitor, never by the solver itself.
    #[error("Numerical instability detected at step {step} (t = {time})")]
    NumericalInstability { step: usize, time: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("VTU output error: {0}")]
    Vtk(String),
}

impl SolverError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
