use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;

use crate::error::SolverError;

pub mod param_parser;
pub mod write_to_csv;
pub mod write_to_vtu;

/// One stamp per process so every frame of a run lands in the same directory.
static RUN_STAMP: Lazy<String> = Lazy::new(|| {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("run_{}", timestamp)
});

/// Creates `<base>/<run stamp>` if needed and returns it.
pub fn create_output_dir(base: &Path) -> Result<PathBuf, SolverError> {
    let dir = base.join(&*RUN_STAMP);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
