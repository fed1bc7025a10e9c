use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    disc::boundary::scalar1d::BoundaryPolicy, error::SolverError,
    initialization::InitialCondition,
};

#[derive(Deserialize, Debug)]
pub struct SolverParamParser {
    pub node_num: usize,
    pub domain_length: f64,
    pub time_step: f64,
    pub final_time: f64,
    pub boundary: BoundaryPolicy,
    pub initial_condition: InitialCondition,
    #[serde(default)]
    pub output: OutputParamParser,
    #[serde(default)]
    pub monitor: MonitorParamParser,
}
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct OutputParamParser {
    pub directory: String,
    pub name: String,
    pub frame_interval: usize,
    pub write_csv: bool,
    pub write_vtu: bool,
}
impl Default for OutputParamParser {
    fn default() -> Self {
        Self {
            directory: "outputs".to_string(),
            name: "burgers_inviscid".to_string(),
            frame_interval: 10,
            write_csv: true,
            write_vtu: false,
        }
    }
}
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct MonitorParamParser {
    pub cfl_limit: f64,
    pub halt_on_instability: bool,
}
impl Default for MonitorParamParser {
    fn default() -> Self {
        Self {
            cfl_limit: 1.0,
            halt_on_instability: false,
        }
    }
}
impl SolverParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> Result<Self, SolverError> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> Result<Self, SolverError> {
        let param: SolverParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}
