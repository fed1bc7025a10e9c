use std::path::Path;

use csv::Writer;
use ndarray::ArrayView1;
use serde::Serialize;

use crate::disc::{burgers1d::stability_detector::FieldDiagnostics, mesh::mesh1d::Mesh1d};

#[derive(Serialize)]
struct PointData {
    x: f64,
    solution: f64,
}

/// One row of the per-run history file. Diagnostics are empty once the field is no longer finite.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub step: usize,
    pub time: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mass: Option<f64>,
    pub cfl_number: Option<f64>,
}
impl FrameRecord {
    pub fn new(
        frame: usize,
        step: usize,
        time: f64,
        diagnostics: Option<&FieldDiagnostics>,
    ) -> Self {
        Self {
            frame,
            step,
            time,
            min: diagnostics.map(|d| d.min),
            max: diagnostics.map(|d| d.max),
            mass: diagnostics.map(|d| d.mass),
            cfl_number: diagnostics.map(|d| d.cfl_number),
        }
    }
}

pub fn write_frame(
    solutions: ArrayView1<f64>,
    mesh: &Mesh1d,
    filename: &Path,
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_path(filename)?;
    for (&x, &solution) in mesh.coords().iter().zip(solutions.iter()) {
        writer.serialize(PointData { x, solution })?;
    }
    writer.flush()?;
    Ok(())
}
pub fn write_history(records: &[FrameRecord], filename: &Path) -> Result<(), csv::Error> {
    let mut writer = Writer::from_path(filename)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
