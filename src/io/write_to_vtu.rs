use std::path::Path;

use ndarray::ArrayView1;
use vtkio::{
    Vtk,
    model::{
        Attribute, Attributes, ByteOrder, CellType, Cells, DataArray, DataSet, ElementType,
        IOBuffer, UnstructuredGridPiece, Version, VertexNumbers,
    },
};

use crate::{disc::mesh::mesh1d::Mesh1d, error::SolverError};

/// Writes the field as a polyline along the x axis, one `Line` cell per grid interval.
pub fn write_frame(
    solutions: ArrayView1<f64>,
    mesh: &Mesh1d,
    time: f64,
    filename: &Path,
) -> Result<(), SolverError> {
    let node_num = mesh.node_num;
    let mut vtk_points = Vec::with_capacity(node_num * 3);
    for &x in mesh.coords().iter() {
        vtk_points.push(x);
        vtk_points.push(0.0);
        vtk_points.push(0.0);
    }
    let cell_num = node_num - 1;
    let mut connectivity = Vec::with_capacity(cell_num * 2);
    for inode in 0..cell_num {
        connectivity.push(inode as u64);
        connectivity.push((inode + 1) as u64);
    }

    let vtk_file = Vtk {
        version: Version::XML { major: 1, minor: 0 },
        title: format!("Burgers solution at t = {}", time),
        byte_order: ByteOrder::native(),
        data: DataSet::inline(UnstructuredGridPiece {
            points: IOBuffer::F64(vtk_points),
            cells: Cells {
                cell_verts: VertexNumbers::XML {
                    connectivity,
                    offsets: (0..cell_num).map(|i| ((i + 1) * 2) as u64).collect(),
                },
                types: vec![CellType::Line; cell_num],
            },
            data: Attributes {
                point: vec![Attribute::DataArray(DataArray {
                    name: "solution".to_string(),
                    elem: ElementType::Scalars {
                        num_comp: 1,
                        lookup_table: None,
                    },
                    data: IOBuffer::F64(solutions.to_vec()),
                })],
                cell: vec![],
            },
        }),
        file_path: None,
    };

    vtk_file
        .export(filename)
        .map_err(|e| SolverError::Vtk(format!("{:?}", e)))
}
