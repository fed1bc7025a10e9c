pub mod scalar1d;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPosition {
    Left,
    Right,
}
