pub mod boundary;
pub mod burgers1d;
pub mod mesh;
