pub mod mesh1d;

/// Where the left end of the domain sits relative to the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridOrigin {
    /// `[0, L)`
    Zero,
    /// `[-L/2, L/2)`
    Centered,
}
impl GridOrigin {
    pub fn left_coord(&self, length: f64) -> f64 {
        match self {
            GridOrigin::Zero => 0.0,
            GridOrigin::Centered => -0.5 * length,
        }
    }
}
