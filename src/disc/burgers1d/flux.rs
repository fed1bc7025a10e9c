/// Physical flux of the inviscid Burgers' equation, f(u) = u²/2.
pub fn flux(u: f64) -> f64 {
    0.5 * u * u
}
/// Characteristic speed |f'(u)| = |u|.
pub fn wave_speed(u: f64) -> f64 {
    u.abs()
}
/// Lax-Friedrichs update of a node from its two neighbours, `ratio = dt / dx`.
pub fn lax_friedrichs(ul: f64, ur: f64, ratio: f64) -> f64 {
    0.5 * (ul + ur) - 0.5 * ratio * (flux(ur) - flux(ul))
}
