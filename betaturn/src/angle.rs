//! Angular distance between dihedral angles.
//!
//! The per-angle distance `d(a, b) = 2(1 - cos(a - b))` is the squared chord
//! length between the two angles on the unit circle. It is symmetric, zero
//! for equal angles, 4 for opposite angles and has no wrap-around jump at
//! ±180°.

use betaturn_core::{BetaTurnError, Result};

/// Number of dihedral angles describing a turn.
pub const TURN_ANGLES: usize = 7;

/// Labels of the seven turn angles, in order.
pub const ANGLE_NAMES: [&str; TURN_ANGLES] =
    ["omega2", "phi2", "psi2", "omega3", "phi3", "psi3", "omega4"];

/// Distance between two angles given in degrees, in [0, 4].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    2.0 * (1.0 - (a - b).to_radians().cos())
}

/// Mean of the per-angle distances between two angle tuples.
pub fn mean_distance(a: &[f64; TURN_ANGLES], b: &[f64; TURN_ANGLES]) -> f64 {
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| angular_distance(*x, *y))
        .sum();
    sum / TURN_ANGLES as f64
}

/// Convert a distance back to the single angular deviation it represents.
///
/// This is the inverse of [`angular_distance`] for one angle:
/// `theta = acos(1 - d/2)` in degrees.
///
/// # Errors
///
/// Returns [`BetaTurnError::InvalidInput`] if `d` is outside [0, 4] (or NaN),
/// which can only happen if a distance was computed incorrectly upstream.
pub fn deviation_degrees(d: f64) -> Result<f64> {
    if !(0.0..=4.0).contains(&d) {
        return Err(BetaTurnError::InvalidInput(format!(
            "angular distance {} is outside [0, 4]",
            d
        )));
    }
    Ok((1.0 - d / 2.0).acos().to_degrees())
}
