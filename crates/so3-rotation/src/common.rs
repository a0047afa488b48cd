use crate::{AxisAngle, RotationMatrix};
use std::f64::consts::{PI, TAU};

/// Tolerance used by the near-equality helpers when the caller has no better value.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Wrap an angle in radians to the range `[-π, π)`.
pub fn angle_mod(radians: f64) -> f64 {
    radians - TAU * ((radians + PI) / TAU).floor()
}

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Check if two scalars are within `tol` of each other.
#[inline]
pub fn near_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if every element of two matrices is within `tol` of each other.
#[inline]
pub fn near_equal_matrix(a: &RotationMatrix, b: &RotationMatrix, tol: f64) -> bool {
    a.abs_diff_eq(*b, tol)
}

/// Check if two angles are within `tol` of each other, modulo 2π.
pub fn near_equal_angle(rad_a: f64, rad_b: f64, tol: f64) -> bool {
    angle_mod(rad_a - rad_b).abs() <= tol
}

/// Check if two axis-angle vectors describe the same rotation.
///
/// Two near-zero vectors are equal regardless of their axis. At an angle of π, opposite
/// axes are also equal.
pub fn near_equal_axis_angle(aaxis1: &AxisAngle, aaxis2: &AxisAngle, tol: f64) -> bool {
    let angle1 = aaxis1.length();
    let angle2 = aaxis2.length();

    if angle1 < tol && angle2 < tol {
        return true;
    }
    if angle1 < tol || angle2 < tol {
        return false;
    }

    let axis1 = *aaxis1 / angle1;
    let axis2 = *aaxis2 / angle2;

    let same_axis = axis1.abs_diff_eq(axis2, tol) && near_equal_angle(angle1, angle2, tol);
    if same_axis {
        return true;
    }

    // +axis and -axis at π
    near_equal_angle(angle1, PI, tol)
        && near_equal_angle(angle2, PI, tol)
        && axis1.abs_diff_eq(-axis2, tol)
}
