//! # SO(3) exponential and logarithmic maps
//!
//! The Lie algebra **so(3)** is the space of 3×3 skew-symmetric matrices, isomorphic to R³
//! through the [`hat`] operator. A vector `v ∈ R³` is an axis-angle rotation: the direction
//! is the rotation axis and the magnitude is the angle in radians.
//!
//! - [`exp_map`]: axis-angle vector → rotation matrix.
//! - [`log_map`]: rotation matrix → axis-angle vector on the principal branch, angle in `[0, π]`.
//!
//! The two maps are mutual inverses up to numerical tolerance, except at an angle of exactly
//! π where `v` and `-v` describe the same rotation. See [`log_map`] for the sign convention.

use crate::{AxisAngle, RotationMatrix};
use glam::DVec3;

/// Angles below this value are treated as zero by the exponential and logarithmic maps.
pub const SMALL_ANGLE_EPSILON: f64 = 1.0e-12;

/// Distance to π under which the logarithmic map extracts the axis from the symmetric part.
pub const NEAR_PI_EPSILON: f64 = 1.0e-6;

// antisymmetric part magnitude that counts as carrying a definite axis sign
const AXIS_SIGN_EPSILON: f64 = 1.0e-12;

/// Vector space -> Lie algebra.
///
/// Builds the skew-symmetric cross-product matrix of `v`, such that `hat(v) * p == v.cross(p)`.
pub fn hat(v: AxisAngle) -> RotationMatrix {
    RotationMatrix::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// Lie algebra -> vector space.
///
/// Reads the three independent entries of a skew-symmetric matrix. Only the lower
/// triangle is read, so the result of a non skew-symmetric input is not averaged.
pub fn vee(omega: RotationMatrix) -> AxisAngle {
    AxisAngle::new(omega.y_axis.z, omega.z_axis.x, omega.x_axis.y)
}

/// Compute the rotation matrix of an axis-angle vector.
///
/// # Arguments
///
/// * `aaxis` - The axis-angle vector. Its norm is the rotation angle in radians.
/// * `num_terms` - `0` selects the closed form (Rodrigues formula). Any other value
///   evaluates the power series of the matrix exponential truncated after `num_terms` terms.
///
/// # Returns
///
/// The rotation matrix `C = exp(hat(aaxis))`.
///
/// Example:
///
/// ```
/// use glam::DVec3;
/// use so3_rotation::ops::exp_map;
///
/// let c = exp_map(DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2), 0);
/// let p = c * DVec3::X;
/// assert!((p - DVec3::Y).length() < 1e-12);
/// ```
pub fn exp_map(aaxis: AxisAngle, num_terms: u32) -> RotationMatrix {
    if num_terms == 0 {
        exp_map_closed_form(aaxis)
    } else {
        exp_map_series(aaxis, num_terms)
    }
}

/// Closed form of the exponential map: `I + sin(θ) K + (1 - cos(θ)) K²`.
///
/// `K` is the cross-product matrix of the unit axis. Returns exactly the identity
/// for angles below [`SMALL_ANGLE_EPSILON`].
pub fn exp_map_closed_form(aaxis: AxisAngle) -> RotationMatrix {
    let theta = aaxis.length();
    if theta < SMALL_ANGLE_EPSILON {
        return RotationMatrix::IDENTITY;
    }

    let k = hat(aaxis / theta);
    let (sin_theta, cos_theta) = theta.sin_cos();

    RotationMatrix::IDENTITY + k * sin_theta + (k * k) * (1.0 - cos_theta)
}

/// Power series of the exponential map truncated after `num_terms` terms:
/// `I + Σ_{n=1}^{num_terms} hat(aaxis)ⁿ / n!`.
///
/// The result drifts off SO(3) for a small number of terms or large angles.
pub fn exp_map_series(aaxis: AxisAngle, num_terms: u32) -> RotationMatrix {
    let x = hat(aaxis);

    let mut c = RotationMatrix::IDENTITY;
    let mut term = RotationMatrix::IDENTITY;
    for n in 1..=num_terms {
        // hat(a)^n / n! from the previous term
        term = (term * x) * (1.0 / n as f64);
        c += term;
    }
    c
}

/// Branch of the logarithmic map selected by the rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogBranch {
    /// The angle rounds to zero.
    Identity,
    /// The angle is within [`NEAR_PI_EPSILON`] of π, `sin(θ)` is unusable as a divisor.
    NearPi,
    /// Everything else.
    Generic,
}

impl LogBranch {
    fn classify(theta: f64) -> Self {
        if theta < SMALL_ANGLE_EPSILON {
            LogBranch::Identity
        } else if std::f64::consts::PI - theta < NEAR_PI_EPSILON {
            LogBranch::NearPi
        } else {
            LogBranch::Generic
        }
    }
}

/// Compute the axis-angle vector of a rotation matrix.
///
/// The angle is recovered from the trace, `cos(θ) = (tr(C) - 1) / 2`, clamped to `[-1, 1]`.
/// The axis is then extracted depending on the angle:
///
/// * `θ ≈ 0`: returns the zero vector, the axis is undefined.
/// * `θ ≈ π`: the axis comes from the symmetric part, `k kᵗ = (sym(C) - cos(θ) I) / (1 - cos(θ))`.
///   The axis sign is chosen so that its largest-magnitude component is positive, unless the
///   antisymmetric part of `C` still points to the opposite direction, in which case it is
///   flipped. At exactly π both signs give the same rotation. If the symmetric part carries
///   no axis at all, as for the improper matrix `-I`, the x axis is used.
/// * otherwise: `θ / (2 sin(θ)) · vee(C - Cᵗ)`.
///
/// The input is assumed to be close to orthonormal. No repair is attempted here, but the
/// result is finite for any finite input.
pub fn log_map(c: &RotationMatrix) -> AxisAngle {
    let trace = c.x_axis.x + c.y_axis.y + c.z_axis.z;
    let cos_theta = (0.5 * (trace - 1.0)).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();

    match LogBranch::classify(theta) {
        LogBranch::Identity => AxisAngle::ZERO,
        LogBranch::NearPi => {
            log::trace!("log_map: near-pi branch, theta = {theta}");
            theta * near_pi_axis(c, cos_theta)
        }
        LogBranch::Generic => (0.5 * theta / theta.sin()) * antisym(c),
    }
}

// 2 sin(θ) k
fn antisym(c: &RotationMatrix) -> DVec3 {
    vee(*c - c.transpose())
}

fn near_pi_axis(c: &RotationMatrix, cos_theta: f64) -> DVec3 {
    // (1 - cos) k kᵗ
    let sym = (*c + c.transpose()) * 0.5;
    let kkt = sym - RotationMatrix::IDENTITY * cos_theta;
    let diag = [kkt.x_axis.x, kkt.y_axis.y, kkt.z_axis.z];

    let i = (1..3).fold(0, |best, j| if diag[j] > diag[best] { j } else { best });

    // the column with the largest diagonal has a positive, largest-magnitude component
    let axis = if diag[i] > 0.0 {
        kkt.col(i).try_normalize()
    } else {
        None
    };
    let Some(axis) = axis else {
        log::trace!("log_map: no axis in the symmetric part, falling back to x");
        return DVec3::X;
    };

    if antisym(c).dot(axis) < -AXIS_SIGN_EPSILON {
        -axis
    } else {
        axis
    }
}
