use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

use glam::DQuat;
use rand::Rng;

use crate::error::RotationError;
use crate::ops::{exp_map, log_map};
use crate::{AxisAngle, Point, RotationMatrix};

/// Maximum deviation of the determinant from 1 tolerated before a rotation is reprojected.
pub const DETERMINANT_TOLERANCE: f64 = 1e-6;

/// A 3D rotation, stored as a rotation matrix `C_ba` from frame `a` to frame `b`.
///
/// The matrix is kept close to SO(3): every operation that produces a new matrix by
/// multiplication runs a conditional [`reproject`](Rotation::reproject) that only does work
/// when the determinant has drifted by more than [`DETERMINANT_TOLERANCE`].
///
/// `Rotation` is a plain value type. Copies are independent and assignment replaces the whole
/// matrix at once.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RotationMatrix", into = "RotationMatrix")
)]
pub struct Rotation {
    c_ba: RotationMatrix,
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        c_ba: RotationMatrix::IDENTITY,
    };

    /// Create a rotation from a matrix.
    ///
    /// The matrix is reprojected onto SO(3) if its determinant is off by more than
    /// [`DETERMINANT_TOLERANCE`]. No other validation is done.
    pub fn from_matrix(c_ba: RotationMatrix) -> Self {
        let mut rotation = Self { c_ba };
        rotation.reproject(false);
        rotation
    }

    /// Create a rotation from an axis-angle vector, `C_ba = exp(aaxis_ab)`.
    pub fn from_axis_angle(aaxis_ab: AxisAngle) -> Self {
        Self::from_axis_angle_with_terms(aaxis_ab, 0)
    }

    /// Create a rotation from an axis-angle vector using `num_terms` terms of the exponential
    /// power series. `0` uses the closed form.
    pub fn from_axis_angle_with_terms(aaxis_ab: AxisAngle, num_terms: u32) -> Self {
        Self {
            c_ba: exp_map(aaxis_ab, num_terms),
        }
    }

    /// Create a rotation from a vector of arbitrary length.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidArgument`] if the vector is not of dimension 3.
    pub fn from_slice(aaxis_ab: &[f64]) -> Result<Self, RotationError> {
        match aaxis_ab {
            [x, y, z] => Ok(Self::from_axis_angle(AxisAngle::new(*x, *y, *z))),
            _ => Err(RotationError::InvalidArgument(aaxis_ab.len())),
        }
    }

    /// Create a uniformly distributed random rotation.
    pub fn from_random() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Create a uniformly distributed random rotation from the given generator.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let r1: f64 = rng.random();
        let r2: f64 = rng.random();
        let r3: f64 = rng.random();

        // uniform random unit quaternion (Shoemake)
        let one_minus_r1_sqrt = (1.0 - r1).sqrt();
        let r1_sqrt = r1.sqrt();

        let w = one_minus_r1_sqrt * (std::f64::consts::TAU * r2).cos();
        let x = one_minus_r1_sqrt * (std::f64::consts::TAU * r2).sin();
        let y = r1_sqrt * (std::f64::consts::TAU * r3).cos();
        let z = r1_sqrt * (std::f64::consts::TAU * r3).sin();

        let q = DQuat::from_xyzw(x, y, z, w).normalize();
        Self::from_matrix(RotationMatrix::from_quat(q))
    }

    /// The underlying rotation matrix.
    #[inline]
    pub fn matrix(&self) -> &RotationMatrix {
        &self.c_ba
    }

    /// The axis-angle vector of the rotation, computed with the logarithmic map.
    #[inline]
    pub fn vec(&self) -> AxisAngle {
        log_map(&self.c_ba)
    }

    /// Determinant of the underlying matrix, 1 on SO(3).
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.c_ba.determinant()
    }

    /// The inverse rotation, i.e. the transposed matrix.
    pub fn inverse(&self) -> Self {
        let mut inverse = Self {
            c_ba: self.c_ba.transpose(),
        };
        inverse.reproject(false);
        inverse
    }

    /// Reproject the matrix back onto SO(3) through `exp(log(C))`.
    ///
    /// With `force` set to false, the reprojection only happens if the determinant deviates
    /// from 1 by more than [`DETERMINANT_TOLERANCE`], otherwise the matrix is left untouched.
    pub fn reproject(&mut self, force: bool) {
        let drift = (1.0 - self.c_ba.determinant()).abs();
        if force || drift > DETERMINANT_TOLERANCE {
            log::trace!("Reprojecting rotation, determinant drift: {drift:e}, forced: {force}");
            self.c_ba = exp_map(log_map(&self.c_ba), 0);
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<RotationMatrix> for Rotation {
    fn from(c_ba: RotationMatrix) -> Self {
        Self::from_matrix(c_ba)
    }
}

impl From<Rotation> for RotationMatrix {
    fn from(rotation: Rotation) -> Self {
        rotation.c_ba
    }
}

impl TryFrom<&[f64]> for Rotation {
    type Error = RotationError;

    fn try_from(aaxis_ab: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(aaxis_ab)
    }
}

impl MulAssign<Rotation> for Rotation {
    /// In-place right-hand side multiply, `C = C * C_rhs`.
    fn mul_assign(&mut self, rhs: Rotation) {
        self.c_ba = self.c_ba * rhs.c_ba;
        self.reproject(false);
    }
}

impl Mul<Rotation> for Rotation {
    type Output = Rotation;

    fn mul(mut self, rhs: Rotation) -> Self::Output {
        self *= rhs;
        self
    }
}

impl DivAssign<Rotation> for Rotation {
    /// In-place right-hand side multiply by the inverse, `C = C * C_rhsᵗ`.
    fn div_assign(&mut self, rhs: Rotation) {
        self.c_ba = self.c_ba * rhs.c_ba.transpose();
        self.reproject(false);
    }
}

impl Div<Rotation> for Rotation {
    type Output = Rotation;

    fn div(mut self, rhs: Rotation) -> Self::Output {
        self /= rhs;
        self
    }
}

impl Mul<Point> for Rotation {
    type Output = Point;

    /// Rotate a point from frame `a` to frame `b`, `p_b = C_ba * p_a`.
    fn mul(self, p_a: Point) -> Self::Output {
        self.c_ba * p_a
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..3 {
            let row = self.c_ba.row(i);
            writeln!(f, "{} {} {}", row.x, row.y, row.z)?;
        }
        Ok(())
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Rotation {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f64 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.c_ba.abs_diff_eq(other.c_ba, epsilon)
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Rotation {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f64 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.c_ba, &other.c_ba, epsilon, max_relative)
    }
}
