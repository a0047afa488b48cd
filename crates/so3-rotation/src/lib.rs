#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # SO(3) rotations
//!
//! This crate converts between 3×3 rotation matrices and their minimal axis-angle
//! representation, and provides a [`Rotation`] value type that keeps its matrix on the SO(3)
//! manifold while it is composed many times, e.g. when integrating a pose or iterating an
//! optimizer.
//!
//! - [`ops::exp_map`]: axis-angle vector → rotation matrix.
//! - [`ops::log_map`]: rotation matrix → axis-angle vector.
//! - [`Rotation`]: rotation matrix with a conditional reprojection after every composition.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use so3_rotation::Rotation;
//!
//! // Create a rotation from axis-angle representation
//! let rotation = Rotation::from_axis_angle(DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
//!
//! // Apply the rotation to a point
//! let rotated = rotation * DVec3::X;
//! assert!((rotated - DVec3::Y).length() < 1e-12);
//!
//! // Compose and go back to the Lie algebra
//! let half_turn = rotation * rotation;
//! assert!((half_turn.vec().length() - std::f64::consts::PI).abs() < 1e-6);
//! ```

/// Scalar angle helpers and near-equality predicates.
pub mod common;

/// Error types for the rotation module.
pub mod error;

/// Exponential and logarithmic maps between so(3) and SO(3).
pub mod ops;

/// Rotation matrix type kept on the SO(3) manifold.
pub mod rotation;

pub use error::RotationError;
pub use rotation::{Rotation, DETERMINANT_TOLERANCE};

/// An axis-angle rotation vector.
///
/// The norm is the rotation angle in radians and the normalized vector is the axis. The angle
/// is a right-hand-rule angle from frame `a` to frame `b`.
pub type AxisAngle = glam::DVec3;

/// A 3×3 rotation matrix. By convention `C_ba` rotates points from frame `a` to frame `b`.
pub type RotationMatrix = glam::DMat3;

/// A 3D point.
pub type Point = glam::DVec3;
