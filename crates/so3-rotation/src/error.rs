/// An error type for the rotation module.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// Error when a rotation is built from a vector that is not an axis-angle 3-vector.
    #[error("Tried to initialize a rotation from a vector of dimension {0}, expected 3")]
    InvalidArgument(usize),
}
