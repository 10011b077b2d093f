use thiserror::Error;

/// A result type for kernel and covariance computations
pub type Result<T> = std::result::Result<T, KernelError>;

/// An error when building kernels or covariance structures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// When a kernel scale parameter is not valid
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// When points of the two sets do not live in the same space
    #[error("Dimension mismatch: points of dimension {left} compared to points of dimension {right}")]
    DimensionMismatch {
        /// dimension of the first set points
        left: usize,
        /// dimension of the second set points
        right: usize,
    },
    /// When fast (element-wise) covariance is asked for sets of different sizes
    #[error("Length mismatch: {left} points paired with {right} points")]
    LengthMismatch {
        /// size of the first set
        left: usize,
        /// size of the second set
        right: usize,
    },
}
