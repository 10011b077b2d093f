use thiserror::Error;

/// A result type for acquisition computations
pub type Result<T> = std::result::Result<T, AcquisitionError>;

/// An error for acquisition functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcquisitionError {
    /// When an acquisition parameter is not valid
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// When the posterior prediction of the surrogate fails
    #[error("Prediction error: {0}")]
    PredictionError(String),
    /// When means and variances are not aligned
    #[error("Length mismatch: {mean} mean values for {variance} variance values")]
    LengthMismatch {
        /// number of mean values
        mean: usize,
        /// number of variance values
        variance: usize,
    },
}
