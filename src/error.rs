use thiserror::Error;

/// Error types for the stepkmeans library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// The number of clusters k is invalid (must be in 1..=dataset size)
    #[error("Invalid k value: {0}")]
    InvalidK(String),

    /// Not enough data points, e.g. an empty initial point list
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Dimension mismatch between a point and the dataset or centroid
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// A point carries a non-finite coordinate
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// Access beyond the current size of a point set
    #[error("Index {index} out of range for point set of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// A membership index that does not refer to a dataset point
    #[error("Invalid member index: {0}")]
    InvalidIndex(String),

    /// Seed indices are duplicated, out of range or empty
    #[error("Invalid seeds: {0}")]
    InvalidSeeds(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,
}
