//! Errors
//!
//! Custom error types used throughout the `cartree` crate.
use thiserror::Error;

/// Errors that can occur when fitting or applying a decision tree.
#[derive(Debug, Error)]
pub enum CartreeError {
    /// Ragged rows, an empty dataset, or a label/row count mismatch.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Predict was called before the model was fit.
    #[error("Predict called before the model was successfully fit.")]
    UntrainedModel,
    /// Prediction data width differs from the training width.
    #[error("Expected rows of width {expected}, but got width {actual}.")]
    DimensionMismatch {
        /// Width of the training data.
        expected: usize,
        /// Width of the data passed to predict.
        actual: usize,
    },
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
}
