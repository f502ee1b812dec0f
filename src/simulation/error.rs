//! Error taxonomy for the simulation engine.
//!
//! Every variant is a precondition violation caught before any sampling or
//! arithmetic runs. Once inputs validate, the pipeline cannot fail.

use thiserror::Error;

/// Errors produced by the simulation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// An input parameter fell outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Metrics were requested on a dataset with zero rows.
    #[error("metrics requested on an empty dataset")]
    EmptyDataset,

    /// Metrics were requested before both estimators had run.
    #[error("dataset has no predictions yet; run both estimators before computing metrics")]
    MissingEstimates,
}

impl SimulationError {
    /// Shorthand for an `InvalidParameter` with the given message.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
