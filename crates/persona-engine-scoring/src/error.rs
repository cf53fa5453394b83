//! Scoring engine error types.

use thiserror::Error;

/// Errors that can occur while scoring a questionnaire response.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The response does not cover the full item set. Only final scoring
    /// raises this; preview computations skip missing items.
    #[error("incomplete response: {answered} of {expected} items answered (first missing: {first_missing})")]
    IncompleteInput {
        /// Items actually answered.
        answered: usize,
        /// Items the catalog expects.
        expected: usize,
        /// Lowest-ordered missing item id.
        first_missing: String,
    },

    /// The response contains an item id the catalog does not know.
    #[error("unknown item id: {item_id}")]
    UnknownItem {
        /// The offending item id.
        item_id: String,
    },

    /// An answer lies outside the Likert scale.
    #[error("answer out of range for {item_id}: {value} (valid: 1..={scale_max})")]
    InputRange {
        /// The offending item id.
        item_id: String,
        /// The rejected value.
        value: u8,
        /// Upper end of the valid scale.
        scale_max: u8,
    },

    /// Engine configuration failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error at the engine boundary.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A stored result could not be reused by the idempotency guard.
    #[error("result store error: {0}")]
    Store(String),
}

/// Result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::Serialization(err.to_string())
    }
}

impl ScoreError {
    /// Create an out-of-range error for one answer.
    pub fn out_of_range(item_id: impl Into<String>, value: u8, scale_max: u8) -> Self {
        ScoreError::InputRange {
            item_id: item_id.into(),
            value,
            scale_max,
        }
    }

    /// True when the error is a property of the submitted answers rather
    /// than of the engine or its stores.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScoreError::IncompleteInput { .. }
                | ScoreError::UnknownItem { .. }
                | ScoreError::InputRange { .. }
        )
    }
}
