//! Error types for catalog construction, scoring preconditions and submission.

use thiserror::Error;

/// A catalog failed validation or could not be parsed.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two phrases share a label. Labels are the selection key, so this is fatal.
    #[error("duplicate phrase label: {0:?}")]
    DuplicateLabel(String),

    /// A catalog must offer at least one phrase.
    #[error("catalog has no phrases")]
    Empty,

    #[error("phrase {label:?} has weight {weight}, outside -{max}..={max}", max = crate::catalog::MAX_PHRASE_WEIGHT)]
    WeightOutOfRange { label: String, weight: i32 },

    /// The JSON manifest did not match the expected shape.
    #[error("invalid catalog manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// A selection does not satisfy the scoring engine's input contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("selection has {actual} phrases, expected exactly {expected}")]
    WrongSize { expected: usize, actual: usize },

    #[error("phrase {0:?} appears more than once in the selection")]
    DuplicateLabel(String),
}

/// Reasons a submit request is ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("selection incomplete: {selected} of {required} phrases chosen")]
    Incomplete { selected: usize, required: usize },

    #[error("this round was already submitted; reset to play again")]
    AlreadySubmitted,
}
