use thiserror::Error;

use crate::Dimension;

#[derive(Debug, Error)]
pub enum LadderError {
    #[error("no label vocabulary injected for {0}")]
    MissingDimension(Dimension),

    #[error("label vocabulary for {0} is empty")]
    EmptyDimension(Dimension),

    #[error("label vocabulary for {0} was already injected")]
    DuplicateDimension(Dimension),

    #[error("label '{label}' does not parse on the {dimension} ladder")]
    UnparseableLabel { dimension: Dimension, label: String },

    #[error("grading model used before a label vocabulary was installed")]
    NotInstalled,

    #[error("grading model is already installed for this process")]
    AlreadyInstalled,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
