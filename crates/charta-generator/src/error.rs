use thiserror::Error;

use charta_core::models::context::BodyPart;
use charta_ladders::LadderError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unsupported body part: {0} (no clinical data for this region)")]
    UnsupportedBodyPart(BodyPart),

    #[error("invalid generation options: {0}")]
    InvalidOptions(String),

    #[error("invalid clinical context: {0}")]
    InvalidContext(String),

    #[error("grading model error: {0}")]
    Ladder(#[from] LadderError),
}
