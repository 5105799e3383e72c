//! Process-wide grading model for callers that inject the vocabulary once at
//! start-up and share it across worker threads.

use std::sync::OnceLock;

use crate::error::LadderError;
use crate::grading::GradingModel;

static MODEL: OnceLock<GradingModel> = OnceLock::new();

/// Install the process-wide model. A second install is a configuration error.
pub fn install(model: GradingModel) -> Result<&'static GradingModel, LadderError> {
    MODEL
        .set(model)
        .map_err(|_| LadderError::AlreadyInstalled)?;
    self::model()
}

/// The installed model, or [`LadderError::NotInstalled`].
pub fn model() -> Result<&'static GradingModel, LadderError> {
    MODEL.get().ok_or(LadderError::NotInstalled)
}
