/// Configuration errors. Color selection and geometry never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),

    #[error("malformed color profile: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown color profile: {0:?}")]
    UnknownProfile(String),

    #[error("unknown analysis type: {0:?}")]
    UnknownAnalysisType(String),
}
