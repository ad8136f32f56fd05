//! Error types for the fantasy basketball ranking CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot rank an empty player batch")]
    EmptyBatch,

    #[error("unknown category: {key}")]
    UnknownCategory { key: String },

    #[error("invalid weight {weight} for category {key} (must be finite and non-negative)")]
    InvalidWeight { key: String, weight: f64 },

    #[error("invalid sort key: {key}")]
    InvalidSortKey { key: String },

    #[error("invalid weight spec '{spec}', expected KEY=VALUE")]
    InvalidWeightSpec { spec: String },

    #[error("invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseFloatError),

    #[error("data error: {message}")]
    Data { message: String },
}

impl From<anyhow::Error> for RankError {
    fn from(err: anyhow::Error) -> Self {
        RankError::Data {
            message: err.to_string(),
        }
    }
}
