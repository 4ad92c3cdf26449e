//! Errors raised at the configuration edges
//!
//! The simulation itself never fails; only loading tuning/settings can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
