use fertiq_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdseError {
    #[error("invalid thresholds: {0}")]
    Thresholds(#[from] CoreError),
}
