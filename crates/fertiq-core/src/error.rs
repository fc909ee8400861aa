use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid threshold '{name}': {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("threshold '{lower}' must be below '{upper}'")]
    ThresholdOrder {
        lower: &'static str,
        upper: &'static str,
    },
}
