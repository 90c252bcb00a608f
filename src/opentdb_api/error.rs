#[derive(Debug, thiserror::Error)]
pub enum TriviaError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("parser error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
