use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure decoding the upstream result payload.
#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed result array: {0}")]
    Decode(#[from] serde_json::Error),
}
