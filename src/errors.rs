use thiserror::Error;

/// Error type that captures caller-input failures at the engine boundary.
///
/// Nothing here is retried and nothing is fatal: a failed operation leaves
/// the session exactly as it was before the call.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("ambiguous index {index} out of range ({pending} entries pending)")]
    InvalidIndex { index: usize, pending: usize },
    #[error("group {0:?} is not a candidate for this reimbursement")]
    UnknownGroup(String),
    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
