use thiserror::Error;

/// Errors raised while loading a graph. Queries on a built graph never fail.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A line that is not `source target weight`.
    #[error("line {line}: expected `source target weight`, found `{content}`")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight { line: usize, value: String },
}
