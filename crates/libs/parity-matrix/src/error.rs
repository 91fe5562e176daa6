use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Missing matrix document: {}", .0.display())]
    MissingDocument(PathBuf),
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
}
