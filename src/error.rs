use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipgreetError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
