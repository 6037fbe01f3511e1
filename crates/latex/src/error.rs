use thiserror::Error;

/// Errors raised while rewriting code nodes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// Inline code whose text contains every candidate delimiter character,
    /// leaving no safe way to bound it inside a typesetting command.
    #[error("Unable to determine a delimiter to place around {0:?}")]
    UnrepresentableContent(String),
}
