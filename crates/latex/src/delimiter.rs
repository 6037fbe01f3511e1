use crate::error::RewriteError;

/// Candidate delimiter characters, scanned left to right: symbols first,
/// then digits, then lowercase and uppercase letters. The order is part of
/// the output contract, not an implementation detail.
pub const DELIMITER_CANDIDATES: &str =
    "|!@#^&*-=+0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A start/end delimiter pair bounding inline code text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Character placed before the code text.
    pub start: char,
    /// Character placed after the code text.
    pub end: char,
}

/// Chooses delimiters guaranteed absent from `contents`.
///
/// The brace pair is preferred. When the contents use braces, the first
/// candidate character not occurring anywhere in the contents serves as both
/// start and end delimiter. Contents containing every candidate cannot be
/// bounded safely and fail with [`RewriteError::UnrepresentableContent`].
pub fn select(contents: &str) -> Result<Delimiters, RewriteError> {
    if !contents.contains(['{', '}']) {
        return Ok(Delimiters {
            start: '{',
            end: '}',
        });
    }
    DELIMITER_CANDIDATES
        .chars()
        .find(|candidate| !contents.contains(*candidate))
        .map(|candidate| Delimiters {
            start: candidate,
            end: candidate,
        })
        .ok_or_else(|| RewriteError::UnrepresentableContent(contents.to_string()))
}
