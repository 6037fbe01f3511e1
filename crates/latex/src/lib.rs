#![deny(missing_docs)]
//! Mintex LaTeX engine: rewrites code nodes into minted typesetting commands.

/// Flattened code view used for command assembly.
pub mod descriptor;
/// Inline code delimiter selection.
pub mod delimiter;
/// Rewrite error types.
pub mod error;
/// The code node rewrite action.
pub mod rewriter;
/// Document-level filter settings.
pub mod settings;

pub use descriptor::CodeDescriptor;
pub use delimiter::{DELIMITER_CANDIDATES, Delimiters};
pub use error::RewriteError;
pub use rewriter::{MintedRewriter, TARGET_FORMAT};
pub use settings::{DEFAULT_LANGUAGE, SETTINGS_KEY, Settings};
