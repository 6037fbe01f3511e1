#![deny(missing_docs)]
//! Mintex core: document tree model, traversal, and filter process plumbing.

/// Document tree node model and raw-output constructors.
pub mod ast;
/// Filter process boundary: read, rewrite, write.
pub mod filter;
/// Document metadata access helpers.
pub mod meta;
/// Tree traversal and the rewrite action contract.
pub mod walk;

pub use ast::{Attr, CodeNode, Node, raw_block, raw_inline};
pub use filter::{FilterError, filter_document, run};
pub use meta::{document_meta, first_inline_text, meta_map};
pub use walk::{Rewrite, Rewriter, walk};
