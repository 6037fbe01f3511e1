use crate::meta::document_meta;
use crate::walk::{Rewriter, walk};
use serde_json::Value;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors that can occur while running a filter over a serialized document.
#[derive(Debug, Error)]
pub enum FilterError<E> {
    /// IO error reading the input stream or writing the output stream.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// The input was not a well-formed serialized document.
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    /// A rewrite action rejected a node.
    #[error("{0}")]
    Rewrite(E),
}

/// Extracts document metadata and applies `action` to every node of `doc`.
///
/// The whole tree is walked, metadata subtrees included, so code spans
/// sitting inside metadata values are rewritten too.
pub fn filter_document<A: Rewriter>(
    doc: Value,
    format: &str,
    action: &A,
) -> Result<Value, A::Error> {
    let meta = document_meta(&doc);
    walk(doc, action, format, &meta)
}

/// Reads a serialized document from `input`, rewrites it with `action`, and
/// writes the result to `output`.
///
/// This is the process boundary of a conversion-pipeline filter: the host
/// converter supplies the document on standard input and the target output
/// format as an argument, then reads the rewritten document back from
/// standard output. Nothing is written when an error occurs.
pub fn run<R, W, A>(
    mut input: R,
    mut output: W,
    format: &str,
    action: &A,
) -> Result<(), FilterError<A::Error>>
where
    R: Read,
    W: Write,
    A: Rewriter,
{
    let mut source = String::new();
    input.read_to_string(&mut source)?;
    let doc: Value = serde_json::from_str(&source)?;
    let rewritten = filter_document(doc, format, action).map_err(FilterError::Rewrite)?;
    serde_json::to_writer(&mut output, &rewritten)?;
    output.flush()?;
    Ok(())
}
