use crate::delimiter;
use crate::descriptor::CodeDescriptor;
use crate::error::RewriteError;
use crate::settings::Settings;
use mintex_core::{CodeNode, Node, Rewrite, Rewriter, raw_block, raw_inline};
use serde_json::{Map, Value};

/// The output format this engine produces raw nodes for.
pub const TARGET_FORMAT: &str = "latex";

/// Rewrites code nodes into minted typesetting commands for LaTeX output.
///
/// For every other output format the action is a no-op, and node kinds other
/// than code always pass through untouched. Settings are re-read from the
/// document metadata on each call; there is no cross-node state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MintedRewriter;

impl Rewriter for MintedRewriter {
    type Error = RewriteError;

    fn rewrite(
        &self,
        node: &Node,
        format: &str,
        meta: &Map<String, Value>,
    ) -> Result<Rewrite, RewriteError> {
        if format != TARGET_FORMAT {
            return Ok(Rewrite::Unchanged);
        }
        match node {
            Node::CodeBlock(code) => Ok(Rewrite::Replace(block_command(code, meta))),
            Node::Code(code) => Ok(Rewrite::Replace(inline_command(code, meta)?)),
            Node::Other(_) => Ok(Rewrite::Unchanged),
        }
    }
}

/// Builds the minted environment replacing a block code node. The code body
/// is inserted verbatim, without escaping.
fn block_command(node: &CodeNode, meta: &Map<String, Value>) -> Value {
    let settings = Settings::from_meta(meta);
    let code = CodeDescriptor::unpack(node, settings.language.as_deref());
    let command = format!(
        "\\begin{{minted}}[{}]{{{}}}\n{}\n\\end{{minted}}",
        code.attributes, code.language, code.contents
    );
    raw_block(TARGET_FORMAT, command)
}

/// Builds the mintinline command replacing an inline code node.
///
/// Fails when the code text leaves no delimiter character free.
fn inline_command(node: &CodeNode, meta: &Map<String, Value>) -> Result<Value, RewriteError> {
    let settings = Settings::from_meta(meta);
    let code = CodeDescriptor::unpack(node, settings.language.as_deref());
    let delimiters = delimiter::select(&code.contents)?;
    let command = format!(
        "\\mintinline[{}]{{{}}}{}{}{}",
        code.attributes, code.language, delimiters.start, code.contents, delimiters.end
    );
    Ok(raw_inline(TARGET_FORMAT, command))
}
