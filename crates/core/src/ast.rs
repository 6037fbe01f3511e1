use serde::Deserialize;
use serde_json::{Value, json};

/// Wire form of node attributes: identifier, class list, key-value pairs.
type RawAttr = (String, Vec<String>, Vec<(String, String)>);

/// Wire form of a code node payload: attributes plus literal text.
type RawCode = (Attr, String);

/// Attributes attached to a code node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAttr")]
pub struct Attr {
    /// Element identifier from the source document.
    pub identifier: String,
    /// Ordered class list; the first entry, when present, names the language.
    pub classes: Vec<String>,
    /// Ordered key-value formatting options.
    pub pairs: Vec<(String, String)>,
}

impl From<RawAttr> for Attr {
    fn from((identifier, classes, pairs): RawAttr) -> Self {
        Self {
            identifier,
            classes,
            pairs,
        }
    }
}

/// A code-bearing node: its attributes and literal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCode")]
pub struct CodeNode {
    /// Structured node attributes.
    pub attr: Attr,
    /// The literal code text, carried verbatim.
    pub text: String,
}

impl From<RawCode> for CodeNode {
    fn from((attr, text): RawCode) -> Self {
        Self { attr, text }
    }
}

/// One document node, classified into the closed union rewriters match on.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A multi-line code region.
    CodeBlock(CodeNode),
    /// An inline code span.
    Code(CodeNode),
    /// Any other node kind, identified by tag; rewriters leave these alone.
    Other(String),
}

impl Node {
    /// Classifies a tree value when it is a tagged node object.
    ///
    /// Returns `None` for values that are not `{"t": ...}` objects. A code
    /// tag whose payload does not have the expected shape is classified as
    /// [`Node::Other`] so the node passes through unchanged.
    pub fn from_value(value: &Value) -> Option<Node> {
        let object = value.as_object()?;
        let tag = object.get("t")?.as_str()?;
        if tag != "CodeBlock" && tag != "Code" {
            return Some(Node::Other(tag.to_string()));
        }

        let payload = object.get("c").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<CodeNode>(payload) {
            Ok(code) if tag == "CodeBlock" => Some(Node::CodeBlock(code)),
            Ok(code) => Some(Node::Code(code)),
            Err(err) => {
                log::warn!("{tag} node with unexpected payload shape: {err}");
                Some(Node::Other(tag.to_string()))
            }
        }
    }
}

/// Builds a raw block node whose text is emitted verbatim for `format`.
pub fn raw_block(format: &str, text: String) -> Value {
    json!({ "t": "RawBlock", "c": [format, text] })
}

/// Builds a raw inline node whose text is emitted verbatim for `format`.
pub fn raw_inline(format: &str, text: String) -> Value {
    json!({ "t": "RawInline", "c": [format, text] })
}
