use mintex_core::CodeNode;

/// Flattened code node fields ready for command assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDescriptor {
    /// Literal code text, inserted verbatim.
    pub contents: String,
    /// Resolved language tag; empty when neither the node nor the document
    /// names one.
    pub language: String,
    /// Attribute pairs joined as `key=value`, comma-space separated, in
    /// source order.
    pub attributes: String,
}

impl CodeDescriptor {
    /// Unpacks a code node, resolving its language against `fallback`.
    ///
    /// The node's first class wins over the document-level fallback.
    pub fn unpack(node: &CodeNode, fallback: Option<&str>) -> Self {
        let language = node
            .attr
            .classes
            .first()
            .map(String::as_str)
            .or(fallback)
            .unwrap_or_default()
            .to_string();
        let attributes = node
            .attr
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            contents: node.text.clone(),
            language,
            attributes,
        }
    }
}
