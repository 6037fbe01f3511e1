use crate::ast::Node;
use serde_json::{Map, Value};

/// Outcome of offering one node to a [`Rewriter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Rewrite {
    /// Leave the node exactly as it is.
    Unchanged,
    /// Replace the node with a single new node.
    Replace(Value),
    /// Replace the node with a sequence of nodes spliced into the parent.
    Splice(Vec<Value>),
}

/// A node rewrite action applied across a document tree.
///
/// The traversal calls [`Rewriter::rewrite`] once per tagged node, in
/// document order, passing the classified node, the requested output format,
/// and the document metadata. Calls are independent; the metadata is the only
/// context shared between them, and it is read-only.
pub trait Rewriter {
    /// Error type for nodes that cannot be rewritten safely.
    type Error;

    /// Inspects one node and decides its replacement.
    fn rewrite(
        &self,
        node: &Node,
        format: &str,
        meta: &Map<String, Value>,
    ) -> Result<Rewrite, Self::Error>;
}

impl<F, E> Rewriter for F
where
    F: Fn(&Node, &str, &Map<String, Value>) -> Result<Rewrite, E>,
{
    type Error = E;

    fn rewrite(
        &self,
        node: &Node,
        format: &str,
        meta: &Map<String, Value>,
    ) -> Result<Rewrite, E> {
        (self)(node, format, meta)
    }
}

/// Walks a document tree, offering every tagged node to `action`.
///
/// Tagged nodes are the `{"t": ...}` objects that occur as array elements,
/// which is where node sequences put them; tagged objects sitting directly as
/// object values are descended into but not offered. Replacement nodes are
/// themselves walked before being spliced in, so rewrites may nest. Every
/// other value is rebuilt with its children walked.
pub fn walk<A: Rewriter>(
    value: Value,
    action: &A,
    format: &str,
    meta: &Map<String, Value>,
) -> Result<Value, A::Error> {
    match value {
        Value::Array(items) => {
            let mut rebuilt = Vec::with_capacity(items.len());
            for item in items {
                match Node::from_value(&item) {
                    Some(node) => match action.rewrite(&node, format, meta)? {
                        Rewrite::Unchanged => rebuilt.push(walk(item, action, format, meta)?),
                        Rewrite::Replace(replacement) => {
                            rebuilt.push(walk(replacement, action, format, meta)?);
                        }
                        Rewrite::Splice(replacements) => {
                            for replacement in replacements {
                                rebuilt.push(walk(replacement, action, format, meta)?);
                            }
                        }
                    },
                    None => rebuilt.push(walk(item, action, format, meta)?),
                }
            }
            Ok(Value::Array(rebuilt))
        }
        Value::Object(fields) => {
            let mut rebuilt = Map::with_capacity(fields.len());
            for (key, field) in fields {
                rebuilt.insert(key, walk(field, action, format, meta)?);
            }
            Ok(Value::Object(rebuilt))
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::raw_inline;
    use serde_json::json;

    fn keep_everything(
        _node: &Node,
        _format: &str,
        _meta: &Map<String, Value>,
    ) -> Result<Rewrite, String> {
        Ok(Rewrite::Unchanged)
    }

    fn strs_to_raw(
        node: &Node,
        format: &str,
        _meta: &Map<String, Value>,
    ) -> Result<Rewrite, String> {
        match node {
            Node::Other(tag) if tag == "Str" => {
                Ok(Rewrite::Replace(raw_inline(format, "X".to_string())))
            }
            _ => Ok(Rewrite::Unchanged),
        }
    }

    #[test]
    fn keeps_untouched_trees_identical() {
        let doc = json!({
            "blocks": [
                { "t": "Para", "c": [{ "t": "Str", "c": "hi" }, { "t": "Space" }] },
                { "t": "HorizontalRule" }
            ]
        });
        let walked = walk(doc.clone(), &keep_everything, "latex", &Map::new()).unwrap();
        assert_eq!(walked, doc);
    }

    #[test]
    fn replaces_nodes_in_place() {
        let doc = json!([{ "t": "Para", "c": [{ "t": "Str", "c": "hi" }] }]);
        let walked = walk(doc, &strs_to_raw, "latex", &Map::new()).unwrap();
        assert_eq!(
            walked,
            json!([{ "t": "Para", "c": [{ "t": "RawInline", "c": ["latex", "X"] }] }])
        );
    }

    #[test]
    fn splices_sequences_into_the_parent() {
        let split_spaces = |node: &Node, _format: &str, _meta: &Map<String, Value>| {
            match node {
                Node::Other(tag) if tag == "Space" => Ok(Rewrite::Splice(vec![
                    json!({ "t": "Str", "c": "-" }),
                    json!({ "t": "Str", "c": "-" }),
                ])),
                _ => Ok::<_, String>(Rewrite::Unchanged),
            }
        };
        let doc = json!([{ "t": "Str", "c": "a" }, { "t": "Space" }, { "t": "Str", "c": "b" }]);
        let walked = walk(doc, &split_spaces, "latex", &Map::new()).unwrap();
        assert_eq!(
            walked,
            json!([
                { "t": "Str", "c": "a" },
                { "t": "Str", "c": "-" },
                { "t": "Str", "c": "-" },
                { "t": "Str", "c": "b" }
            ])
        );
    }

    #[test]
    fn splice_can_drop_a_node() {
        let drop_spaces = |node: &Node, _format: &str, _meta: &Map<String, Value>| match node {
            Node::Other(tag) if tag == "Space" => Ok::<_, String>(Rewrite::Splice(Vec::new())),
            _ => Ok(Rewrite::Unchanged),
        };
        let doc = json!([{ "t": "Str", "c": "a" }, { "t": "Space" }]);
        let walked = walk(doc, &drop_spaces, "latex", &Map::new()).unwrap();
        assert_eq!(walked, json!([{ "t": "Str", "c": "a" }]));
    }

    #[test]
    fn visits_nodes_nested_inside_payloads() {
        let doc = json!([{
            "t": "BlockQuote",
            "c": [{ "t": "Para", "c": [{ "t": "Str", "c": "deep" }] }]
        }]);
        let walked = walk(doc, &strs_to_raw, "latex", &Map::new()).unwrap();
        assert_eq!(
            walked,
            json!([{
                "t": "BlockQuote",
                "c": [{ "t": "Para", "c": [{ "t": "RawInline", "c": ["latex", "X"] }] }]
            }])
        );
    }

    #[test]
    fn tagged_object_values_are_descended_not_offered() {
        // A tagged object stored as a map value is not a sequence element, so
        // the action only sees the tagged nodes inside its payload lists.
        let doc = json!({
            "meta": {
                "title": { "t": "MetaInlines", "c": [{ "t": "Str", "c": "hi" }] }
            }
        });
        let walked = walk(doc, &strs_to_raw, "latex", &Map::new()).unwrap();
        assert_eq!(
            walked,
            json!({
                "meta": {
                    "title": {
                        "t": "MetaInlines",
                        "c": [{ "t": "RawInline", "c": ["latex", "X"] }]
                    }
                }
            })
        );
    }

    #[test]
    fn action_errors_stop_the_walk() {
        let reject_code = |node: &Node, _format: &str, _meta: &Map<String, Value>| match node {
            Node::Code(code) => Err(format!("rejected {:?}", code.text)),
            _ => Ok(Rewrite::Unchanged),
        };
        let doc = json!([{ "t": "Code", "c": [["", [], []], "boom"] }]);
        let err = walk(doc, &reject_code, "latex", &Map::new()).unwrap_err();
        assert_eq!(err, "rejected \"boom\"");
    }

    #[test]
    fn scalars_survive_unchanged() {
        let walked = walk(json!(42), &keep_everything, "latex", &Map::new()).unwrap();
        assert_eq!(walked, json!(42));
    }
}
