use serde_json::{Map, Value};

/// Extracts the metadata mapping from a serialized document.
///
/// Both document layouts the converter has produced are supported: the map
/// layout with a top-level `meta` field, and the legacy two-element array
/// layout whose first element wraps the mapping in `unMeta`. Anything else
/// yields an empty mapping.
pub fn document_meta(doc: &Value) -> Map<String, Value> {
    if let Some(meta) = doc.get("meta").and_then(Value::as_object) {
        return meta.clone();
    }
    if let Some(meta) = doc
        .get(0)
        .and_then(|first| first.get("unMeta"))
        .and_then(Value::as_object)
    {
        return meta.clone();
    }
    Map::new()
}

/// Returns the nested mapping when `meta[key]` is a `MetaMap` value.
///
/// Any shape mismatch (absent key, other tag, non-object payload) is `None`;
/// metadata problems never abort a run.
pub fn meta_map<'a>(meta: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    tagged_content(meta.get(key)?, "MetaMap")?.as_object()
}

/// Extracts the first text token from a `MetaInlines` value.
///
/// Metadata encodes scalars as single-element inline lists rather than bare
/// strings, so string-valued settings are read through this helper. Inline
/// lists with several tokens yield the first; lists whose first element
/// carries no text yield `None`.
pub fn first_inline_text(value: &Value) -> Option<&str> {
    tagged_content(value, "MetaInlines")?.get(0)?.get("c")?.as_str()
}

/// Returns the `c` payload when `value` is a node object tagged `tag`.
fn tagged_content<'a>(value: &'a Value, tag: &str) -> Option<&'a Value> {
    let object = value.as_object()?;
    if object.get("t")?.as_str()? != tag {
        return None;
    }
    object.get("c")
}
