use serde_json::{Map, Value};

use crate::context::EffectiveContext;

/// Compact a graph-array document against the effective context.
///
/// The result is a single JSON object. A lone graph folds its `@id` and
/// `@graph` into the top level; multiple graphs sit under a top-level
/// `@graph` array. `@context` is omitted when the effective context is
/// empty. Node arrays are kept as arrays even for a single node.
pub fn compact_document(document: Value, context: &EffectiveContext) -> Value {
    let graphs = match document {
        Value::Array(entries) => entries,
        other => vec![other],
    };
    let mut graphs: Vec<Value> = graphs
        .into_iter()
        .map(|entry| compact_graph(entry, context))
        .collect();

    let mut object = Map::new();
    if !context.is_empty() {
        object.insert("@context".to_owned(), context.to_value());
    }
    if graphs.len() == 1 {
        if let Value::Object(entry) = graphs.remove(0) {
            for (key, value) in entry {
                object.insert(key, value);
            }
        }
    } else {
        object.insert("@graph".to_owned(), Value::Array(graphs));
    }
    Value::Object(object)
}

fn compact_graph(entry: Value, context: &EffectiveContext) -> Value {
    let Value::Object(entry) = entry else {
        return entry;
    };
    let mut object = Map::new();
    for (key, value) in entry {
        match key.as_str() {
            "@id" => {
                object.insert(key, compact_id(value, context));
            }
            "@graph" => {
                let nodes = match value {
                    Value::Array(nodes) => nodes,
                    node => vec![node],
                };
                let nodes = nodes
                    .into_iter()
                    .map(|node| compact_node(node, context))
                    .collect();
                object.insert(key, Value::Array(nodes));
            }
            _ => {
                object.insert(key, value);
            }
        }
    }
    Value::Object(object)
}

fn compact_node(node: Value, context: &EffectiveContext) -> Value {
    let Value::Object(node) = node else {
        return node;
    };
    let mut object = Map::new();
    for (key, value) in node {
        match key.as_str() {
            "@id" => {
                object.insert(key, compact_id(value, context));
            }
            "@type" => {
                object.insert(key, compact_ids(value, context));
            }
            _ if key.starts_with('@') => {
                object.insert(key, value);
            }
            _ => {
                // Distinct IRIs can compact to the same key; merge, never overwrite.
                insert_merged(
                    &mut object,
                    context.compact_iri(&key),
                    compact_values(value, context),
                );
            }
        }
    }
    Value::Object(object)
}

/// Insert a value under a key, merging with any values already present into
/// a deduplicated array.
fn insert_merged(object: &mut Map<String, Value>, key: String, value: Value) {
    let Some(existing) = object.get_mut(&key) else {
        object.insert(key, value);
        return;
    };
    let mut values = match existing.take() {
        Value::Array(items) => items,
        single => vec![single],
    };
    let incoming = match value {
        Value::Array(items) => items,
        single => vec![single],
    };
    for item in incoming {
        if !values.contains(&item) {
            values.push(item);
        }
    }
    *existing = Value::Array(values);
}

fn compact_values(value: Value, context: &EffectiveContext) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| compact_value(item, context))
                .collect(),
        ),
        single => compact_value(single, context),
    }
}

/// Compact the IRIs inside a single value: the `@id` of node references and
/// the `@type` of value objects. Bare literal strings pass through.
fn compact_value(value: Value, context: &EffectiveContext) -> Value {
    let Value::Object(object) = value else {
        return value;
    };
    let mut out = Map::new();
    for (key, part) in object {
        match key.as_str() {
            "@id" | "@type" => {
                out.insert(key, compact_id(part, context));
            }
            _ => {
                out.insert(key, part);
            }
        }
    }
    Value::Object(out)
}

/// Compact one identifier. Keywords (such as the `@default` graph label) and
/// blank node labels are left alone.
fn compact_id(value: Value, context: &EffectiveContext) -> Value {
    match value {
        Value::String(iri) if !iri.starts_with('@') && !iri.starts_with("_:") => {
            Value::String(context.compact_iri(&iri))
        }
        other => other,
    }
}

fn compact_ids(value: Value, context: &EffectiveContext) -> Value {
    match value {
        Value::Array(items) => {
            // Distinct type IRIs can compact to the same term; keep one.
            let mut compacted: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                let item = compact_id(item, context);
                if !compacted.contains(&item) {
                    compacted.push(item);
                }
            }
            if compacted.len() == 1 {
                compacted.remove(0)
            } else {
                Value::Array(compacted)
            }
        }
        single => compact_id(single, context),
    }
}
