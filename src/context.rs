use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{Result, SerializerError};

/// The effective compaction context: the explicit `@context` object layered
/// over prefixes collected from the input stream.
///
/// Remote context URLs are not resolved; the explicit context must be a JSON
/// object. Term definitions may be strings, objects, or null (an unmapped
/// term). String-valued entries and object entries with a string `@id` double
/// as prefix mappings for IRI shrinking.
#[derive(Clone, Debug, Default)]
pub struct EffectiveContext {
    prefixes: BTreeMap<String, String>,
    document: Map<String, Value>,
}

impl EffectiveContext {
    /// Merge collected prefixes under an optional explicit context.
    /// Explicit entries win on key collision.
    pub fn assemble(
        explicit: Option<&Value>,
        collected: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut document = Map::new();
        for (prefix, namespace) in collected {
            document.insert(prefix.clone(), Value::String(namespace.clone()));
        }

        if let Some(value) = explicit {
            let object = value
                .as_object()
                .ok_or_else(|| SerializerError::context("@context must be a JSON object"))?;
            for (term, definition) in object {
                validate_term(term, definition)?;
                document.insert(term.clone(), definition.clone());
            }
        }

        let mut prefixes = BTreeMap::new();
        for (term, definition) in &document {
            if term.starts_with('@') {
                continue;
            }
            if let Some(iri) = definition_iri(definition) {
                prefixes.insert(term.clone(), iri.to_owned());
            }
        }

        Ok(Self { prefixes, document })
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// The `@context` value to embed in the compacted document.
    pub fn to_value(&self) -> Value {
        Value::Object(self.document.clone())
    }

    /// Compact an IRI to `prefix:suffix` form. An IRI that exactly matches a
    /// term's mapping compacts to the bare term; otherwise the longest
    /// matching namespace wins. IRIs no mapping covers pass through.
    pub fn compact_iri(&self, iri: &str) -> String {
        let mut best: Option<(usize, String)> = None;
        for (term, namespace) in &self.prefixes {
            if iri == namespace {
                return term.clone();
            }
            if let Some(suffix) = iri.strip_prefix(namespace.as_str())
                && !suffix.is_empty()
                && namespace.len() > best.as_ref().map_or(0, |(len, _)| *len)
            {
                best = Some((namespace.len(), format!("{term}:{suffix}")));
            }
        }
        best.map_or_else(|| iri.to_owned(), |(_, compacted)| compacted)
    }
}

fn validate_term(term: &str, definition: &Value) -> Result<()> {
    match definition {
        Value::String(_) | Value::Null => Ok(()),
        Value::Object(object) => match object.get("@id") {
            None | Some(Value::String(_)) => Ok(()),
            Some(other) => Err(SerializerError::context(format!(
                "@id of term '{term}' must be a string, got: {other}"
            ))),
        },
        other => Err(SerializerError::context(format!(
            "invalid definition for term '{term}': {other}"
        ))),
    }
}

/// The IRI a term maps to, if the definition provides one.
fn definition_iri(definition: &Value) -> Option<&str> {
    match definition {
        Value::String(iri) => Some(iri),
        Value::Object(object) => object.get("@id").and_then(Value::as_str),
        _ => None,
    }
}
