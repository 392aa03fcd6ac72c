use std::collections::BTreeMap;

use oxrdf::{NamedNode, Quad};
use serde_json::Value;

use crate::compact::compact_document;
use crate::config::{OutputFormat, SerializerOptions};
use crate::context::EffectiveContext;
use crate::error::Result;
use crate::from_rdf::dataset_to_jsonld;

/// The single value a finished serializer emits.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonLdOutput {
    Document(Value),
    Text(String),
}

impl JsonLdOutput {
    pub fn as_document(&self) -> Option<&Value> {
        match self {
            Self::Document(document) => Some(document),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Document(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Push-based JSON-LD serializer for RDF quads.
///
/// Quads and prefix announcements are buffered as they arrive;
/// [`finish`](Self::finish) converts the buffered dataset in one step and
/// emits exactly one value. Nothing is produced before `finish`, and a
/// failure (such as a malformed `@context`) surfaces there instead of
/// yielding partial output.
///
/// ```
/// use oxrdf::{GraphName, Literal, NamedNode, Quad};
/// use rdf_serializer_jsonld::{JsonLdSerializer, SerializerOptions};
///
/// let mut serializer = JsonLdSerializer::new(SerializerOptions::new().compact(true));
/// serializer.serialize_prefix("ex", NamedNode::new("http://example.org/")?);
/// serializer.serialize_quad(Quad::new(
///     NamedNode::new("http://example.org/subject")?,
///     NamedNode::new("http://example.org/predicate")?,
///     Literal::new_simple_literal("object1"),
///     GraphName::DefaultGraph,
/// ));
/// let output = serializer.finish()?;
/// assert!(output.as_document().is_some());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonLdSerializer {
    options: SerializerOptions,
    quads: Vec<Quad>,
    prefixes: BTreeMap<String, String>,
}

impl JsonLdSerializer {
    pub fn new(options: SerializerOptions) -> Self {
        Self {
            options,
            quads: Vec::new(),
            prefixes: BTreeMap::new(),
        }
    }

    /// Buffer one quad.
    pub fn serialize_quad(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    /// Record a prefix binding announced on the input stream. A later
    /// binding for the same prefix overwrites the earlier one. Collected
    /// prefixes only influence output when compaction is enabled, and
    /// explicit context entries shadow them.
    pub fn serialize_prefix(&mut self, prefix: impl Into<String>, namespace: NamedNode) {
        self.prefixes.insert(prefix.into(), namespace.into_string());
    }

    /// Convert the buffered dataset and emit the single output value.
    pub fn finish(self) -> Result<JsonLdOutput> {
        let mut document = dataset_to_jsonld(&self.quads);
        tracing::debug!(quads = self.quads.len(), "converted dataset to JSON-LD");

        if self.options.compact {
            let context = EffectiveContext::assemble(self.options.context.as_ref(), &self.prefixes)?;
            document = compact_document(document, &context);
        }

        match self.options.output_format {
            OutputFormat::Document => Ok(JsonLdOutput::Document(document)),
            OutputFormat::Text => {
                let text = if self.options.pretty {
                    serde_json::to_string_pretty(&document)?
                } else {
                    serde_json::to_string(&document)?
                };
                Ok(JsonLdOutput::Text(text))
            }
        }
    }
}

impl Extend<Quad> for JsonLdSerializer {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        self.quads.extend(iter);
    }
}
