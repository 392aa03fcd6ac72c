use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The form of the single value a finished serializer emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The JSON-LD document as a `serde_json::Value`.
    #[default]
    Document,
    /// The JSON-encoded string form of the document.
    Text,
}

/// Configuration for [`JsonLdSerializer`](crate::JsonLdSerializer).
///
/// All fields default to off: a default serializer emits the uncompacted
/// document form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerOptions {
    pub output_format: OutputFormat,

    /// Compact the document against the effective context before output.
    pub compact: bool,

    /// Explicit `@context` object. Entries here take precedence over
    /// prefixes collected from the input stream.
    pub context: Option<Value>,

    /// Pretty-print text output.
    pub pretty: bool,
}

impl SerializerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
