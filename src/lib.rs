pub mod compact;
pub mod config;
pub mod context;
pub mod error;
pub mod from_rdf;
pub mod serializer;

pub use config::{OutputFormat, SerializerOptions};
pub use error::{Result, SerializerError};
pub use serializer::{JsonLdOutput, JsonLdSerializer};

/// Convenience: serialize a finite sequence of quads with the given options
/// and return the single output value.
pub fn serialize_quads(
    quads: impl IntoIterator<Item = oxrdf::Quad>,
    options: SerializerOptions,
) -> Result<JsonLdOutput> {
    let mut serializer = JsonLdSerializer::new(options);
    serializer.extend(quads);
    serializer.finish()
}
