//! Decoding and encoding documents in JSON and YAML

use crate::document::Document;
use crate::error::Result;
use crate::format::Format;
use serde_json::Value;
use std::io::Write;

/// Parse raw bytes in the given format into a document.
///
/// The whole input is already materialized in memory; there is no
/// incremental decode. Malformed input surfaces the underlying parser
/// error unchanged.
pub fn decode(raw: &[u8], format: Format) -> Result<Document> {
    let elements: Vec<Value> = match format {
        Format::Json => serde_json::from_slice(raw)?,
        Format::Yaml => serde_yaml::from_slice(raw)?,
    };
    Ok(Document::new(elements))
}

/// Serialize a document to the writer in the given format.
///
/// JSON output is a compact array; YAML output is a block sequence.
pub fn encode<W: Write>(document: &Document, format: Format, writer: &mut W) -> Result<()> {
    match format {
        Format::Json => serde_json::to_writer(&mut *writer, document.elements())?,
        Format::Yaml => serde_yaml::to_writer(&mut *writer, document.elements())?,
    }
    writer.flush()?;
    Ok(())
}
