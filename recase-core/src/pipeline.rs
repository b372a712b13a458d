//! Pipeline orchestration: sources, sinks, and the transform run

use crate::codec;
use crate::document::Document;
use crate::error::{RecaseError, Result};
use crate::format::Format;
use crate::transform::Transformation;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Where the pipeline reads the input document from.
///
/// A named file is opened, read, and closed within the pipeline call; an
/// already-open stream is read but never closed, the caller owns its
/// lifetime.
pub enum Source {
    /// Named file; the extension participates in format inference.
    Path(PathBuf),
    /// Already-open stream; format inference is impossible, an explicit
    /// input format is required.
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

impl Source {
    /// Resolve an optional path/stream pair into a source.
    ///
    /// A path takes precedence when both are given; supplying neither is
    /// an error.
    pub fn resolve(path: Option<PathBuf>, reader: Option<Box<dyn Read>>) -> Result<Source> {
        match (path, reader) {
            (Some(path), _) => Ok(Source::Path(path)),
            (None, Some(reader)) => Ok(Source::Reader(reader)),
            (None, None) => Err(RecaseError::MissingInput),
        }
    }
}

/// Where the pipeline writes the transformed document.
pub enum Sink {
    /// Named file; created (truncating any existing content) and closed by
    /// the pipeline on every exit path.
    Path(PathBuf),
    /// Already-open stream; written and flushed but never closed.
    Writer(Box<dyn Write>),
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Sink::Writer(_) => f.debug_tuple("Writer").finish(),
        }
    }
}

impl Sink {
    /// Resolve an optional path/stream pair into a sink.
    ///
    /// A path takes precedence when both are given; supplying neither is
    /// an error.
    pub fn resolve(path: Option<PathBuf>, writer: Option<Box<dyn Write>>) -> Result<Sink> {
        match (path, writer) {
            (Some(path), _) => Ok(Sink::Path(path)),
            (None, Some(writer)) => Ok(Sink::Writer(writer)),
            (None, None) => Err(RecaseError::MissingOutput),
        }
    }

    /// Destination path when the sink is a named file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::Path(path) => Some(path),
            Sink::Writer(_) => None,
        }
    }
}

/// One pipeline invocation.
pub struct TransformRequest {
    /// Input document location.
    pub source: Source,
    /// Explicit input format override; inferred from the source filename
    /// when absent.
    pub input_format: Option<Format>,
    /// Explicit output format override; inferred from the sink filename,
    /// then the input format, when absent.
    pub output_format: Option<Format>,
    /// Case-folding operation to apply.
    pub transformation: Transformation,
    /// Output destination.
    pub sink: Sink,
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    /// Number of elements transformed.
    pub elements: usize,
    /// Format the input was decoded from.
    pub input_format: Format,
    /// Format the output was encoded to.
    pub output_format: Format,
}

/// Run the whole pipeline for a single request.
///
/// Resolve the input format, decode, resolve the output format, transform,
/// encode. Any failure aborts the run and is surfaced unchanged; there are
/// no retries and no partial-output recovery.
pub fn execute_transform(request: TransformRequest) -> Result<TransformSummary> {
    let TransformRequest {
        source,
        input_format,
        output_format,
        transformation,
        sink,
    } = request;

    let (raw, input_format) = read_source(source, input_format)?;
    let document = codec::decode(&raw, input_format)?;

    let output_format = Format::resolve_output(output_format, sink.path(), input_format);
    let transformed = transformation.apply(&document)?;
    write_sink(&transformed, output_format, sink)?;

    Ok(TransformSummary {
        elements: transformed.len(),
        input_format,
        output_format,
    })
}

/// Read the whole source eagerly and settle the input format.
fn read_source(source: Source, explicit: Option<Format>) -> Result<(Vec<u8>, Format)> {
    match source {
        Source::Path(path) => {
            let format = Format::resolve_input(explicit, &path)?;
            // Closed when the handle drops, on success and error alike.
            let mut file = File::open(&path)?;
            let mut raw = Vec::new();
            file.read_to_end(&mut raw)?;
            Ok((raw, format))
        }
        Source::Reader(mut reader) => {
            let format = explicit.ok_or(RecaseError::MissingInputFormat)?;
            let mut raw = Vec::new();
            reader.read_to_end(&mut raw)?;
            Ok((raw, format))
        }
    }
}

fn write_sink(document: &Document, format: Format, sink: Sink) -> Result<()> {
    match sink {
        Sink::Path(path) => {
            let mut file = File::create(&path)?;
            codec::encode(document, format, &mut file)
        }
        Sink::Writer(mut writer) => codec::encode(document, format, &mut writer),
    }
}
