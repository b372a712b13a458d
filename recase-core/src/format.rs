//! Format resolution: explicit overrides and filename extension sniffing

use crate::error::{RecaseError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Serialization format attached to an input or output document.
///
/// Input and output carry their own `Format`; the two may differ within a
/// single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON array of strings
    Json,
    /// YAML sequence of scalars
    Yaml,
}

impl Format {
    /// Infer a format from a filename extension.
    ///
    /// `.json` maps to JSON; `.yml` and `.yaml` map to YAML. Any other
    /// extension, or no extension at all, yields `None`. Extension
    /// comparison is ASCII case-insensitive.
    pub fn from_extension(path: &Path) -> Option<Format> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_ascii_lowercase())
        {
            Some(ext) if ext == "json" => Some(Format::Json),
            Some(ext) if ext == "yml" || ext == "yaml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Resolve the input format from an explicit override and a filename.
    ///
    /// An explicit format always wins over inference. Without one the
    /// filename extension decides; an unrecognized or missing extension is
    /// an error.
    pub fn resolve_input(explicit: Option<Format>, filename: &Path) -> Result<Format> {
        if let Some(format) = explicit {
            return Ok(format);
        }
        Format::from_extension(filename).ok_or(RecaseError::UnsupportedFormat)
    }

    /// Resolve the output format.
    ///
    /// Explicit override first, then the destination extension when the
    /// sink is a named file, then the already-resolved input format.
    pub fn resolve_output(
        explicit: Option<Format>,
        destination: Option<&Path>,
        input: Format,
    ) -> Format {
        explicit
            .or_else(|| destination.and_then(Format::from_extension))
            .unwrap_or(input)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}

impl FromStr for Format {
    type Err = RecaseError;

    fn from_str(s: &str) -> Result<Format> {
        match s.to_ascii_uppercase().as_str() {
            "JSON" => Ok(Format::Json),
            "YAML" | "YML" => Ok(Format::Yaml),
            _ => Err(RecaseError::UnsupportedFormat),
        }
    }
}
