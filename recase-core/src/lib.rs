//! recase core - JSON/YAML case-folding pipeline
//!
//! This crate provides the full transformation pipeline with no CLI
//! dependencies. It includes:
//!
//! - Format resolution (explicit override or filename extension sniffing)
//! - Decoding JSON/YAML into an ordered document of scalars
//! - The uppercase/lowercase transformation
//! - Encoding back to JSON/YAML
//! - Error types
//! - The orchestrator tying the stages together
//!
//! The pipeline is single-threaded and stateless between calls: each
//! invocation decodes a fresh document, transforms it, writes it out, and
//! discards it.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod document;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types
pub use document::Document;
pub use error::{RecaseError, Result};
pub use format::Format;
pub use pipeline::{execute_transform, Sink, Source, TransformRequest, TransformSummary};
pub use transform::Transformation;
