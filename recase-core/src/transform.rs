//! Case-folding transformations

use crate::document::Document;
use crate::error::{RecaseError, Result};
use serde_json::Value;
use std::str::FromStr;

/// Case-folding operation applied uniformly to every document element.
///
/// Canonical wire names are `CAPITALISE` and `DECAPITALISE`; parsing is
/// case-insensitive and unknown names are an explicit error rather than a
/// silent identity pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// Map every character to its uppercase form.
    Capitalise,
    /// Map every character to its lowercase form.
    Decapitalise,
}

impl Transformation {
    /// Apply the transformation, producing a new document of equal length
    /// and order.
    ///
    /// The input document is left untouched. Fails on the first element
    /// that is not a string. Case mapping follows the Unicode rules of
    /// [`str::to_uppercase`] / [`str::to_lowercase`].
    pub fn apply(&self, document: &Document) -> Result<Document> {
        let mut folded = Vec::with_capacity(document.len());
        for (index, element) in document.iter().enumerate() {
            let text = element
                .as_str()
                .ok_or(RecaseError::TypeMismatch { index })?;
            let mapped = match self {
                Transformation::Capitalise => text.to_uppercase(),
                Transformation::Decapitalise => text.to_lowercase(),
            };
            folded.push(Value::String(mapped));
        }
        Ok(Document::new(folded))
    }

    /// Canonical wire name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Capitalise => "CAPITALISE",
            Transformation::Decapitalise => "DECAPITALISE",
        }
    }
}

impl FromStr for Transformation {
    type Err = RecaseError;

    fn from_str(s: &str) -> Result<Transformation> {
        match s.to_ascii_uppercase().as_str() {
            "CAPITALISE" => Ok(Transformation::Capitalise),
            "DECAPITALISE" => Ok(Transformation::Decapitalise),
            _ => Err(RecaseError::UnknownTransformation(s.to_string())),
        }
    }
}
