//! In-memory document model

use serde_json::Value;

/// Ordered sequence of decoded elements.
///
/// The decoder does not validate element types; a document may hold
/// non-string scalars, which the transformer rejects when it reaches them.
/// YAML input is decoded into [`serde_json::Value`] as the neutral
/// in-memory representation, so both formats share this type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document(Vec<Value>);

impl Document {
    /// Wrap already-decoded values in document order.
    pub fn new(elements: Vec<Value>) -> Self {
        Document(elements)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Elements in document order.
    pub fn elements(&self) -> &[Value] {
        &self.0
    }

    /// Iterate elements in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl From<Vec<String>> for Document {
    fn from(strings: Vec<String>) -> Self {
        Document(strings.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<&str>> for Document {
    fn from(strings: Vec<&str>) -> Self {
        Document(strings.into_iter().map(|s| Value::String(s.into())).collect())
    }
}
