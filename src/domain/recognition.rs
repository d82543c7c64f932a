//! Recognition records returned by the classifier.

use serde::Serialize;

/// One ranked classification result.
///
/// A recognition pairs a class with the confidence the model assigned to
/// it. The `id` is the class index rendered as a string, stable across
/// calls for a given model; the `label` comes from the label table or is
/// [`UNKNOWN_LABEL`](crate::domain::labels::UNKNOWN_LABEL) when the table
/// has no entry for the index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recognition {
    /// The class index as a string.
    pub id: String,
    /// The human-readable class name.
    pub label: String,
    /// The model's confidence in [0.0, 1.0].
    pub confidence: f32,
}

impl Recognition {
    /// Creates a recognition from a class index, label, and confidence.
    pub fn new(index: usize, label: impl Into<String>, confidence: f32) -> Self {
        Recognition {
            id: index.to_string(),
            label: label.into(),
            confidence,
        }
    }
}

impl std::fmt::Display for Recognition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {:.3}", self.id, self.label, self.confidence)
    }
}
