use crate::identity_document::metrics::ValidationMetrics;
use crate::identity_document::{format, normalize, validate, ValidationResult};

/// Caller-owned state for a document-number input field.
///
/// The field stores only the normalized value; the hyphenated display form
/// and the validity classification are derived on demand, so the owning form
/// re-renders from a single source of truth instead of mirroring state per
/// keystroke. Both the profile editor and the contract form use this same
/// type, so the two screens cannot drift apart on validation behavior.
pub struct DocumentInput {
    value: String,
    metrics: ValidationMetrics,
}

impl DocumentInput {
    pub fn new() -> Self {
        DocumentInput {
            value: String::new(),
            metrics: ValidationMetrics::new(),
        }
    }

    /// Replace the field content with raw user input.
    pub fn set(&mut self, raw: &str) {
        self.value = normalize(raw);
    }

    /// The normalized value as typed so far.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Hyphenated display form of the current value.
    pub fn display(&self) -> String {
        format(&self.value)
    }

    /// Classify the current value, counting the outcome.
    pub fn validate(&self) -> ValidationResult {
        let result = validate(&self.value);
        self.metrics.record(&result);
        result
    }
}

impl Default for DocumentInput {
    fn default() -> Self {
        DocumentInput::new()
    }
}
