use crate::identity_document::{InvalidReason, ValidationResult};
use metrics::{counter, Counter};

const OUTCOME: &str = "outcome";

/// Counters for document validation outcomes, one per classification.
pub struct ValidationMetrics {
    pub valid: Counter,
    pub malformed: Counter,
    pub bad_check_letter: Counter,
}

impl ValidationMetrics {
    pub fn new() -> Self {
        ValidationMetrics {
            valid: counter!("document_validation.outcomes", OUTCOME => "valid"),
            malformed: counter!("document_validation.outcomes", OUTCOME => "malformed"),
            bad_check_letter: counter!(
                "document_validation.outcomes",
                OUTCOME => "bad_check_letter"
            ),
        }
    }

    pub fn record(&self, result: &ValidationResult) {
        match result {
            ValidationResult::Valid { .. } => self.valid.increment(1),
            ValidationResult::Invalid {
                reason: InvalidReason::Malformed,
            } => self.malformed.increment(1),
            ValidationResult::Invalid {
                reason: InvalidReason::BadCheckLetter,
            } => self.bad_check_letter.increment(1),
        }
    }
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        ValidationMetrics::new()
    }
}
