mod check_letter;
mod input;
mod metrics;

pub use input::DocumentInput;

use crate::identity_document::check_letter::{expected_check_letter, nie_leading_digit};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const DOCUMENT_LENGTH: usize = 9;
const NUMBER_LENGTH: usize = 8;

lazy_static! {
    static ref DNI_SHAPE: Regex = Regex::new("^[0-9]{8}[TRWAGMYFPDXBNJZSQVHLCKE]$").unwrap();
    static ref NIE_SHAPE: Regex = Regex::new("^[XYZ][0-9]{7}[TRWAGMYFPDXBNJZSQVHLCKE]$").unwrap();
}

/// Kind of Spanish identity document a string was classified as.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Dni,
    Nie,
}

/// Why a document number failed validation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// The string does not have the shape of a DNI or NIE.
    Malformed,
    /// The shape is right but the check letter does not match the number.
    BadCheckLetter,
}

/// Outcome of validating a normalized document number.
///
/// An invalid document is an expected, user-facing result (someone is still
/// typing), so it is a value here rather than an error.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid { document_type: DocumentType },
    Invalid { reason: InvalidReason },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }
}

/// Strip everything that is not an ASCII letter or digit and upper-case the
/// rest. Never truncates; truncation is a caller decision.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Classify a normalized document number as a valid DNI, a valid NIE, or
/// invalid.
///
/// Expects the output of [`normalize`] (upper-case, alphanumeric only).
/// Anything else, including the empty string, comes back as malformed; no
/// input panics.
pub fn validate(normalized: &str) -> ValidationResult {
    /*
     * DNI: 8 digits followed by a check letter.
     * NIE: X, Y or Z followed by 7 digits and a check letter.
     * The check letter is the document number modulo 23, used as an index
     * into CHECK_LETTER_TABLE. For a NIE the leading letter is replaced by
     * its digit (X->0, Y->1, Z->2) before taking the modulo.
     */
    if DNI_SHAPE.is_match(normalized) {
        let number: u32 = match normalized[..NUMBER_LENGTH].parse() {
            Ok(x) => x,
            Err(_) => return malformed(),
        };
        return check(normalized, number, DocumentType::Dni);
    }

    if NIE_SHAPE.is_match(normalized) {
        let mut digits = String::with_capacity(NUMBER_LENGTH);
        match normalized.chars().next().and_then(nie_leading_digit) {
            Some(digit) => digits.push(digit),
            None => return malformed(),
        }
        digits.push_str(&normalized[1..NUMBER_LENGTH]);

        let number: u32 = match digits.parse() {
            Ok(x) => x,
            Err(_) => return malformed(),
        };
        return check(normalized, number, DocumentType::Nie);
    }

    malformed()
}

/// Canonical display form: a hyphen between the 8-character body and the
/// check character, truncating anything past the check character. Purely
/// presentational; never consults validity, so a partially typed number
/// formats correctly.
pub fn format(normalized: &str) -> String {
    if normalized.chars().count() <= NUMBER_LENGTH {
        return normalized.to_string();
    }
    let body: String = normalized.chars().take(NUMBER_LENGTH).collect();
    let check: String = normalized
        .chars()
        .skip(NUMBER_LENGTH)
        .take(DOCUMENT_LENGTH - NUMBER_LENGTH)
        .collect();
    format!("{body}-{check}")
}

fn check(normalized: &str, number: u32, document_type: DocumentType) -> ValidationResult {
    if normalized.chars().nth(NUMBER_LENGTH) == Some(expected_check_letter(number)) {
        ValidationResult::Valid { document_type }
    } else {
        ValidationResult::Invalid {
            reason: InvalidReason::BadCheckLetter,
        }
    }
}

fn malformed() -> ValidationResult {
    ValidationResult::Invalid {
        reason: InvalidReason::Malformed,
    }
}
