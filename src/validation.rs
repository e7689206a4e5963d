// 📐 Candidate Validation - business rules for admission
//
// Validates raw form values before a Member may be admitted. Every rule is
// checked independently and all violations are reported together, so the
// user sees the full problem list in a single pass. Invalid input is an
// expected user-facing condition, signaled through the returned error list
// and never through a panic.

use crate::relationships::RelationshipCatalog;
use serde::{Deserialize, Serialize};

/// Message for any age that is missing, unparseable, zero or negative
pub const AGE_ERROR: &str = "Age is incorrect - must be a number greater than zero.";

// ============================================================================
// CANDIDATE
// ============================================================================

/// Raw field values proposed for admission, exactly as the form holds them.
///
/// Age stays text here: parsing it is the validator's job, and unparseable
/// text must produce the same error as a non-positive number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub age: String,
    pub rel: String,
    #[serde(default)]
    pub smoker: bool,
}

impl Candidate {
    pub fn new(age: impl Into<String>, rel: impl Into<String>, smoker: bool) -> Self {
        Candidate {
            age: age.into(),
            rel: rel.into(),
            smoker,
        }
    }
}

/// Field values that passed every rule, ready to become a Member
#[derive(Debug, Clone)]
pub struct ValidCandidate {
    pub age: u32,
    pub rel: String,
    pub smoker: bool,
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    // The message alone is what the user sees; `field` lets a host
    // highlight the offending input.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// AGE PARSING
// ============================================================================

/// Explicit "is this a valid age" check.
///
/// Accepts whole numbers greater than zero, with surrounding whitespace
/// tolerated. Everything else (empty input, text, zero, negatives) is
/// rejected the same way.
pub fn parse_age(raw: &str) -> Option<u32> {
    match raw.trim().parse::<i64>() {
        Ok(age) if age > 0 && age <= i64::from(u32::MAX) => Some(age as u32),
        _ => None,
    }
}

// ============================================================================
// CANDIDATE VALIDATOR
// ============================================================================

/// Pure, side-effect-free validator for candidate entries.
///
/// The catalog of allowed relationships comes from the host configuration
/// and is the only state the validator carries.
pub struct CandidateValidator {
    catalog: RelationshipCatalog,
}

impl CandidateValidator {
    pub fn new(catalog: RelationshipCatalog) -> Self {
        CandidateValidator { catalog }
    }

    pub fn catalog(&self) -> &RelationshipCatalog {
        &self.catalog
    }

    /// Check a candidate and return its parsed, admissible values.
    ///
    /// All rule violations are collected; a candidate with a bad age AND a
    /// bad relationship gets both messages back.
    pub fn check(&self, candidate: &Candidate) -> Result<ValidCandidate, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let age = parse_age(&candidate.age);
        if age.is_none() {
            errors.push(ValidationError::new("age", AGE_ERROR));
        }

        if !self.catalog.contains(&candidate.rel) {
            errors.push(ValidationError::new(
                "rel",
                format!(
                    "Relationship value is incorrect - please choose from {}",
                    self.catalog.join()
                ),
            ));
        }

        match (age, errors.is_empty()) {
            (Some(age), true) => Ok(ValidCandidate {
                age,
                rel: candidate.rel.clone(),
                smoker: candidate.smoker,
            }),
            _ => Err(errors),
        }
    }

    /// Convenience form of `check` when only pass/fail matters
    pub fn validate(&self, candidate: &Candidate) -> ValidationResult {
        self.check(candidate).map(|_| ())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> CandidateValidator {
        CandidateValidator::new(RelationshipCatalog::standard())
    }

    #[test]
    fn test_valid_candidate_passes() {
        let result = validator().check(&Candidate::new("30", "self", false));

        assert!(result.is_ok());
        let valid = result.unwrap();
        assert_eq!(valid.age, 30);
        assert_eq!(valid.rel, "self");
        assert!(!valid.smoker);
    }

    #[test]
    fn test_age_zero_is_rejected() {
        // The message text is authoritative: "greater than zero"
        let result = validator().validate(&Candidate::new("0", "self", false));

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "age");
        assert!(errors[0].message.contains("greater than zero"));
    }

    #[test]
    fn test_negative_age_is_rejected() {
        let result = validator().validate(&Candidate::new("-1", "self", false));

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, AGE_ERROR);
    }

    #[test]
    fn test_non_numeric_age_gets_same_message_as_negative() {
        let v = validator();

        let text = v
            .validate(&Candidate::new("abc", "self", false))
            .unwrap_err();
        let negative = v
            .validate(&Candidate::new("-5", "self", false))
            .unwrap_err();

        assert_eq!(text[0].message, negative[0].message);
    }

    #[test]
    fn test_empty_age_is_rejected() {
        let result = validator().validate(&Candidate::new("", "self", false));

        assert!(result.is_err());
    }

    #[test]
    fn test_age_with_whitespace_is_accepted() {
        assert!(validator()
            .validate(&Candidate::new(" 30 ", "self", false))
            .is_ok());
    }

    #[test]
    fn test_unknown_relationship_names_the_catalog() {
        let result = validator().validate(&Candidate::new("30", "roommate", false));

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "rel");
        assert!(errors[0]
            .message
            .contains("self, spouse, child, parent, grandparent, other"));
    }

    #[test]
    fn test_empty_relationship_is_rejected() {
        // The placeholder option is filtered out of the catalog, so an
        // untouched select fails validation
        let result = validator().validate(&Candidate::new("30", "", false));

        assert!(result.is_err());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let result = validator().validate(&Candidate::new("-1", "roommate", false));

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "age"));
        assert!(errors.iter().any(|e| e.field == "rel"));
    }

    #[test]
    fn test_error_display_is_the_plain_message() {
        let errors = validator()
            .validate(&Candidate::new("x", "self", false))
            .unwrap_err();

        assert_eq!(errors[0].to_string(), AGE_ERROR);
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30"), Some(30));
        assert_eq!(parse_age(" 1 "), Some(1));
        assert_eq!(parse_age("0"), None);
        assert_eq!(parse_age("-3"), None);
        assert_eq!(parse_age("3.5"), None);
        assert_eq!(parse_age("30abc"), None);
        assert_eq!(parse_age(""), None);
    }

    #[test]
    fn test_smoker_flag_never_fails_validation() {
        let v = validator();

        assert!(v.validate(&Candidate::new("30", "self", true)).is_ok());
        assert!(v.validate(&Candidate::new("30", "self", false)).is_ok());
    }
}
