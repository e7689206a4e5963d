// Household Builder - Core Library
// Exposes the roster, validation and submission modules for the host UI and tests

pub mod builder;
pub mod member;
pub mod relationships;
pub mod roster;
pub mod submission;
pub mod validation;

// Re-export commonly used types
pub use builder::HouseholdBuilder;
pub use member::Member;
pub use relationships::RelationshipCatalog;
pub use roster::Roster;
pub use submission::{serialize_household, submit, SubmissionError, EMPTY_HOUSEHOLD_ERROR};
pub use validation::{
    parse_age, Candidate, CandidateValidator, ValidCandidate, ValidationError, ValidationResult,
    AGE_ERROR,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
