// 🏠 Household Builder - the form widget core
//
// Owns the roster and the validator and implements the two cycles the form
// goes through:
//
//   per candidate:  Editing -> Validating -> Rejected | Accepted -> Editing
//   per household:  Building -> Submitting -> Building (roster intact)
//
// The host UI holds exactly one of these, forwards user events into it and
// re-renders from `members()` afterwards. There is no global state: whoever
// owns the builder owns the household.

use crate::member::Member;
use crate::relationships::RelationshipCatalog;
use crate::roster::Roster;
use crate::submission::{self, SubmissionError};
use crate::validation::{Candidate, CandidateValidator, ValidationError};

// ============================================================================
// HOUSEHOLD BUILDER
// ============================================================================

pub struct HouseholdBuilder {
    validator: CandidateValidator,
    roster: Roster,
}

impl HouseholdBuilder {
    /// Create a builder with a host-supplied relationship catalog
    pub fn new(catalog: RelationshipCatalog) -> Self {
        HouseholdBuilder {
            validator: CandidateValidator::new(catalog),
            roster: Roster::new(),
        }
    }

    /// Create a builder with the standard relationship options
    pub fn standard() -> Self {
        Self::new(RelationshipCatalog::standard())
    }

    pub fn catalog(&self) -> &RelationshipCatalog {
        self.validator.catalog()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current members in addition order
    pub fn members(&self) -> &[Member] {
        self.roster.list()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Validate a candidate and admit it on success.
    ///
    /// Returns the new member's id, or every rule violation at once. On
    /// rejection the roster is untouched and the form can retry immediately.
    pub fn add_candidate(&mut self, candidate: &Candidate) -> Result<String, Vec<ValidationError>> {
        let valid = match self.validator.check(candidate) {
            Ok(valid) => valid,
            Err(errors) => {
                log::debug!(
                    "rejected candidate (age={:?}, rel={:?}): {} violation(s)",
                    candidate.age,
                    candidate.rel,
                    errors.len()
                );
                return Err(errors);
            }
        };

        let member = Member::new(valid.age, valid.rel, valid.smoker);
        let id = member.id.clone();
        log::info!("admitted member {} ({})", id, member);
        self.roster.add(member);
        Ok(id)
    }

    /// Remove a member by id; unknown ids are a harmless no-op
    pub fn remove_member(&mut self, id: &str) -> bool {
        let removed = self.roster.remove_by_id(id);
        if removed {
            log::info!("removed member {}", id);
        } else {
            log::debug!("ignored removal of unknown member id {}", id);
        }
        removed
    }

    /// Submit the household; see `submission::submit`
    pub fn submit(&self) -> Result<String, SubmissionError> {
        submission::submit(&self.roster)
    }
}

impl Default for HouseholdBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// TESTS
// ============================================================================
