// 📤 Submission - gate and payload serialization
//
// The mocked "trip to the server": the roster is serialized as a JSON array
// of members in roster order and handed back to the host for display. A
// successful submission leaves the roster intact, so the household can be
// edited and submitted again.

use crate::roster::Roster;

/// Message shown when submission is attempted with an empty roster
pub const EMPTY_HOUSEHOLD_ERROR: &str = "You must have household members before submitting.";

// ============================================================================
// SUBMISSION ERROR
// ============================================================================

#[derive(Debug)]
pub enum SubmissionError {
    /// The roster has no members; submission is refused
    EmptyHousehold,
    /// The payload could not be encoded
    Serialization(serde_json::Error),
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::EmptyHousehold => write!(f, "{}", EMPTY_HOUSEHOLD_ERROR),
            SubmissionError::Serialization(err) => {
                write!(f, "Failed to serialize household: {}", err)
            }
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::EmptyHousehold => None,
            SubmissionError::Serialization(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Serialization(err)
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

/// Serialize the roster as the wire payload.
///
/// One JSON array, members in roster order; per member the business fields
/// come first (age, rel, smoker) followed by id and admission time as
/// debugging aids.
pub fn serialize_household(roster: &Roster) -> Result<String, serde_json::Error> {
    serde_json::to_string(roster.list())
}

/// Submit the household: refuse when empty, serialize otherwise.
///
/// The roster is deliberately not cleared on success - repeat submission
/// without re-adding members is supported behavior.
pub fn submit(roster: &Roster) -> Result<String, SubmissionError> {
    if roster.is_empty() {
        log::debug!("submission refused: household is empty");
        return Err(SubmissionError::EmptyHousehold);
    }

    let payload = serialize_household(roster)?;
    log::info!("submitted household of {} member(s)", roster.len());
    Ok(payload)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Member;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add(Member::new(45, "self", false));
        roster.add(Member::new(42, "spouse", true));
        roster.add(Member::new(9, "child", false));
        roster
    }

    #[test]
    fn test_submit_empty_roster_is_refused() {
        let roster = Roster::new();

        let err = submit(&roster).unwrap_err();
        assert!(matches!(err, SubmissionError::EmptyHousehold));
        assert_eq!(
            err.to_string(),
            "You must have household members before submitting."
        );
    }

    #[test]
    fn test_submit_leaves_roster_intact() {
        let roster = sample_roster();

        assert!(submit(&roster).is_ok());
        assert_eq!(roster.len(), 3);

        // Repeat submission works without re-adding anyone
        assert!(submit(&roster).is_ok());
    }

    #[test]
    fn test_payload_round_trip() {
        let roster = sample_roster();

        let payload = submit(&roster).unwrap();
        let parsed: Vec<Member> = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed.len(), roster.len());
        for (record, original) in parsed.iter().zip(roster.list()) {
            assert_eq!(record.age, original.age);
            assert_eq!(record.rel, original.rel);
            assert_eq!(record.smoker, original.smoker);
            assert_eq!(record.id, original.id);
        }
    }

    #[test]
    fn test_payload_preserves_roster_order() {
        let roster = sample_roster();

        let payload = serialize_household(&roster).unwrap();
        let parsed: Vec<Member> = serde_json::from_str(&payload).unwrap();

        let ages: Vec<u32> = parsed.iter().map(|m| m.age).collect();
        assert_eq!(ages, vec![45, 42, 9]);
    }

    #[test]
    fn test_payload_is_a_json_array() {
        let payload = serialize_household(&sample_roster()).unwrap();

        assert!(payload.starts_with('['));
        assert!(payload.ends_with(']'));
    }
}
