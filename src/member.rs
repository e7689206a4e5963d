// 👤 Member Entity - Stable identity with value fields
//
// "Member name is a VALUE, Member UUID is IDENTITY (never changes)"
//
// A Member only ever exists after its candidate form values passed
// validation. The id is assigned once at admission, is never reused
// (even after removal), and carries no business meaning - it exists
// for lookups, removal, and debugging the submitted payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// MEMBER ENTITY
// ============================================================================

/// One admitted household entry.
///
/// Field order matters for the serialized payload: age, relationship and
/// smoker flag first (the business data), then the bookkeeping fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Age in whole years, admitted only when greater than zero
    pub age: u32,

    /// Relationship to the applicant (one of the catalog values)
    pub rel: String,

    /// Smoker flag, false when the form leaves it unset
    #[serde(default)]
    pub smoker: bool,

    /// Stable identity (UUID) - NEVER changes, never reused
    pub id: String,

    /// When this member was admitted to the household
    pub added_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with a fresh UUID identity.
    ///
    /// Callers are expected to have validated the fields already; the
    /// constructor does not re-check them.
    pub fn new(age: u32, rel: impl Into<String>, smoker: bool) -> Self {
        Member {
            age,
            rel: rel.into(),
            smoker,
            id: uuid::Uuid::new_v4().to_string(),
            added_at: Utc::now(),
        }
    }
}

impl fmt::Display for Member {
    /// Human-readable roster line. The UUID is deliberately left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Age: {} - Relationship: {} - Smoker: {}",
            self.age, self.rel, self.smoker
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new(30, "self", false);

        assert_eq!(member.age, 30);
        assert_eq!(member.rel, "self");
        assert!(!member.smoker);
        assert!(!member.id.is_empty());
    }

    #[test]
    fn test_member_ids_are_unique() {
        let a = Member::new(30, "self", false);
        let b = Member::new(30, "self", false);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_member_display_line() {
        let member = Member::new(30, "self", false);
        let line = member.to_string();

        assert_eq!(line, "Age: 30 - Relationship: self - Smoker: false");
        assert!(
            !line.contains(&member.id),
            "display line should not leak the UUID"
        );
    }

    #[test]
    fn test_member_serialization_field_order() {
        let member = Member::new(42, "spouse", true);
        let json = serde_json::to_string(&member).unwrap();

        let age_pos = json.find("\"age\"").unwrap();
        let rel_pos = json.find("\"rel\"").unwrap();
        let smoker_pos = json.find("\"smoker\"").unwrap();
        let id_pos = json.find("\"id\"").unwrap();

        assert!(age_pos < rel_pos);
        assert!(rel_pos < smoker_pos);
        assert!(smoker_pos < id_pos);
    }

    #[test]
    fn test_member_smoker_defaults_to_false_on_parse() {
        let parsed: Member = serde_json::from_str(
            r#"{"age":5,"rel":"child","id":"abc","added_at":"2024-01-15T10:30:00Z"}"#,
        )
        .unwrap();

        assert!(!parsed.smoker);
    }
}
