//! Doctor entity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A doctor row as stored in the database.
///
/// `id`, `created_at` and `updated_at` are always assigned by the storage
/// backend; callers never construct them directly except in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Database-generated identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Medical specialty.
    pub specialty: String,
    /// Contact email, unique across all doctors.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Whether the doctor is currently active.
    pub is_active: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last modified.
    pub updated_at: DateTime<Utc>,
}

/// A validated payload for creating a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    /// Stored as `true` when absent.
    pub is_active: Option<bool>,
}

impl NewDoctor {
    /// Returns the effective `is_active` value for insertion.
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// A validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorChanges {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}

impl DoctorChanges {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Returns the number of fields that will be written.
    pub fn field_count(&self) -> usize {
        [
            self.name.is_some(),
            self.specialty.is_some(),
            self.email.is_some(),
            self.phone.is_some(),
            self.is_active.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_doctor_defaults_active() {
        let doctor = NewDoctor {
            name: "Ada Lovelace".to_string(),
            specialty: "Cardiology".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            is_active: None,
        };
        assert!(doctor.is_active());

        let inactive = NewDoctor {
            is_active: Some(false),
            ..doctor
        };
        assert!(!inactive.is_active());
    }

    #[test]
    fn test_changes_field_count() {
        let changes = DoctorChanges::default();
        assert!(changes.is_empty());

        let changes = DoctorChanges {
            phone: Some("555-0199".to_string()),
            is_active: Some(false),
            ..Default::default()
        };
        assert!(!changes.is_empty());
        assert_eq!(changes.field_count(), 2);
    }

    #[test]
    fn test_doctor_serializes_rfc3339_timestamps() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let doctor = Doctor {
            id: 1,
            name: "Ada Lovelace".to_string(),
            specialty: "Cardiology".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            is_active: true,
            created_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_value(&doctor).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["is_active"], true);
        assert_eq!(json["created_at"], "2024-05-01T10:00:00Z");
    }
}
