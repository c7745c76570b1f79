//! Test infrastructure for the persistence layer.

#![allow(dead_code)]

use clinic_persistence::types::NewDoctor;

/// A doctor fixture for testing.
#[derive(Debug, Clone)]
pub struct DoctorFixture {
    /// Doctor name.
    pub name: String,
    /// Medical specialty.
    pub specialty: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Explicit active flag, if any.
    pub is_active: Option<bool>,
}

impl DoctorFixture {
    /// Creates a fixture with an email derived from the name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let email = format!("{}@clinic.example", name.to_lowercase().replace(' ', "."));
        Self {
            name,
            specialty: "General Practice".to_string(),
            email,
            phone: "555-0100".to_string(),
            is_active: None,
        }
    }

    /// Sets the specialty.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Marks the doctor inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = Some(false);
        self
    }

    /// Builds the create payload.
    pub fn build(self) -> NewDoctor {
        NewDoctor {
            name: self.name,
            specialty: self.specialty,
            email: self.email,
            phone: self.phone,
            is_active: self.is_active,
        }
    }
}
