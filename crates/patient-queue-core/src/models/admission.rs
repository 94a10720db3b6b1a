//! Admission requests, typed and raw.

use serde::{Deserialize, Serialize};

use super::patient::Patient;
use crate::queue::{QueueError, QueueResult};

/// A validated admission request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Admission {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub disease: String,
    pub priority: i64,
}

impl Admission {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i64,
        disease: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            disease: disease.into(),
            priority,
        }
    }

    /// Turn the request into a patient record.
    pub fn into_patient(self) -> Patient {
        Patient::new(self.id, self.name, self.age, self.disease, self.priority)
    }
}

/// Raw admission form fields, as submitted by a UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdmissionForm {
    pub id: String,
    pub name: String,
    pub age: String,
    pub disease: String,
    pub priority: String,
}

impl AdmissionForm {
    /// Parse numeric fields. Name and disease pass through verbatim.
    pub fn parse(&self) -> QueueResult<Admission> {
        Ok(Admission {
            id: parse_int_field("id", &self.id)?,
            name: self.name.clone(),
            age: parse_int_field("age", &self.age)?,
            disease: self.disease.clone(),
            priority: parse_int_field("priority", &self.priority)?,
        })
    }
}

/// Parse a trimmed integer form field.
pub fn parse_int_field(field: &str, value: &str) -> QueueResult<i64> {
    value.trim().parse::<i64>().map_err(|_| QueueError::InputError {
        field: field.to_string(),
        value: value.to_string(),
    })
}
