//! Search and removal result models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::patient::{Patient, QueueKind};

/// Field to search on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Exact integer ID
    ById,
    /// Case-insensitive, trimmed exact name
    ByName,
}

impl FromStr for SearchCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SearchCriterion::ById),
            "name" => Ok(SearchCriterion::ByName),
            other => Err(format!("unknown search criterion: {}", other)),
        }
    }
}

/// A patient together with the queue it was taken from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriagedPatient {
    pub patient: Patient,
    pub kind: QueueKind,
}

impl TriagedPatient {
    /// Message shown after treatment.
    pub fn treated_message(&self) -> String {
        format!(
            "Treated {} Patient: {} (ID: {})",
            self.kind, self.patient.name, self.patient.id
        )
    }
}

/// Outcome of a removal by ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Removed {
    /// The removed patient
    pub patient: Patient,
    /// Queue it was removed from
    pub queue: QueueKind,
}

impl Removed {
    pub fn message(&self) -> String {
        format!(
            "Removed (dequeued) {} Patient with ID {}",
            self.queue, self.patient.id
        )
    }
}
