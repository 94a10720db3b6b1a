//! Patient Queue Core Library
//!
//! Two-tier treatment queue for a triage desk.
//!
//! # Architecture
//!
//! ```text
//!        UI form (host app)
//!               │  primitive values
//!               ▼
//!     ┌───────────────────────┐
//!     │   PatientQueueCore    │  FFI object, one lock per call
//!     └──────────┬────────────┘
//!                ▼
//!     ┌───────────────────────┐
//!     │  PatientQueueService  │
//!     │  priority 0-3  → normal queue     (FIFO)
//!     │  priority 4-10 → emergency queue  (highest first)
//!     └──────────┬────────────┘
//!                ▼
//!         QueueSnapshot → board / JSON / CSV
//! ```
//!
//! # Core Principle
//!
//! **Urgency overrides wait time.** Every emergency patient is treated before
//! any normal patient.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, QueueKind, Admission, etc.)
//! - [`queue`]: The queue service, configuration and session registry
//! - [`export`]: Queue snapshots for display and export

pub mod export;
pub mod models;
pub mod queue;

// Re-export commonly used types
pub use export::QueueSnapshot;
pub use models::{
    Admission, AdmissionForm, Patient, QueueKind, Removed, SearchCriterion, TriagedPatient,
};
pub use queue::{
    PatientQueueService, QueueConfig, QueueError, QueueResult, SessionId, SessionRegistry,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PatientQueueError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("No patients in queue")]
    EmptyQueues,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<QueueError> for PatientQueueError {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::InputError { .. } => PatientQueueError::InputError(e.to_string()),
            QueueError::EmptyQueues => PatientQueueError::EmptyQueues,
            QueueError::NotFound(what) => PatientQueueError::NotFound(what),
            QueueError::InvalidInput(msg) => PatientQueueError::InvalidInput(msg),
            QueueError::PriorityOutOfRange { .. } => PatientQueueError::InputError(e.to_string()),
            QueueError::InvalidConfig(msg) => PatientQueueError::InvalidConfig(msg),
            QueueError::Json(_) => PatientQueueError::InvalidConfig(e.to_string()),
            QueueError::UnknownSession(_) | QueueError::Io(_) => {
                PatientQueueError::Internal(e.to_string())
            }
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for PatientQueueError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PatientQueueError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create an empty queue on the default triage scale.
#[uniffi::export]
pub fn new_patient_queue() -> Arc<PatientQueueCore> {
    Arc::new(PatientQueueCore {
        service: Arc::new(Mutex::new(PatientQueueService::new())),
    })
}

/// Create an empty queue from a JSON `QueueConfig`.
#[uniffi::export]
pub fn new_patient_queue_with_config(
    config_json: String,
) -> Result<Arc<PatientQueueCore>, PatientQueueError> {
    let config = QueueConfig::from_json_str(&config_json)?;
    let service = PatientQueueService::with_config(config)?;
    Ok(Arc::new(PatientQueueCore {
        service: Arc::new(Mutex::new(service)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe queue wrapper for FFI. Each call holds the lock throughout.
#[derive(uniffi::Object)]
pub struct PatientQueueCore {
    service: Arc<Mutex<PatientQueueService>>,
}

#[uniffi::export]
impl PatientQueueCore {
    // =========================================================================
    // Admission
    // =========================================================================

    /// Admit a patient. Returns the queue it joined.
    pub fn admit(
        &self,
        id: i64,
        name: String,
        age: i64,
        disease: String,
        priority: i64,
    ) -> Result<String, PatientQueueError> {
        let mut service = self.service.lock()?;
        let kind = service.admit(Admission::new(id, name, age, disease, priority))?;
        Ok(kind.to_string())
    }

    /// Admit from raw form text; numeric fields are parsed here.
    pub fn admit_form(
        &self,
        id: String,
        name: String,
        age: String,
        disease: String,
        priority: String,
    ) -> Result<String, PatientQueueError> {
        let mut service = self.service.lock()?;
        let form = AdmissionForm {
            id,
            name,
            age,
            disease,
            priority,
        };
        let kind = service.admit_form(&form)?;
        Ok(kind.to_string())
    }

    // =========================================================================
    // Treatment and Removal
    // =========================================================================

    /// Treat the next patient.
    pub fn treat_next(&self) -> Result<FfiPatient, PatientQueueError> {
        let mut service = self.service.lock()?;
        Ok(service.treat_next()?.into())
    }

    /// Remove a patient by ID.
    pub fn remove_by_id(&self, id: i64) -> Result<FfiRemoved, PatientQueueError> {
        let mut service = self.service.lock()?;
        Ok(service.remove_by_id(id)?.into())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Find a patient by ID or name.
    pub fn find(
        &self,
        criterion: FfiSearchCriterion,
        value: String,
    ) -> Result<FfiPatient, PatientQueueError> {
        let service = self.service.lock()?;
        Ok(service.find(criterion.into(), &value)?.into())
    }

    /// Normal queue in arrival order.
    pub fn list_normal(&self) -> Result<Vec<FfiPatient>, PatientQueueError> {
        let service = self.service.lock()?;
        Ok(service
            .list_normal()
            .into_iter()
            .map(|p| FfiPatient::with_kind(p, QueueKind::Normal))
            .collect())
    }

    /// Emergency queue in treatment order.
    pub fn list_emergency(&self) -> Result<Vec<FfiPatient>, PatientQueueError> {
        let service = self.service.lock()?;
        Ok(service
            .list_emergency()
            .into_iter()
            .map(|p| FfiPatient::with_kind(p, QueueKind::Emergency))
            .collect())
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Export both queues as JSON.
    pub fn snapshot_json(&self) -> Result<String, PatientQueueError> {
        let service = self.service.lock()?;
        service
            .snapshot()
            .to_json()
            .map_err(|e| PatientQueueError::Internal(e.to_string()))
    }

    /// Export both queues as CSV.
    pub fn snapshot_csv(&self) -> Result<String, PatientQueueError> {
        let service = self.service.lock()?;
        Ok(service.snapshot().to_csv())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient, with its queue type.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub disease: String,
    pub priority: i64,
    pub admitted_at: String,
    pub kind: String,
}

impl FfiPatient {
    fn with_kind(patient: Patient, kind: QueueKind) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            age: patient.age,
            disease: patient.disease,
            priority: patient.priority,
            admitted_at: patient.admitted_at,
            kind: kind.to_string(),
        }
    }
}

impl From<TriagedPatient> for FfiPatient {
    fn from(triaged: TriagedPatient) -> Self {
        Self::with_kind(triaged.patient, triaged.kind)
    }
}

/// FFI-safe removal result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRemoved {
    pub patient: FfiPatient,
    pub queue: String,
}

impl From<Removed> for FfiRemoved {
    fn from(removed: Removed) -> Self {
        Self {
            queue: removed.queue.to_string(),
            patient: FfiPatient::with_kind(removed.patient, removed.queue),
        }
    }
}

/// FFI-safe search criterion.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiSearchCriterion {
    ById,
    ByName,
}

impl From<FfiSearchCriterion> for SearchCriterion {
    fn from(criterion: FfiSearchCriterion) -> Self {
        match criterion {
            FfiSearchCriterion::ById => SearchCriterion::ById,
            FfiSearchCriterion::ByName => SearchCriterion::ByName,
        }
    }
}
