//! The patient queue service.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::{QueueConfig, QueueError, QueueResult};
use crate::export::QueueSnapshot;
use crate::models::{
    parse_int_field, Admission, AdmissionForm, Patient, QueueKind, Removed, SearchCriterion,
    TriagedPatient,
};

/// Owns the normal and emergency queues for one session.
///
/// Not internally synchronized. Hosts serving several clients from one
/// instance must serialize every call behind a single lock.
#[derive(Debug, Clone, Default)]
pub struct PatientQueueService {
    config: QueueConfig,
    /// Arrival order
    normal: VecDeque<Patient>,
    /// Descending priority, arrival order among equals
    emergency: VecDeque<Patient>,
}

impl PatientQueueService {
    /// Create an empty service on the default triage scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty service with a validated config.
    pub fn with_config(config: QueueConfig) -> QueueResult<Self> {
        config.validate()?;
        Ok(Self::with_validated_config(config))
    }

    pub(crate) fn with_validated_config(config: QueueConfig) -> Self {
        Self {
            config,
            normal: VecDeque::new(),
            emergency: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Admit a patient into the queue its priority selects.
    ///
    /// Emergency patients go in front of the first entry with strictly lower
    /// priority, so equal priorities keep arrival order.
    pub fn admit(&mut self, admission: Admission) -> QueueResult<QueueKind> {
        if let Err(e) = self.config.check_priority(admission.priority) {
            warn!(patient_id = admission.id, priority = admission.priority, "admission rejected");
            return Err(e);
        }

        let patient = admission.into_patient();
        let kind = self.config.classify(patient.priority);

        match kind {
            QueueKind::Normal => {
                debug!(patient_id = patient.id, position = self.normal.len(), queue = "normal", "admitted");
                self.normal.push_back(patient);
            }
            QueueKind::Emergency => {
                let position = self
                    .emergency
                    .iter()
                    .position(|queued| queued.priority < patient.priority)
                    .unwrap_or(self.emergency.len());
                debug!(
                    patient_id = patient.id,
                    priority = patient.priority,
                    position,
                    queue = "emergency",
                    "admitted"
                );
                self.emergency.insert(position, patient);
            }
        }

        Ok(kind)
    }

    /// Parse a raw form and admit it. Nothing is enqueued if parsing fails.
    pub fn admit_form(&mut self, form: &AdmissionForm) -> QueueResult<QueueKind> {
        let admission = form.parse().inspect_err(|e| {
            warn!(error = %e, "admission form rejected");
        })?;
        self.admit(admission)
    }

    /// Remove and return the next patient to treat.
    ///
    /// Any emergency patient goes before every normal patient, however long
    /// the normal patients have waited.
    pub fn treat_next(&mut self) -> QueueResult<TriagedPatient> {
        let treated = if let Some(patient) = self.emergency.pop_front() {
            TriagedPatient {
                patient,
                kind: QueueKind::Emergency,
            }
        } else if let Some(patient) = self.normal.pop_front() {
            TriagedPatient {
                patient,
                kind: QueueKind::Normal,
            }
        } else {
            debug!("treat_next on empty queues");
            return Err(QueueError::EmptyQueues);
        };

        info!(
            patient_id = treated.patient.id,
            queue = treated.kind.as_str(),
            "patient treated"
        );
        Ok(treated)
    }

    /// Remove the first patient with `id`, scanning normal then emergency.
    ///
    /// Only one patient is removed when IDs are duplicated.
    pub fn remove_by_id(&mut self, id: i64) -> QueueResult<Removed> {
        let lanes = [
            (QueueKind::Normal, &mut self.normal),
            (QueueKind::Emergency, &mut self.emergency),
        ];

        for (queue, lane) in lanes {
            if let Some(index) = lane.iter().position(|p| p.id == id) {
                if let Some(patient) = lane.remove(index) {
                    info!(patient_id = id, queue = queue.as_str(), "patient removed");
                    return Ok(Removed { patient, queue });
                }
            }
        }

        Err(QueueError::NotFound(format!("patient ID {}", id)))
    }

    /// Remove by an ID typed into a text field.
    pub fn remove_by_id_str(&mut self, value: &str) -> QueueResult<Removed> {
        if value.trim().is_empty() {
            return Err(QueueError::InvalidInput("enter an ID to dequeue".into()));
        }
        let id = parse_int_field("id", value)?;
        self.remove_by_id(id)
    }

    /// Find the first match, scanning emergency then normal.
    pub fn find(&self, criterion: SearchCriterion, value: &str) -> QueueResult<TriagedPatient> {
        if value.trim().is_empty() {
            return Err(QueueError::InvalidInput("search value is empty".into()));
        }

        let found = match criterion {
            SearchCriterion::ById => {
                let id: i64 = value.trim().parse().map_err(|_| {
                    QueueError::InvalidInput(format!("{:?} is not a valid ID", value))
                })?;
                self.scan_search_order().find(|(_, p)| p.id == id)
            }
            SearchCriterion::ByName => self.scan_search_order().find(|(_, p)| p.matches_name(value)),
        };

        found
            .map(|(kind, patient)| TriagedPatient {
                patient: patient.clone(),
                kind,
            })
            .ok_or_else(|| QueueError::NotFound(value.trim().to_string()))
    }

    fn scan_search_order(&self) -> impl Iterator<Item = (QueueKind, &Patient)> {
        self.emergency
            .iter()
            .map(|p| (QueueKind::Emergency, p))
            .chain(self.normal.iter().map(|p| (QueueKind::Normal, p)))
    }

    /// Normal queue in arrival order.
    pub fn list_normal(&self) -> Vec<Patient> {
        self.normal.iter().cloned().collect()
    }

    /// Emergency queue in treatment order.
    pub fn list_emergency(&self) -> Vec<Patient> {
        self.emergency.iter().cloned().collect()
    }

    /// Capture both queues for display or export.
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot::new(self.list_emergency(), self.list_normal())
    }

    pub fn len(&self) -> usize {
        self.normal.len() + self.emergency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.emergency.is_empty()
    }

    /// Drop every queued patient, keeping the config.
    pub fn clear(&mut self) {
        info!(discarded = self.len(), "queues cleared");
        self.normal.clear();
        self.emergency.clear();
    }
}
