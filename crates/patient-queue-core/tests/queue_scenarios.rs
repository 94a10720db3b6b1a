//! End-to-end queue scenarios.

use patient_queue_core::models::{Admission, QueueKind, SearchCriterion};
use patient_queue_core::queue::{PatientQueueService, QueueError};

fn names(patients: &[patient_queue_core::Patient]) -> Vec<String> {
    patients.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_admit_then_treat_emergency() {
    let mut service = PatientQueueService::new();

    service.admit(Admission::new(1, "A", 30, "Flu", 2)).unwrap();
    assert_eq!(names(&service.list_normal()), vec!["A"]);

    service.admit(Admission::new(2, "B", 40, "Burn", 7)).unwrap();
    assert_eq!(names(&service.list_emergency()), vec!["B"]);

    let treated = service.treat_next().unwrap();
    assert_eq!(treated.patient.name, "B");
    assert_eq!(treated.kind, QueueKind::Emergency);
    assert!(service.list_emergency().is_empty());
    assert_eq!(names(&service.list_normal()), vec!["A"]);
}

#[test]
fn test_higher_priority_jumps_ahead() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(3, "C", 50, "X", 7)).unwrap();
    service.admit(Admission::new(4, "D", 60, "Y", 9)).unwrap();

    assert_eq!(names(&service.list_emergency()), vec!["D", "C"]);
}

#[test]
fn test_equal_priority_keeps_arrival_order() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(5, "E", 20, "Z", 5)).unwrap();
    service.admit(Admission::new(6, "F", 25, "W", 5)).unwrap();

    assert_eq!(names(&service.list_emergency()), vec!["E", "F"]);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(1, "A", 30, "Flu", 2)).unwrap();
    service.admit(Admission::new(2, "B", 40, "Burn", 7)).unwrap();

    let before = (service.list_normal(), service.list_emergency());
    assert!(matches!(service.remove_by_id(999), Err(QueueError::NotFound(_))));
    assert_eq!((service.list_normal(), service.list_emergency()), before);
}

#[test]
fn test_treat_on_empty_queues() {
    let mut service = PatientQueueService::new();
    assert!(matches!(service.treat_next(), Err(QueueError::EmptyQueues)));
    assert!(service.is_empty());
}

#[test]
fn test_find_name_ignores_case_and_whitespace() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(1, "Alice", 30, "Flu", 2)).unwrap();

    let found = service.find(SearchCriterion::ByName, " alice ").unwrap();
    assert_eq!(found.patient.id, 1);
    assert_eq!(found.kind, QueueKind::Normal);
}

#[test]
fn test_treatment_drains_emergency_before_normal() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(1, "Early", 30, "Cold", 3)).unwrap();
    service.admit(Admission::new(2, "Mid", 30, "Cut", 4)).unwrap();
    service.admit(Admission::new(3, "Late", 30, "Cough", 0)).unwrap();
    service.admit(Admission::new(4, "Critical", 30, "Arrest", 10)).unwrap();

    let order: Vec<i64> = std::iter::from_fn(|| service.treat_next().ok())
        .map(|t| t.patient.id)
        .collect();
    assert_eq!(order, vec![4, 2, 1, 3]);
}

#[test]
fn test_find_does_not_mutate() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(1, "Alice", 30, "Flu", 6)).unwrap();

    service.find(SearchCriterion::ById, "1").unwrap();
    assert!(service.find(SearchCriterion::ByName, "Bob").is_err());
    assert_eq!(service.len(), 1);
}

#[test]
fn test_snapshot_reflects_state() {
    let mut service = PatientQueueService::new();
    service.admit(Admission::new(1, "A", 30, "Flu", 2)).unwrap();
    service.admit(Admission::new(2, "B", 40, "Burn", 7)).unwrap();

    let snapshot = service.snapshot();
    assert_eq!(snapshot.total(), 2);
    assert_eq!(snapshot.emergency[0].id, 2);
    assert_eq!(snapshot.normal[0].id, 1);
}
