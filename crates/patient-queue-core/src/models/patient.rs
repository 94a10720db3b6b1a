//! Patient models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest priority that classifies as an emergency under the default triage scale.
pub const DEFAULT_EMERGENCY_THRESHOLD: i64 = 4;

/// Lowest priority on the default triage scale.
pub const DEFAULT_MIN_PRIORITY: i64 = 0;

/// Which of the two queues a patient belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// From the scale minimum up to, not including, the emergency
    /// threshold. Served in arrival order.
    Normal,
    /// At or above the emergency threshold, or off the bottom of the scale.
    /// Served by descending priority.
    Emergency,
}

impl QueueKind {
    /// Classify a priority on the default scale.
    pub fn classify(priority: i64) -> Self {
        Self::classify_on_scale(priority, DEFAULT_MIN_PRIORITY, DEFAULT_EMERGENCY_THRESHOLD)
    }

    /// Normal only for `min_priority <= priority < threshold`; anything else,
    /// including values below the scale, is an emergency.
    pub fn classify_on_scale(priority: i64, min_priority: i64, threshold: i64) -> Self {
        if (min_priority..threshold).contains(&priority) {
            QueueKind::Normal
        } else {
            QueueKind::Emergency
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueueKind::Normal => "Normal",
            QueueKind::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An admitted patient. Immutable once enqueued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Caller-assigned ID (not checked for uniqueness)
    pub id: i64,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: i64,
    /// Presenting complaint, free text
    pub disease: String,
    /// Triage priority, 0-10 on the default scale
    pub priority: i64,
    /// Admission timestamp
    pub admitted_at: String,
}

impl Patient {
    /// Create a patient stamped with the current time.
    pub fn new(id: i64, name: String, age: i64, disease: String, priority: i64) -> Self {
        Self {
            id,
            name,
            age,
            disease,
            priority,
            admitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Case-insensitive, whitespace-trimmed exact name match.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.trim().to_lowercase() == query.trim().to_lowercase()
    }

    /// One-line queue board entry.
    pub fn display_line(&self) -> String {
        format!(
            "**{}** | ID: {} | Age: {} | Disease: {} | Priority: {}",
            self.name, self.id, self.age, self.disease, self.priority
        )
    }

    /// Key/value card shown after a successful search.
    pub fn summary(&self, kind: QueueKind) -> String {
        format!(
            "ID: {}\nName: {}\nAge: {}\nDisease: {}\nPriority: {}\nType: {}",
            self.id, self.name, self.age, self.disease, self.priority, kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(QueueKind::classify(0), QueueKind::Normal);
        assert_eq!(QueueKind::classify(3), QueueKind::Normal);
        assert_eq!(QueueKind::classify(4), QueueKind::Emergency);
        assert_eq!(QueueKind::classify(10), QueueKind::Emergency);
        // Out of range values fall on whichever side of the threshold they land
        assert_eq!(QueueKind::classify(42), QueueKind::Emergency);
        assert_eq!(QueueKind::classify(-1), QueueKind::Emergency);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(QueueKind::classify_on_scale(4, 0, 6), QueueKind::Normal);
        assert_eq!(QueueKind::classify_on_scale(6, 0, 6), QueueKind::Emergency);
        assert_eq!(QueueKind::classify_on_scale(1, 2, 6), QueueKind::Emergency);
    }

    #[test]
    fn test_matches_name() {
        let patient = Patient::new(1, "Alice".into(), 30, "Flu".into(), 2);
        assert!(patient.matches_name(" alice "));
        assert!(patient.matches_name("ALICE"));
        assert!(!patient.matches_name("Ali"));
    }

    #[test]
    fn test_display_line() {
        let patient = Patient::new(2, "Bob".into(), 40, "Burn".into(), 7);
        assert_eq!(
            patient.display_line(),
            "**Bob** | ID: 2 | Age: 40 | Disease: Burn | Priority: 7"
        );
    }

    #[test]
    fn test_summary_includes_type() {
        let patient = Patient::new(2, "Bob".into(), 40, "Burn".into(), 7);
        let summary = patient.summary(QueueKind::Emergency);
        assert!(summary.contains("Name: Bob"));
        assert!(summary.ends_with("Type: Emergency"));
    }
}
