//! Queue board snapshots.

use serde::{Deserialize, Serialize};

use crate::models::{Patient, QueueKind};

/// Both queues as they stood at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueSnapshot {
    /// Capture timestamp
    pub exported_at: String,
    /// Emergency queue, treatment order
    pub emergency: Vec<Patient>,
    /// Normal queue, arrival order
    pub normal: Vec<Patient>,
}

impl QueueSnapshot {
    pub fn new(emergency: Vec<Patient>, normal: Vec<Patient>) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            emergency,
            normal,
        }
    }

    pub fn total(&self) -> usize {
        self.emergency.len() + self.normal.len()
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format, emergency rows first.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("queue,position,id,name,age,disease,priority\n");

        let rows = self
            .emergency
            .iter()
            .enumerate()
            .map(|(i, p)| (QueueKind::Emergency, i, p))
            .chain(
                self.normal
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (QueueKind::Normal, i, p)),
            );

        for (queue, position, patient) in rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                queue,
                position + 1,
                patient.id,
                escape_csv(&patient.name),
                patient.age,
                escape_csv(&patient.disease),
                patient.priority,
            ));
        }

        csv
    }

    /// Render the two-column queue board as text.
    pub fn render_board(&self) -> String {
        let mut out = String::new();

        out.push_str("Emergency Queue\n");
        render_lane(&mut out, &self.emergency, "No emergency patients.");

        out.push_str("\nNormal Queue\n");
        render_lane(&mut out, &self.normal, "No normal patients.");

        out
    }
}

fn render_lane(out: &mut String, patients: &[Patient], empty: &str) {
    if patients.is_empty() {
        out.push_str(empty);
        out.push('\n');
        return;
    }
    for patient in patients {
        out.push_str(&patient.display_line());
        out.push('\n');
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_snapshot() -> QueueSnapshot {
        QueueSnapshot::new(
            vec![
                Patient::new(4, "Dana".into(), 60, "Stroke".into(), 9),
                Patient::new(3, "Carl".into(), 50, "Burn, severe".into(), 7),
            ],
            vec![Patient::new(1, "Ann \"Annie\"".into(), 30, "Flu".into(), 2)],
        )
    }

    #[test]
    fn test_snapshot_json() {
        let json = make_snapshot().to_json().unwrap();
        assert!(json.contains("\"emergency\""));
        assert!(json.contains("Stroke"));

        let parsed: QueueSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total(), 3);
    }

    #[test]
    fn test_snapshot_csv() {
        let csv = make_snapshot().to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "queue,position,id,name,age,disease,priority");
        assert_eq!(lines[1], "Emergency,1,4,Dana,60,Stroke,9");
        assert_eq!(lines[2], "Emergency,2,3,Carl,50,\"Burn, severe\",7");
        assert_eq!(lines[3], "Normal,1,1,\"Ann \"\"Annie\"\"\",30,Flu,2");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_board() {
        let board = make_snapshot().render_board();
        assert!(board.contains("**Dana** | ID: 4 | Age: 60 | Disease: Stroke | Priority: 9"));
        assert!(!board.contains("No emergency patients."));

        let empty = QueueSnapshot::new(Vec::new(), Vec::new()).render_board();
        assert!(empty.contains("No emergency patients."));
        assert!(empty.contains("No normal patients."));
    }
}
