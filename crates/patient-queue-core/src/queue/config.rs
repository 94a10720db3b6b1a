//! Queue configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{QueueError, QueueResult};
use crate::models::{QueueKind, DEFAULT_EMERGENCY_THRESHOLD};

/// Triage scale and admission checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueueConfig {
    /// Lowest emergency priority
    pub emergency_threshold: i64,
    /// Lowest accepted priority
    pub min_priority: i64,
    /// Highest accepted priority
    pub max_priority: i64,
    /// Reject priorities outside min..=max at admission
    pub enforce_priority_range: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            emergency_threshold: DEFAULT_EMERGENCY_THRESHOLD,
            min_priority: 0,
            max_priority: 10,
            enforce_priority_range: true,
        }
    }
}

impl QueueConfig {
    /// Default scale with the range check switched off.
    pub fn unchecked() -> Self {
        Self {
            enforce_priority_range: false,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> QueueResult<Self> {
        let config: QueueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> QueueResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the scale is coherent.
    pub fn validate(&self) -> QueueResult<()> {
        if self.min_priority > self.max_priority {
            warn!(
                min = self.min_priority,
                max = self.max_priority,
                "rejected queue config"
            );
            return Err(QueueError::InvalidConfig(format!(
                "min_priority {} exceeds max_priority {}",
                self.min_priority, self.max_priority
            )));
        }
        if self.emergency_threshold <= self.min_priority
            || self.emergency_threshold > self.max_priority
        {
            warn!(
                threshold = self.emergency_threshold,
                "rejected queue config"
            );
            return Err(QueueError::InvalidConfig(format!(
                "emergency_threshold {} must lie in ({}, {}]",
                self.emergency_threshold, self.min_priority, self.max_priority
            )));
        }
        Ok(())
    }

    /// Classify a priority on this scale.
    pub fn classify(&self, priority: i64) -> QueueKind {
        QueueKind::classify_on_scale(priority, self.min_priority, self.emergency_threshold)
    }

    /// Range check applied at admission, if enabled.
    pub fn check_priority(&self, priority: i64) -> QueueResult<()> {
        if self.enforce_priority_range
            && !(self.min_priority..=self.max_priority).contains(&priority)
        {
            return Err(QueueError::PriorityOutOfRange {
                priority,
                min: self.min_priority,
                max: self.max_priority,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = QueueConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classify(3), QueueKind::Normal);
        assert_eq!(config.classify(4), QueueKind::Emergency);
        assert_eq!(config.classify(-1), QueueKind::Emergency);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = QueueConfig::from_json_str(r#"{"enforce_priority_range": false}"#).unwrap();
        assert_eq!(config, QueueConfig::unchecked());
    }

    #[test]
    fn test_rejects_incoherent_scale() {
        let err = QueueConfig::from_json_str(r#"{"min_priority": 5, "max_priority": 1}"#);
        assert!(matches!(err, Err(QueueError::InvalidConfig(_))));

        let err = QueueConfig::from_json_str(r#"{"emergency_threshold": 0}"#);
        assert!(matches!(err, Err(QueueError::InvalidConfig(_))));

        let err = QueueConfig::from_json_str(r#"{"emergency_threshold": 11}"#);
        assert!(matches!(err, Err(QueueError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = QueueConfig::from_json_str("{not json");
        assert!(matches!(err, Err(QueueError::Json(_))));
    }

    #[test]
    fn test_check_priority() {
        let config = QueueConfig::default();
        assert!(config.check_priority(0).is_ok());
        assert!(config.check_priority(10).is_ok());
        assert!(matches!(
            config.check_priority(11),
            Err(QueueError::PriorityOutOfRange { priority: 11, min: 0, max: 10 })
        ));
        assert!(config.check_priority(-1).is_err());

        assert!(QueueConfig::unchecked().check_priority(99).is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"emergency_threshold": 6}}"#).unwrap();

        let config = QueueConfig::from_file(file.path()).unwrap();
        assert_eq!(config.emergency_threshold, 6);
        assert_eq!(config.classify(5), QueueKind::Normal);
    }

    #[test]
    fn test_from_missing_file() {
        let err = QueueConfig::from_file("/nonexistent/queue-config.json");
        assert!(matches!(err, Err(QueueError::Io(_))));
    }
}
