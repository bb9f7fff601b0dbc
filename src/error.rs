//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the simulator.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScheduleError {
    /// The workload failed validation; every detected problem is listed.
    #[error("invalid workload: {}", join_messages(.0))]
    InvalidWorkload(Vec<ValidationError>),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// Validation errors, if this is an invalid-workload error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidWorkload(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_workload_display() {
        let err = ScheduleError::InvalidWorkload(vec![
            ValidationError::new(ValidationErrorKind::NonPositiveBurst, "P1 burst 0"),
            ValidationError::new(ValidationErrorKind::InvalidPriority, "P2 priority 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid workload: P1 burst 0; P2 priority 0"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_config_error_has_no_validation_errors() {
        let err = ScheduleError::InvalidConfig("bad range".into());
        assert!(err.validation_errors().is_empty());
        assert_eq!(err.to_string(), "invalid configuration: bad range");
    }
}
