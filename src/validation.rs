//! Input validation for workloads.
//!
//! Checks structural integrity of process descriptors before any policy
//! runs. Detects:
//! - Non-positive or duplicate IDs
//! - Negative arrival times
//! - Non-positive burst times (a zero-length dispatch never advances time)
//! - Priorities below 1
//! - Workloads whose last completion would not fit in a tick
//!
//! An empty workload is valid.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{ProcessDescriptor, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// Process ID is zero.
    InvalidId,
    /// Arrival time is negative.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Priority is zero or negative.
    InvalidPriority,
    /// Latest arrival plus total burst overflows the tick type.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. Every ID is positive
/// 2. No duplicate IDs
/// 3. Every arrival time is ≥ 0
/// 4. Every burst time is > 0
/// 5. Every priority is ≥ 1
/// 6. Latest arrival + sum of bursts fits in [`Ticks`]
///
/// No completion time can exceed the latest arrival plus the total burst,
/// so check 6 bounds every tick the dispatch loop computes.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut horizon: Option<Ticks> = Some(0);
    let mut latest_arrival: Ticks = 0;

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        } else {
            horizon = horizon.and_then(|total| total.checked_add(p.burst_time));
        }
        latest_arrival = latest_arrival.max(p.arrival_time);

        if p.priority <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!("Process {} has priority {} (must be >= 1)", p.id, p.priority),
            ));
        }
    }

    if horizon.and_then(|total| total.checked_add(latest_arrival)).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival {} plus total burst exceeds the maximum tick {}",
                latest_arrival,
                Ticks::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
