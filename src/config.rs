//! Simulation configuration.
//!
//! All settings have defaults matching the classic lab setup: six processes,
//! arrivals in `0..=10`, bursts in `1..=20`, priorities in `1..=5`, aging
//! after 5 ticks of waiting with at most 3 levels of boost.
//!
//! Configuration can be built in code with the `with_*` builders or loaded
//! from JSON; missing JSON fields fall back to the defaults.
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_json_str(r#"{ "aging": { "threshold": 8 } }"#).unwrap();
//! assert_eq!(config.aging.threshold, 8);
//! assert_eq!(config.aging.max_boost, 3);
//! assert_eq!(config.workload.process_count, 6);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{Priority, Ticks};

/// Ticks a process may wait before aging starts boosting it.
pub const AGING_THRESHOLD: Ticks = 5;

/// Upper bound on the number of priority levels aging can gain.
pub const MAX_PRIORITY_BOOST: Priority = 3;

/// Aging parameters for priority scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgingConfig {
    /// Waiting ticks tolerated without a boost.
    pub threshold: Ticks,
    /// Maximum priority levels gained.
    pub max_boost: Priority,
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            threshold: AGING_THRESHOLD,
            max_boost: MAX_PRIORITY_BOOST,
        }
    }
}

impl AgingConfig {
    /// Sets the waiting threshold.
    pub fn with_threshold(mut self, threshold: Ticks) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the maximum boost.
    pub fn with_max_boost(mut self, max_boost: Priority) -> Self {
        self.max_boost = max_boost;
        self
    }

    /// Priority levels earned after waiting `waited` ticks.
    ///
    /// Zero up to the threshold, then one level per two ticks beyond it
    /// (floor), capped at `max_boost`.
    pub fn boost_for(&self, waited: Ticks) -> Priority {
        if waited <= self.threshold {
            return 0;
        }
        let earned = waited.saturating_sub(self.threshold) / 2;
        // Bounded by max_boost, so the narrowing cast is lossless.
        earned.min(Ticks::from(self.max_boost.max(0))) as Priority
    }

    /// Rejects a negative threshold or boost.
    pub fn validate(&self) -> Result<()> {
        if self.threshold < 0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "aging threshold must be >= 0, got {}",
                self.threshold
            )));
        }
        if self.max_boost < 0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "aging max_boost must be >= 0, got {}",
                self.max_boost
            )));
        }
        Ok(())
    }
}

/// Parameters for random workload generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Inclusive arrival range.
    pub arrival_min: Ticks,
    pub arrival_max: Ticks,
    /// Inclusive burst range.
    pub burst_min: Ticks,
    pub burst_max: Ticks,
    /// Inclusive priority range.
    pub priority_min: Priority,
    pub priority_max: Priority,
    /// Seed for reproducible workloads. `None` = OS entropy.
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 6,
            arrival_min: 0,
            arrival_max: 10,
            burst_min: 1,
            burst_max: 20,
            priority_min: 1,
            priority_max: 5,
            seed: None,
        }
    }
}

impl WorkloadConfig {
    /// Sets the process count.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the arrival range.
    pub fn with_arrival_range(mut self, min: Ticks, max: Ticks) -> Self {
        self.arrival_min = min;
        self.arrival_max = max;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: Ticks, max: Ticks) -> Self {
        self.burst_min = min;
        self.burst_max = max;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: Priority, max: Priority) -> Self {
        self.priority_min = min;
        self.priority_max = max;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every range is non-empty and within the workload limits.
    pub fn validate(&self) -> Result<()> {
        if self.arrival_min < 0 || self.arrival_min > self.arrival_max {
            return Err(ScheduleError::InvalidConfig(format!(
                "arrival range {}..={} is invalid",
                self.arrival_min, self.arrival_max
            )));
        }
        if self.burst_min < 1 || self.burst_min > self.burst_max {
            return Err(ScheduleError::InvalidConfig(format!(
                "burst range {}..={} is invalid",
                self.burst_min, self.burst_max
            )));
        }
        if self.priority_min < 1 || self.priority_min > self.priority_max {
            return Err(ScheduleError::InvalidConfig(format!(
                "priority range {}..={} is invalid",
                self.priority_min, self.priority_max
            )));
        }
        Ok(())
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Aging parameters.
    pub aging: AgingConfig,
    /// Workload generation parameters.
    pub workload: WorkloadConfig,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets aging parameters.
    pub fn with_aging(mut self, aging: AgingConfig) -> Self {
        self.aging = aging;
        self
    }

    /// Sets workload parameters.
    pub fn with_workload(mut self, workload: WorkloadConfig) -> Self {
        self.workload = workload;
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks every range and limit.
    pub fn validate(&self) -> Result<()> {
        self.aging.validate()?;
        self.workload.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::new();
        assert_eq!(config.aging.threshold, 5);
        assert_eq!(config.aging.max_boost, 3);
        assert_eq!(config.workload.process_count, 6);
        assert_eq!(config.workload.burst_min, 1);
        assert_eq!(config.workload.burst_max, 20);
        assert!(config.workload.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_boost_for() {
        let aging = AgingConfig::default();
        assert_eq!(aging.boost_for(0), 0);
        assert_eq!(aging.boost_for(5), 0);
        assert_eq!(aging.boost_for(6), 0); // (6-5)/2 = 0
        assert_eq!(aging.boost_for(7), 1);
        assert_eq!(aging.boost_for(10), 2);
        assert_eq!(aging.boost_for(11), 3);
        assert_eq!(aging.boost_for(1000), 3);
    }

    #[test]
    fn test_boost_custom() {
        let aging = AgingConfig::default().with_threshold(0).with_max_boost(10);
        assert_eq!(aging.boost_for(1), 0);
        assert_eq!(aging.boost_for(2), 1);
        assert_eq!(aging.boost_for(40), 10);
    }

    #[test]
    fn test_boost_extreme_threshold_saturates() {
        let aging = AgingConfig::default().with_threshold(Ticks::MIN);
        assert_eq!(aging.boost_for(Ticks::MAX), 3);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{ "workload": { "process_count": 10, "seed": 42 } }"#;
        let config = SimulationConfig::from_json_str(json).unwrap();
        assert_eq!(config.workload.process_count, 10);
        assert_eq!(config.workload.seed, Some(42));
        assert_eq!(config.workload.arrival_max, 10);
        assert_eq!(config.aging, AgingConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_range() {
        let json = r#"{ "workload": { "burst_min": 0 } }"#;
        let err = SimulationConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_negative_threshold() {
        let json = r#"{ "aging": { "threshold": -1 } }"#;
        let err = SimulationConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ScheduleError::ConfigParse(_)));
    }

    #[test]
    fn test_from_missing_path() {
        let err = SimulationConfig::from_path("/nonexistent/u-cpusched.json").unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }

    #[test]
    fn test_inverted_priority_range() {
        let config = SimulationConfig::new()
            .with_workload(WorkloadConfig::default().with_priority_range(5, 1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_workload_validate_inverted_burst_range() {
        let workload = WorkloadConfig::default().with_burst_range(5, 1);
        let err = workload.validate().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
        assert!(WorkloadConfig::default().validate().is_ok());
    }
}
