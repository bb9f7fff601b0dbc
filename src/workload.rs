//! Workload sources.
//!
//! The schedulers never generate their own input; they take a snapshot from
//! a [`WorkloadSource`]. A literal `Vec<ProcessDescriptor>` is a source, and
//! [`RandomWorkload`] draws synthetic processes from configured ranges.
//!
//! ```
//! use u_cpusched::config::WorkloadConfig;
//! use u_cpusched::workload::{RandomWorkload, WorkloadSource};
//!
//! let mut a = RandomWorkload::seeded(WorkloadConfig::default(), 42).unwrap();
//! let mut b = RandomWorkload::seeded(WorkloadConfig::default(), 42).unwrap();
//! assert_eq!(a.snapshot(), b.snapshot());
//!
//! // Empty ranges are refused up front
//! let inverted = WorkloadConfig::default().with_burst_range(5, 1);
//! assert!(RandomWorkload::seeded(inverted, 42).is_err());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::WorkloadConfig;
use crate::error::Result;
use crate::models::{ProcessDescriptor, ProcessId};

/// Supplies an ordered workload.
pub trait WorkloadSource {
    /// Returns the next workload snapshot.
    fn snapshot(&mut self) -> Vec<ProcessDescriptor>;
}

impl WorkloadSource for Vec<ProcessDescriptor> {
    fn snapshot(&mut self) -> Vec<ProcessDescriptor> {
        self.clone()
    }
}

impl WorkloadSource for [ProcessDescriptor] {
    fn snapshot(&mut self) -> Vec<ProcessDescriptor> {
        self.to_vec()
    }
}

/// Uniformly random synthetic workload.
///
/// Process IDs run `1..=process_count` in generation order. Arrival, burst
/// and priority are each drawn uniformly from their inclusive ranges.
/// Construction runs [`WorkloadConfig::validate`], so every range is
/// non-empty by the time a snapshot is drawn.
#[derive(Debug, Clone)]
pub struct RandomWorkload {
    config: WorkloadConfig,
    rng: StdRng,
}

impl RandomWorkload {
    /// Creates a generator; uses `config.seed` if set, OS entropy otherwise.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfig`](crate::ScheduleError::InvalidConfig)
    /// if any range is empty or out of bounds.
    pub fn new(config: WorkloadConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// Creates a reproducible generator, overriding any configured seed.
    pub fn seeded(config: WorkloadConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Generation parameters.
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }
}

impl WorkloadSource for RandomWorkload {
    fn snapshot(&mut self) -> Vec<ProcessDescriptor> {
        let cfg = &self.config;
        let workload: Vec<ProcessDescriptor> = (1..=cfg.process_count)
            .map(|n| ProcessDescriptor {
                id: n as ProcessId,
                arrival_time: self.rng.random_range(cfg.arrival_min..=cfg.arrival_max),
                burst_time: self.rng.random_range(cfg.burst_min..=cfg.burst_max),
                priority: self.rng.random_range(cfg.priority_min..=cfg.priority_max),
            })
            .collect();
        debug!(processes = workload.len(), "generated random workload");
        workload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_workload;
    use crate::ScheduleError;

    #[test]
    fn test_literal_source() {
        let mut source = vec![ProcessDescriptor::new(1, 0, 3, 1)];
        assert_eq!(source.snapshot(), source);
    }

    #[test]
    fn test_random_respects_ranges() {
        let config = WorkloadConfig::default()
            .with_process_count(200)
            .with_arrival_range(3, 7)
            .with_burst_range(2, 4)
            .with_priority_range(1, 2);
        let mut source = RandomWorkload::seeded(config, 1).unwrap();
        let workload = source.snapshot();

        assert_eq!(workload.len(), 200);
        for (i, p) in workload.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!((3..=7).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert!((1..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_random_default_is_valid() {
        let mut source = RandomWorkload::new(WorkloadConfig::default()).unwrap();
        let workload = source.snapshot();
        assert_eq!(workload.len(), 6);
        assert!(validate_workload(&workload).is_ok());
    }

    #[test]
    fn test_seed_reproducible() {
        let config = WorkloadConfig::default().with_seed(99);
        let a = RandomWorkload::new(config.clone()).unwrap().snapshot();
        let b = RandomWorkload::new(config).unwrap().snapshot();
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_snapshots_differ() {
        let mut source =
            RandomWorkload::seeded(WorkloadConfig::default().with_process_count(20), 5).unwrap();
        let first = source.snapshot();
        let second = source.snapshot();
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_processes() {
        let mut source =
            RandomWorkload::seeded(WorkloadConfig::default().with_process_count(0), 5).unwrap();
        assert!(source.snapshot().is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let burst = WorkloadConfig::default().with_burst_range(5, 1);
        let err = RandomWorkload::seeded(burst, 1).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));

        let priority = WorkloadConfig::default().with_priority_range(3, 2);
        assert!(matches!(
            RandomWorkload::new(priority),
            Err(ScheduleError::InvalidConfig(_))
        ));

        let arrival = WorkloadConfig::default().with_arrival_range(-1, 4);
        assert!(RandomWorkload::seeded(arrival, 1).is_err());
    }
}
