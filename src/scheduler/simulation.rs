//! Side-by-side simulation of both policies over one workload.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AgingPriorityScheduler, RunMetrics, Scheduler, SjfScheduler};
use crate::config::SimulationConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{ProcessDescriptor, SchedulingRun};
use crate::validation::validate_workload;
use crate::workload::WorkloadSource;

/// Result of running every policy on the same workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// The workload both policies saw.
    pub workload: Vec<ProcessDescriptor>,
    /// Shortest Job First run.
    pub sjf: SchedulingRun,
    /// Priority-with-aging run.
    pub aging: SchedulingRun,
}

impl SimulationOutcome {
    /// Metrics of the SJF run.
    pub fn sjf_metrics(&self) -> RunMetrics {
        RunMetrics::calculate(&self.sjf)
    }

    /// Metrics of the aging run.
    pub fn aging_metrics(&self) -> RunMetrics {
        RunMetrics::calculate(&self.aging)
    }
}

/// Runs SJF and priority-with-aging back to back.
///
/// Each policy gets its own private copy of the workload.
///
/// # Example
///
/// ```
/// use u_cpusched::config::SimulationConfig;
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::Simulation;
///
/// let workload = vec![
///     ProcessDescriptor::new(1, 0, 10, 5),
///     ProcessDescriptor::new(2, 0, 3, 1),
/// ];
/// let outcome = Simulation::new(SimulationConfig::default()).run(&workload).unwrap();
/// assert_eq!(outcome.sjf.dispatch_order(), vec![2, 1]);
/// assert_eq!(outcome.aging.dispatch_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    sjf: SjfScheduler,
    aging: AgingPriorityScheduler,
}

impl Simulation {
    /// Creates a simulation using the config's aging parameters.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            sjf: SjfScheduler::new(),
            aging: AgingPriorityScheduler::new().with_aging(config.aging),
        }
    }

    /// Validates the workload once, then runs both policies.
    pub fn run(&self, workload: &[ProcessDescriptor]) -> Result<SimulationOutcome> {
        validate_workload(workload).map_err(ScheduleError::InvalidWorkload)?;

        let sjf = self.sjf.schedule_validated(workload);
        let aging = self.aging.schedule_validated(workload);
        info!(
            processes = workload.len(),
            sjf_avg_waiting = sjf.average_waiting_time(),
            aging_avg_waiting = aging.average_waiting_time(),
            "simulation complete"
        );

        Ok(SimulationOutcome {
            workload: workload.to_vec(),
            sjf,
            aging,
        })
    }

    /// Takes a snapshot from `source` and runs both policies on it.
    pub fn run_source<S: WorkloadSource + ?Sized>(&self, source: &mut S) -> Result<SimulationOutcome> {
        let workload = source.snapshot();
        self.run(&workload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgingConfig, WorkloadConfig};
    use crate::workload::RandomWorkload;

    #[test]
    fn test_policies_independent() {
        let workload = vec![
            ProcessDescriptor::new(1, 0, 20, 1),
            ProcessDescriptor::new(2, 0, 2, 5),
            ProcessDescriptor::new(3, 20, 2, 3),
        ];
        let outcome = Simulation::default().run(&workload).unwrap();

        // Aging boosted P2 in its own run...
        assert_eq!(outcome.aging.event_for(2).map(|e| e.current_priority), Some(2));
        // ...without touching the SJF run's copy.
        assert!(outcome
            .sjf
            .records
            .iter()
            .all(|r| r.current_priority == r.base_priority));

        let alone = SjfScheduler::new().schedule(&workload).unwrap();
        assert_eq!(outcome.sjf, alone);
    }

    #[test]
    fn test_config_aging_applied() {
        let workload = vec![
            ProcessDescriptor::new(1, 0, 20, 1),
            ProcessDescriptor::new(2, 0, 2, 5),
            ProcessDescriptor::new(3, 20, 2, 3),
        ];
        let config = SimulationConfig::new()
            .with_aging(AgingConfig::default().with_threshold(1000));
        let outcome = Simulation::new(config).run(&workload).unwrap();
        assert_eq!(outcome.aging.dispatch_order(), vec![1, 3, 2]);
    }

    #[test]
    fn test_invalid_rejected_once() {
        let workload = vec![ProcessDescriptor::new(1, 0, 0, 0)];
        let err = Simulation::default().run(&workload).unwrap_err();
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_run_source() {
        let mut source = RandomWorkload::seeded(WorkloadConfig::default(), 7).unwrap();
        let outcome = Simulation::default().run_source(&mut source).unwrap();
        assert_eq!(outcome.workload.len(), 6);
        assert_eq!(outcome.sjf.event_count(), 6);
        assert_eq!(outcome.aging.event_count(), 6);
    }

    #[test]
    fn test_metrics_accessors() {
        let workload = vec![
            ProcessDescriptor::new(1, 0, 4, 2),
            ProcessDescriptor::new(2, 0, 2, 1),
        ];
        let outcome = Simulation::default().run(&workload).unwrap();
        assert!((outcome.sjf_metrics().average_waiting_time - 1.0).abs() < 1e-10);
        assert!((outcome.aging_metrics().average_waiting_time - 1.0).abs() < 1e-10);
    }
}
