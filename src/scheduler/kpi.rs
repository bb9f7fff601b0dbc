//! Run quality metrics.
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Σ(start − arrival) / workload size |
//! | Avg Turnaround | Σ(completion − arrival) / workload size |
//! | Max Waiting | Largest single start − arrival |
//! | Makespan | Latest completion time |
//! | Busy Time | Σ burst |
//! | Idle Time | Ticks with an empty ready queue |
//! | CPU Utilization | busy / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{SchedulingRun, Ticks};

/// Run performance indicators.
///
/// All time values are in ticks. Averages over an empty workload are `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean waiting time over the whole input workload.
    pub average_waiting_time: f64,
    /// Mean turnaround time over the whole input workload.
    pub average_turnaround_time: f64,
    /// Longest single waiting time.
    pub max_waiting_time: Ticks,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Total ticks the CPU was running a burst.
    pub busy_time: Ticks,
    /// Total ticks the CPU sat idle.
    pub idle_time: Ticks,
    /// Fraction of the makespan spent busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl RunMetrics {
    /// Computes metrics from a run.
    pub fn calculate(run: &SchedulingRun) -> Self {
        let makespan = run.makespan();
        let busy_time: Ticks = run.events.iter().map(|e| e.burst_time).sum();
        // Each turnaround fits in a tick, their sum may not
        let total_turnaround: f64 = run
            .events
            .iter()
            .map(|e| e.turnaround_time() as f64)
            .sum();
        let max_waiting_time = run
            .events
            .iter()
            .map(|e| e.waiting_time)
            .max()
            .unwrap_or(0);

        let average_turnaround_time = if run.process_count == 0 {
            0.0
        } else {
            total_turnaround / run.process_count as f64
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        Self {
            average_waiting_time: run.average_waiting_time(),
            average_turnaround_time,
            max_waiting_time,
            makespan,
            busy_time,
            idle_time: run.idle_time,
            cpu_utilization,
        }
    }
}
