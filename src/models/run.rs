//! Scheduling run (solution) model.
//!
//! A run is the complete, ordered dispatch log a policy produced for one
//! workload, together with the final state of every process record.

use serde::{Deserialize, Serialize};

use super::{Priority, ProcessId, ProcessRecord, Ticks};

/// One dispatch: a process ran from `start_time` to `completion_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    /// Dispatched process.
    pub process_id: ProcessId,
    /// Arrival tick (denormalized for reporting).
    pub arrival_time: Ticks,
    /// Burst length (denormalized for reporting).
    pub burst_time: Ticks,
    /// Tick the process took the CPU.
    pub start_time: Ticks,
    /// Tick the burst finished.
    pub completion_time: Ticks,
    /// `start_time - arrival_time`.
    pub waiting_time: Ticks,
    /// Priority the process arrived with.
    pub base_priority: Priority,
    /// Effective priority at dispatch.
    pub current_priority: Priority,
}

impl ExecutionEvent {
    /// Builds the event for a record dispatched at `start_time`.
    pub(crate) fn dispatched(record: &ProcessRecord, start_time: Ticks) -> Self {
        Self {
            process_id: record.id,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            start_time,
            completion_time: start_time + record.burst_time,
            waiting_time: start_time - record.arrival_time,
            base_priority: record.base_priority,
            current_priority: record.current_priority,
        }
    }

    /// Completion minus arrival.
    #[inline]
    pub fn turnaround_time(&self) -> Ticks {
        self.completion_time - self.arrival_time
    }

    /// How many priority levels aging gained before dispatch.
    #[inline]
    pub fn priority_boost(&self) -> Priority {
        self.base_priority - self.current_priority
    }
}

/// Output of one scheduling policy over one workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingRun {
    /// Name of the policy that produced this run.
    pub policy: String,
    /// Human-readable policy title used in reports.
    pub title: String,
    /// Dispatches in order.
    pub events: Vec<ExecutionEvent>,
    /// Final process records, in dispatch order.
    pub records: Vec<ProcessRecord>,
    /// Size of the input workload.
    pub process_count: usize,
    /// Ticks the CPU spent with an empty ready queue.
    pub idle_time: Ticks,
}

impl SchedulingRun {
    /// Creates an empty run for the given policy.
    ///
    /// The title defaults to the policy name.
    pub fn new(policy: impl Into<String>, process_count: usize) -> Self {
        let policy = policy.into();
        Self {
            title: policy.clone(),
            policy,
            process_count,
            ..Default::default()
        }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of dispatches.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Finds the dispatch of a process.
    pub fn event_for(&self, process_id: ProcessId) -> Option<&ExecutionEvent> {
        self.events.iter().find(|e| e.process_id == process_id)
    }

    /// Final record of a process.
    pub fn record_for(&self, process_id: ProcessId) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == process_id)
    }

    /// Process ids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.events.iter().map(|e| e.process_id).collect()
    }

    /// Latest completion time, 0 for an empty run.
    pub fn makespan(&self) -> Ticks {
        self.events
            .iter()
            .map(|e| e.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Sum of per-dispatch waiting times, saturating at `Ticks::MAX`.
    pub fn total_waiting_time(&self) -> Ticks {
        self.events
            .iter()
            .fold(0, |acc: Ticks, e| acc.saturating_add(e.waiting_time))
    }

    /// Mean waiting time over the whole input workload.
    ///
    /// Divides by `process_count`, not by the number of dispatches. Returns
    /// `0.0` for an empty workload.
    pub fn average_waiting_time(&self) -> f64 {
        if self.process_count == 0 {
            return 0.0;
        }
        let total: f64 = self.events.iter().map(|e| e.waiting_time as f64).sum();
        total / self.process_count as f64
    }
}
