//! Process model.
//!
//! A process is a synthetic CPU job: an arrival tick, a burst of CPU time
//! that runs to completion once dispatched, and a priority.
//!
//! [`ProcessDescriptor`] is the immutable workload input. [`ProcessRecord`]
//! is the per-run copy that carries mutable scheduling state.
//!
//! # Time Representation
//! All times are integer ticks relative to the start of a run (t=0).

use serde::{Deserialize, Serialize};

/// Process identifier. Valid identifiers are positive.
pub type ProcessId = u32;

/// Simulation time in ticks.
pub type Ticks = i64;

/// Scheduling priority. Smaller = more urgent; `1` is the best priority.
pub type Priority = i32;

/// A process as supplied by a workload source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time required.
    pub burst_time: Ticks,
    /// Base priority (smaller = higher priority).
    pub priority: Priority,
}

impl ProcessDescriptor {
    /// Creates a descriptor.
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks, priority: Priority) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// Lifecycle of a process within a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Not yet arrived.
    Pending,
    /// Arrived and queued.
    Ready,
    /// On the CPU.
    Running,
    /// Burst finished. Terminal.
    Completed,
}

/// Per-run scheduling state of a process.
///
/// Created fresh from a [`ProcessDescriptor`] at the start of every run, so
/// mutations made by one policy never leak into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Arrival tick.
    pub arrival_time: Ticks,
    /// Total CPU time required.
    pub burst_time: Ticks,
    /// Original priority, never modified.
    pub base_priority: Priority,
    /// Effective priority; only aging lowers it.
    pub current_priority: Priority,
    /// CPU time still owed; zero once completed.
    pub remaining_time: Ticks,
    /// Time from arrival to dispatch, set at dispatch.
    pub waiting_time: Ticks,
    /// Sum of bursts dispatched ahead of this record while it sat in the
    /// ready queue. Not used for metrics.
    pub wait_accumulator: Ticks,
    /// Lifecycle state.
    pub state: ProcessState,
}

impl ProcessRecord {
    /// Whether the record's priority lies within `1..=base_priority`.
    pub fn priority_in_bounds(&self) -> bool {
        self.current_priority >= 1 && self.current_priority <= self.base_priority
    }

    /// Ticks spent since arrival at time `now`.
    #[inline]
    pub fn waited_at(&self, now: Ticks) -> Ticks {
        now - self.arrival_time
    }

    pub(crate) fn mark_ready(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Pending);
        self.state = ProcessState::Ready;
    }

    pub(crate) fn mark_running(&mut self, start: Ticks) {
        debug_assert_eq!(self.state, ProcessState::Ready);
        self.state = ProcessState::Running;
        self.waiting_time = start - self.arrival_time;
    }

    pub(crate) fn mark_completed(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Running);
        self.state = ProcessState::Completed;
        self.remaining_time = 0;
    }
}

impl From<&ProcessDescriptor> for ProcessRecord {
    fn from(desc: &ProcessDescriptor) -> Self {
        Self {
            id: desc.id,
            arrival_time: desc.arrival_time,
            burst_time: desc.burst_time,
            base_priority: desc.priority,
            current_priority: desc.priority,
            remaining_time: desc.burst_time,
            waiting_time: 0,
            wait_accumulator: 0,
            state: ProcessState::Pending,
        }
    }
}
