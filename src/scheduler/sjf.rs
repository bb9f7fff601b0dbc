//! Shortest Job First scheduler (non-preemptive).
//!
//! # Algorithm
//! Whenever the CPU is free, run the ready process with the smallest burst
//! to completion. Equal bursts go to whichever process entered the ready
//! queue first.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::Scheduler;
use crate::dispatching::rules::ShortestBurst;
use crate::dispatching::Dispatcher;
use crate::error::Result;
use crate::models::{ProcessDescriptor, SchedulingRun};

/// Non-preemptive Shortest Job First.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::{Scheduler, SjfScheduler};
///
/// let workload = vec![
///     ProcessDescriptor::new(1, 0, 8, 1),
///     ProcessDescriptor::new(2, 1, 4, 1),
///     ProcessDescriptor::new(3, 2, 2, 1),
/// ];
/// let run = SjfScheduler::new().schedule(&workload).unwrap();
/// assert_eq!(run.dispatch_order(), vec![1, 3, 2]);
/// assert!((run.average_waiting_time() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SjfScheduler {
    dispatcher: Dispatcher<ShortestBurst>,
}

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for SjfScheduler {
    fn schedule(&self, workload: &[ProcessDescriptor]) -> Result<SchedulingRun> {
        self.dispatcher.run(workload)
    }

    fn schedule_validated(&self, workload: &[ProcessDescriptor]) -> SchedulingRun {
        self.dispatcher.simulate(workload)
    }
}
