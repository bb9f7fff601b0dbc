//! Priority scheduler with aging (non-preemptive).
//!
//! # Algorithm
//! 1. Before each selection, age every ready process: past `threshold`
//!    waiting ticks it gains one priority level per two ticks, up to
//!    `max_boost`, never below priority 1.
//! 2. Run the ready process with the smallest effective priority to
//!    completion; ties go to the first found in ready-queue order.
//!
//! Aging bounds starvation: a low-priority process that keeps waiting
//! eventually outranks fresh arrivals of moderate priority.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use super::Scheduler;
use crate::config::AgingConfig;
use crate::dispatching::rules::AgedPriority;
use crate::dispatching::Dispatcher;
use crate::error::Result;
use crate::models::{ProcessDescriptor, SchedulingRun};

/// Non-preemptive priority scheduling with aging.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::{AgingPriorityScheduler, Scheduler};
///
/// let workload = vec![
///     ProcessDescriptor::new(1, 0, 10, 5),
///     ProcessDescriptor::new(2, 0, 3, 1),
/// ];
/// let run = AgingPriorityScheduler::new().schedule(&workload).unwrap();
/// assert_eq!(run.dispatch_order(), vec![2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AgingPriorityScheduler {
    dispatcher: Dispatcher<AgedPriority>,
}

impl AgingPriorityScheduler {
    /// Creates a scheduler with the default aging parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the aging parameters.
    pub fn with_aging(mut self, aging: AgingConfig) -> Self {
        self.dispatcher = Dispatcher::new(AgedPriority::with_aging(aging));
        self
    }

    /// Active aging parameters.
    pub fn aging(&self) -> &AgingConfig {
        &self.dispatcher.rule().aging
    }
}

impl Scheduler for AgingPriorityScheduler {
    fn schedule(&self, workload: &[ProcessDescriptor]) -> Result<SchedulingRun> {
        self.dispatcher.run(workload)
    }

    fn schedule_validated(&self, workload: &[ProcessDescriptor]) -> SchedulingRun {
        self.dispatcher.simulate(workload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32, arrival: i64, burst: i64, priority: i32) -> ProcessDescriptor {
        ProcessDescriptor::new(id, arrival, burst, priority)
    }

    #[test]
    fn test_priority_before_burst() {
        let workload = vec![p(1, 0, 10, 5), p(2, 0, 3, 1)];
        let run = AgingPriorityScheduler::new().schedule(&workload).unwrap();

        assert_eq!(run.dispatch_order(), vec![2, 1]);
        let p1 = run.event_for(1).unwrap();
        assert_eq!(p1.start_time, 3);
        assert_eq!(p1.waiting_time, 3);
        assert_eq!(p1.current_priority, 5);
    }

    #[test]
    fn test_aging_overtakes_fresh_arrival() {
        // P1 runs 0..20. At t=20, P2 (priority 5, arrived 0) has waited 20
        // → boost 3 → priority 2, beating P3 (priority 3, just arrived).
        let workload = vec![p(1, 0, 20, 1), p(2, 0, 2, 5), p(3, 20, 2, 3)];
        let run = AgingPriorityScheduler::new().schedule(&workload).unwrap();

        assert_eq!(run.dispatch_order(), vec![1, 2, 3]);
        let p2 = run.event_for(2).unwrap();
        assert_eq!(p2.base_priority, 5);
        assert_eq!(p2.current_priority, 2);
        assert_eq!(p2.priority_boost(), 3);
    }

    #[test]
    fn test_without_aging_fresh_arrival_wins() {
        // Same workload, but aging disabled by a huge threshold.
        let workload = vec![p(1, 0, 20, 1), p(2, 0, 2, 5), p(3, 20, 2, 3)];
        let scheduler =
            AgingPriorityScheduler::new().with_aging(AgingConfig::default().with_threshold(1000));
        let run = scheduler.schedule(&workload).unwrap();
        assert_eq!(run.dispatch_order(), vec![1, 3, 2]);
    }

    #[test]
    fn test_aged_tie_goes_to_queue_order() {
        // At t=10, P2 (base 3, waited 10 → boost 2) has priority 1, tied
        // with P3 (base 1). P2 entered the queue first.
        let workload = vec![p(1, 0, 10, 1), p(2, 0, 1, 3), p(3, 10, 1, 1)];
        let run = AgingPriorityScheduler::new().schedule(&workload).unwrap();
        assert_eq!(run.dispatch_order(), vec![1, 2, 3]);
        assert_eq!(run.event_for(2).map(|e| e.current_priority), Some(1));
    }

    #[test]
    fn test_no_cross_updates() {
        let workload = vec![p(1, 0, 4, 1), p(2, 0, 4, 2)];
        let run = AgingPriorityScheduler::new().schedule(&workload).unwrap();
        assert!(run.records.iter().all(|r| r.wait_accumulator == 0));
    }

    #[test]
    fn test_custom_aging_config() {
        let aging = AgingConfig::default().with_threshold(2).with_max_boost(1);
        let scheduler = AgingPriorityScheduler::new().with_aging(aging);
        assert_eq!(scheduler.aging().threshold, 2);

        let workload = vec![p(1, 0, 10, 1), p(2, 0, 1, 5)];
        let run = scheduler.schedule(&workload).unwrap();
        assert_eq!(run.event_for(2).map(|e| e.current_priority), Some(4));
    }

    #[test]
    fn test_empty() {
        let run = AgingPriorityScheduler::new().schedule(&[]).unwrap();
        assert_eq!(run.event_count(), 0);
    }
}
