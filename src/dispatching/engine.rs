//! Single-CPU, non-preemptive dispatch loop.
//!
//! # Algorithm
//!
//! 1. Copy the workload into fresh records, stably sorted by arrival so
//!    same-tick arrivals keep input order.
//! 2. Move every arrived record (a prefix of `pending`) to the back of `ready`.
//! 3. If nothing is ready, idle until the next arrival.
//! 4. Otherwise let the rule prepare the queue, pick the first minimal
//!    record, and run its whole burst.
//! 5. Stop when both `pending` and `ready` are empty.
//!
//! # Complexity
//! O(n²) for n processes: each dispatch scans the ready queue.

use std::collections::VecDeque;

use tracing::{debug, info, trace, warn};

use super::{select_first_min, SchedulingContext, SelectionRule};
use crate::error::{Result, ScheduleError};
use crate::models::{ExecutionEvent, ProcessDescriptor, ProcessRecord, SchedulingRun, Ticks};
use crate::validation::validate_workload;

/// Drives a [`SelectionRule`] over a workload.
///
/// The dispatcher holds no per-run state; every call to [`Dispatcher::run`]
/// works on its own copy of the workload, so repeated or interleaved runs
/// never influence each other.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<R: SelectionRule> {
    rule: R,
}

impl<R: SelectionRule> Dispatcher<R> {
    /// Creates a dispatcher for the given rule.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The selection rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Validates the workload, then simulates it.
    pub fn run(&self, workload: &[ProcessDescriptor]) -> Result<SchedulingRun> {
        if let Err(errors) = validate_workload(workload) {
            warn!(
                policy = self.rule.name(),
                errors = errors.len(),
                "rejecting invalid workload"
            );
            return Err(ScheduleError::InvalidWorkload(errors));
        }
        Ok(self.simulate(workload))
    }

    /// Simulates an already validated workload.
    pub(crate) fn simulate(&self, workload: &[ProcessDescriptor]) -> SchedulingRun {
        let policy = self.rule.name();
        let mut run =
            SchedulingRun::new(policy, workload.len()).with_title(self.rule.description());

        let mut pending: VecDeque<ProcessRecord> = {
            let mut records: Vec<ProcessRecord> =
                workload.iter().map(ProcessRecord::from).collect();
            records.sort_by_key(|r| r.arrival_time);
            records.into()
        };
        let mut ready: Vec<ProcessRecord> = Vec::with_capacity(workload.len());
        let mut now: Ticks = 0;

        while !pending.is_empty() || !ready.is_empty() {
            let arrived = pending.partition_point(|r| r.arrival_time <= now);
            for mut record in pending.drain(..arrived) {
                trace!(policy, pid = record.id, now, "arrived");
                record.mark_ready();
                ready.push(record);
            }

            if ready.is_empty() {
                // Idle CPU: nothing can happen before the next arrival.
                if let Some(next) = pending.front() {
                    trace!(policy, from = now, to = next.arrival_time, "cpu idle");
                    run.idle_time += next.arrival_time - now;
                    now = next.arrival_time;
                }
                continue;
            }

            let context = SchedulingContext::at_time(now);
            self.rule.prepare(&mut ready, &context);
            debug_assert!(
                ready.iter().all(ProcessRecord::priority_in_bounds),
                "priority left 1..=base after prepare"
            );

            let Some(idx) = select_first_min(&self.rule, &ready, &context) else {
                break;
            };
            let mut record = ready.remove(idx);
            record.mark_running(now);
            self.rule.on_dispatch(&record, &mut ready);

            let event = ExecutionEvent::dispatched(&record, now);
            debug!(
                policy,
                pid = event.process_id,
                start = event.start_time,
                completion = event.completion_time,
                waiting = event.waiting_time,
                priority = event.current_priority,
                "dispatch"
            );

            now = event.completion_time;
            record.mark_completed();
            run.events.push(event);
            run.records.push(record);
        }

        info!(
            policy,
            events = run.event_count(),
            makespan = run.makespan(),
            avg_waiting = run.average_waiting_time(),
            "run complete"
        );
        run
    }
}
