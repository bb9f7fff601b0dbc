//! Built-in selection rules.
//!
//! - **Time-based**: SJF ([`ShortestBurst`])
//! - **Priority**: priority with aging ([`AgedPriority`])
//!
//! # Score Convention
//! All rules return lower scores for records that should run first.

use tracing::trace;

use super::{RuleScore, SchedulingContext, SelectionRule};
use crate::config::AgingConfig;
use crate::models::{ProcessRecord, Ticks};

// ======================== Time-based rules ========================

/// Shortest Job First (non-preemptive).
///
/// Prioritizes the ready process with the shortest burst. Minimizes mean
/// waiting time when every job is known up front.
///
/// On each dispatch, every process left in the ready queue gets the
/// dispatched burst added to its `wait_accumulator`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        record.burst_time
    }

    fn on_dispatch(&self, dispatched: &ProcessRecord, ready: &mut [ProcessRecord]) {
        for other in ready.iter_mut() {
            other.wait_accumulator += dispatched.burst_time;
        }
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (SJF)"
    }
}

// ======================== Priority rules ========================

/// Priority scheduling with aging.
///
/// Before each selection, a ready process that has waited longer than
/// `aging.threshold` ticks gets its priority lowered to
/// `max(1, base - boost)`, with `boost` from [`AgingConfig::boost_for`].
/// Waiting time only grows while a process is queued, so its effective
/// priority only ever improves.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgedPriority {
    /// Aging parameters.
    pub aging: AgingConfig,
}

impl AgedPriority {
    /// Creates the rule with custom aging parameters.
    pub fn with_aging(aging: AgingConfig) -> Self {
        Self { aging }
    }

    /// Recomputes one record's effective priority at `now`.
    pub fn age(&self, record: &mut ProcessRecord, now: Ticks) {
        let waited = record.waited_at(now);
        if waited <= self.aging.threshold {
            return;
        }
        let boost = self.aging.boost_for(waited);
        let aged = (record.base_priority - boost).max(1);
        if aged != record.current_priority {
            trace!(
                pid = record.id,
                waited,
                base = record.base_priority,
                priority = aged,
                "aging boost"
            );
        }
        record.current_priority = aged;
    }
}

impl SelectionRule for AgedPriority {
    fn name(&self) -> &'static str {
        "AGING"
    }

    fn evaluate(&self, record: &ProcessRecord, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(record.current_priority)
    }

    fn prepare(&self, ready: &mut [ProcessRecord], context: &SchedulingContext) {
        for record in ready.iter_mut() {
            self.age(record, context.current_time);
        }
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling with Aging"
    }
}
