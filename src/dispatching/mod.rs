//! Selection rules and the shared dispatch loop.
//!
//! A [`SelectionRule`] decides which ready process gets the CPU next. The
//! [`Dispatcher`] owns the single-CPU, non-preemptive time-advancement loop
//! and delegates only the choice (and optional queue preparation) to the rule.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{Dispatcher, rules};
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let workload = vec![
//!     ProcessDescriptor::new(1, 0, 8, 1),
//!     ProcessDescriptor::new(2, 1, 4, 1),
//!     ProcessDescriptor::new(3, 2, 2, 1),
//! ];
//! let run = Dispatcher::new(rules::ShortestBurst).run(&workload).unwrap();
//! assert_eq!(run.dispatch_order(), vec![1, 3, 2]);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::Dispatcher;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A rule that picks the next process from the ready queue.
///
/// # Score Convention
/// **Lower score = dispatched first.** Ties are broken by ready-queue
/// position: the first minimal record found wins.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready record at the current time.
    fn evaluate(&self, record: &ProcessRecord, context: &SchedulingContext) -> RuleScore;

    /// Updates ready records before each selection.
    fn prepare(&self, _ready: &mut [ProcessRecord], _context: &SchedulingContext) {}

    /// Called after `dispatched` leaves the queue and before its burst runs.
    fn on_dispatch(&self, _dispatched: &ProcessRecord, _ready: &mut [ProcessRecord]) {}

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Index of the first record with the minimal score.
///
/// Ties resolve to the lower index. Returns `None` for an empty queue.
pub fn select_first_min<R: SelectionRule + ?Sized>(
    rule: &R,
    ready: &[ProcessRecord],
    context: &SchedulingContext,
) -> Option<usize> {
    ready
        .iter()
        .enumerate()
        .min_by_key(|&(idx, record)| (rule.evaluate(record, context), idx))
        .map(|(idx, _)| idx)
}
