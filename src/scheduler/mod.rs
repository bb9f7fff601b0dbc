//! CPU schedulers and run metrics.
//!
//! Provides the two non-preemptive policies, run quality metrics, and a
//! facade that runs both policies over one workload.
//!
//! # Policies
//!
//! - `SjfScheduler`: Shortest Job First.
//! - `AgingPriorityScheduler`: smallest effective priority first, with aging
//!   to prevent starvation.
//!
//! Both are pure: each call clones the workload into fresh records and
//! returns an ordered dispatch log.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod aging;
mod kpi;
mod simulation;
mod sjf;

pub use aging::AgingPriorityScheduler;
pub use kpi::RunMetrics;
pub use simulation::{Simulation, SimulationOutcome};
pub use sjf::SjfScheduler;

use crate::error::Result;
use crate::models::{ProcessDescriptor, SchedulingRun};

/// A scheduling policy over a whole workload.
pub trait Scheduler {
    /// Validates the workload and produces the dispatch log.
    fn schedule(&self, workload: &[ProcessDescriptor]) -> Result<SchedulingRun>;

    /// Produces the dispatch log for a workload the caller already validated.
    fn schedule_validated(&self, workload: &[ProcessDescriptor]) -> SchedulingRun;
}
