//! Plain-text rendering of workloads and runs.
//!
//! Each adapter borrows its data and implements [`Display`]; nothing here
//! feeds back into scheduling. Run headers come from
//! [`SchedulingRun::title`], which the dispatcher fills from its rule's
//! description.

use std::fmt::{self, Display, Formatter};

use crate::models::{ProcessDescriptor, SchedulingRun};
use crate::scheduler::SimulationOutcome;

/// Input workload as a table.
#[derive(Debug, Clone, Copy)]
pub struct ProcessTable<'a>(pub &'a [ProcessDescriptor]);

impl Display for ProcessTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Processes:")?;
        writeln!(f, "{:>5}{:>10}{:>10}{:>10}", "ID", "Arrival", "Burst", "Priority")?;
        for p in self.0 {
            writeln!(
                f,
                "{:>5}{:>10}{:>10}{:>10}",
                p.id, p.arrival_time, p.burst_time, p.priority
            )?;
        }
        Ok(())
    }
}

/// SJF dispatch log with the average waiting time.
#[derive(Debug, Clone, Copy)]
pub struct SjfReport<'a>(pub &'a SchedulingRun);

impl Display for SjfReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.title)?;
        for e in &self.0.events {
            writeln!(
                f,
                "Process {}: start {}, completion {}, waiting {}",
                e.process_id, e.start_time, e.completion_time, e.waiting_time
            )?;
        }
        writeln!(
            f,
            "Average waiting time: {:.2}",
            self.0.average_waiting_time()
        )
    }
}

/// Aging dispatch log with base and effective priorities.
#[derive(Debug, Clone, Copy)]
pub struct AgingReport<'a>(pub &'a SchedulingRun);

impl Display for AgingReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.title)?;
        for e in &self.0.events {
            writeln!(
                f,
                "Process {}: base priority {}, current priority {}, burst {}, waiting {}",
                e.process_id, e.base_priority, e.current_priority, e.burst_time, e.waiting_time
            )?;
        }
        writeln!(
            f,
            "Average waiting time: {:.2}",
            self.0.average_waiting_time()
        )
    }
}

/// Full report: workload table followed by both runs.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeReport<'a>(pub &'a SimulationOutcome);

impl Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ProcessTable(&self.0.workload))?;
        writeln!(f, "{}", SjfReport(&self.0.sjf))?;
        write!(f, "{}", AgingReport(&self.0.aging))
    }
}
