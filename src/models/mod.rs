//! Simulation domain models.
//!
//! Provides the data types for workloads and for the dispatch logs the
//! scheduling policies produce.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Workload input (immutable) |
//! | `ProcessRecord` | Per-run mutable process state |
//! | `ExecutionEvent` | One non-preemptive dispatch |
//! | `SchedulingRun` | Ordered dispatch log of one policy |

mod process;
mod run;

pub use process::{Priority, ProcessDescriptor, ProcessId, ProcessRecord, ProcessState, Ticks};
pub use run::{ExecutionEvent, SchedulingRun};
