//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates a single-CPU, non-preemptive dispatcher over a synthetic
//! workload and reports start, completion and waiting times per process.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ProcessRecord`,
//!   `ExecutionEvent`, `SchedulingRun`
//! - **`dispatching`**: Selection rules (SJF, priority with aging) and the
//!   shared time-advancement loop
//! - **`scheduler`**: `SjfScheduler`, `AgingPriorityScheduler`, `RunMetrics`,
//!   and the side-by-side `Simulation`
//! - **`workload`**: Workload sources (literal lists, seeded random)
//! - **`validation`**: Input integrity checks (IDs, bursts, priorities)
//! - **`config`**: Aging and workload parameters, JSON loading
//! - **`report`**: Plain-text rendering of workloads and runs
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessDescriptor;
//! use u_cpusched::scheduler::{RunMetrics, Scheduler, SjfScheduler};
//!
//! let workload = vec![
//!     ProcessDescriptor::new(1, 0, 8, 2),
//!     ProcessDescriptor::new(2, 1, 4, 1),
//!     ProcessDescriptor::new(3, 2, 2, 3),
//! ];
//! let run = SjfScheduler::new().schedule(&workload).unwrap();
//! let metrics = RunMetrics::calculate(&run);
//! assert_eq!(metrics.makespan, 14);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
