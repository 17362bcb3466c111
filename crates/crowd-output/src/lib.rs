//! `crowd-output` — simulation output writers for the `rust_crowd` framework.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                  | Contents                                        |
//! |-----------------------|-------------------------------------------------|
//! | `agent_snapshots.csv` | One row per agent per captured snapshot         |
//! | `tick_summaries.csv`  | One aggregate row per captured snapshot         |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`CrowdOutputObserver`], which implements `crowd_sim::CrowdObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crowd_output::{CrowdOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CrowdOutputObserver::new(writer);
//! sim.run_ticks(600, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CrowdOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
