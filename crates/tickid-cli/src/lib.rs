//! Shared pieces of the `tickid` and `tickid-bench` binaries.

pub mod explain;
pub mod telemetry;

pub use explain::Explanation;
