//! `fb-output`: report writers for the fastbox delivery simulator.
//!
//! | Writer              | Layout                                             |
//! |---------------------|----------------------------------------------------|
//! | [`JsonReportWriter`] | one object: agent id → stats, plus `best_agent`   |
//! | [`CsvReportWriter`]  | one row per agent, `status` marks the best agent  |
//!
//! Both implement [`ReportWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use fb_output::{CsvReportWriter, JsonReportWriter, ReportWriter};
//!
//! let mut json = JsonReportWriter::create(Path::new("output/report.json"))?;
//! json.write_report(&report)?;
//! json.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonReportWriter;
pub use row::AgentReportRow;
pub use writer::ReportWriter;
