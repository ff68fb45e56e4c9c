//! The `ReportWriter` trait implemented by all backend writers.

use fb_report::Report;

use crate::OutputResult;

pub trait ReportWriter {
    /// Serialize one report.
    fn write_report(&mut self, report: &Report) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
