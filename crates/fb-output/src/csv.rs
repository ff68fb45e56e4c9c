//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use fb_report::Report;

use crate::row::AgentReportRow;
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

pub const CSV_HEADER: [&str; 5] = ["agent", "packages_delivered", "total_distance", "efficiency", "status"];

/// Writes reports as a flat table, one row per agent.
///
/// The header is written once, when the writer is created, so a sink that
/// receives several reports holds one table.
pub struct CsvReportWriter<W: Write = File> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvReportWriter<File> {
    /// Create (or truncate) the CSV file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvReportWriter<W> {
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut inner = csv::WriterBuilder::new().has_headers(false).from_writer(sink);
        inner.write_record(CSV_HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in AgentReportRow::from_report(report) {
            self.inner.serialize(&row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
