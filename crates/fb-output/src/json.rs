//! JSON output backend.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fb_report::Report;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// Writes a report as one pretty-printed JSON object (4-space indent).
///
/// A sink holds a single document, so a second `write_report` is rejected.
pub struct JsonReportWriter<W: Write = BufWriter<File>> {
    sink:     W,
    written:  bool,
    finished: bool,
}

impl JsonReportWriter<BufWriter<File>> {
    /// Create (or truncate) the JSON file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonReportWriter<W> {
    pub fn from_writer(sink: W) -> Self {
        Self { sink, written: false, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        if self.written {
            return Err(OutputError::AlreadyWritten);
        }
        let mut ser = serde_json::Serializer::with_formatter(&mut self.sink, PrettyFormatter::with_indent(b"    "));
        report.serialize(&mut ser)?;
        self.sink.write_all(b"\n")?;
        self.written = true;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sink.flush()?;
        Ok(())
    }
}
