//! Writer tests.

use fb_core::AgentId;
use fb_report::{Report, generate_report};
use fb_sim::{AgentStats, SimStats};

fn sample_report() -> Report {
    let stats: SimStats = [("A1", 1, 1.41421356), ("A2", 0, 0.0), ("A3", 2, 7.0)]
        .into_iter()
        .map(|(id, n, d)| (AgentId::new(id), AgentStats::from_totals(n, d)))
        .collect();
    generate_report(stats)
}

fn idle_report() -> Report {
    generate_report(
        [("A1", 0, 0.0)]
            .into_iter()
            .map(|(id, n, d)| (AgentId::new(id), AgentStats::from_totals(n, d)))
            .collect(),
    )
}

#[cfg(test)]
mod rows {
    use super::*;
    use crate::AgentReportRow;

    #[test]
    fn status_marks_only_best() {
        let rows = AgentReportRow::from_report(&sample_report());
        let status: Vec<_> = rows.iter().map(|r| r.status).collect();
        assert_eq!(status, ["best_agent", "", ""]);
    }

    #[test]
    fn no_status_without_winner() {
        let rows = AgentReportRow::from_report(&idle_report());
        assert!(rows.iter().all(|r| r.status.is_empty()));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CSV_HEADER;
    use crate::{CsvReportWriter, OutputError, ReportWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_and_rows() {
        let dir = tmp();
        let path = dir.path().join("top_agent.csv");
        let mut w = CsvReportWriter::create(&path).unwrap();
        w.write_report(&sample_report()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, CSV_HEADER);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "A1");
        assert_eq!(&rows[0][1], "1");
        assert_eq!(rows[0][2].parse::<f64>().unwrap(), 1.41);
        assert_eq!(&rows[0][4], "best_agent");
        assert_eq!(&rows[1][0], "A2");
        assert_eq!(rows[1][3].parse::<f64>().unwrap(), 0.0);
        assert_eq!(&rows[1][4], "");
    }

    #[test]
    fn in_memory_sink() {
        let mut w = CsvReportWriter::from_writer(Vec::new()).unwrap();
        w.write_report(&idle_report()).unwrap();
        let bytes = w.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("agent,packages_delivered,total_distance,efficiency,status"));
        assert!(lines.next().unwrap().starts_with("A1,0,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvReportWriter::create(&dir.path().join("r.csv")).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn write_after_finish_rejected() {
        let mut w = CsvReportWriter::from_writer(Vec::new()).unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_report(&sample_report()), Err(OutputError::Finished)));
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::{JsonReportWriter, OutputError, ReportWriter};

    fn render(report: &Report) -> serde_json::Value {
        let mut w = JsonReportWriter::from_writer(Vec::new());
        w.write_report(report).unwrap();
        w.finish().unwrap();
        serde_json::from_slice(&w.into_inner()).unwrap()
    }

    #[test]
    fn record_of_records() {
        let v = render(&sample_report());
        assert_eq!(v["A1"]["packages_delivered"], 1);
        assert_eq!(v["A1"]["total_distance"], 1.41);
        assert_eq!(v["A3"]["efficiency"], 3.5);
        assert_eq!(v["A2"]["efficiency"], 0.0);
        assert_eq!(v["best_agent"], "A1");
    }

    #[test]
    fn null_best_agent() {
        let v = render(&idle_report());
        assert!(v["best_agent"].is_null());
    }

    #[test]
    fn four_space_indent_and_order() {
        let mut w = JsonReportWriter::from_writer(Vec::new());
        w.write_report(&sample_report()).unwrap();
        let text = String::from_utf8(w.into_inner()).unwrap();
        assert!(text.starts_with("{\n    \"A1\": {\n        \"packages_delivered\": 1,"));
        let a1 = text.find("\"A1\"").unwrap();
        let a2 = text.find("\"A2\"").unwrap();
        let best = text.find("\"best_agent\"").unwrap();
        assert!(a1 < a2 && a2 < best);
    }

    #[test]
    fn single_document_per_sink() {
        let mut w = JsonReportWriter::from_writer(Vec::new());
        w.write_report(&sample_report()).unwrap();
        assert!(matches!(w.write_report(&sample_report()), Err(OutputError::AlreadyWritten)));
    }

    #[test]
    fn write_after_finish_rejected() {
        let mut w = JsonReportWriter::from_writer(Vec::new());
        w.finish().unwrap();
        assert!(matches!(w.write_report(&sample_report()), Err(OutputError::Finished)));
    }

    #[test]
    fn file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut w = JsonReportWriter::create(&path).unwrap();
        w.write_report(&sample_report()).unwrap();
        w.finish().unwrap();
        let v: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["best_agent"], "A1");
    }
}
