use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::analysis::GraphAnalysis;

pub const CSV_HEADER: &str = "k,dk,alpha_approx,alpha_exact";

pub trait ReportWriter {
    fn try_write_json<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;

    /// One `k,dk,alpha_approx,alpha_exact` line per curve point; `alpha_exact` is left empty
    /// if unknown. The header is only written if `with_header` is set.
    fn try_write_csv<W: Write>(&self, writer: W, with_header: bool) -> Result<(), std::io::Error>;

    fn try_write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_json(&mut writer)?;
        writer.flush()
    }

    fn try_write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_csv(&mut writer, true)?;
        writer.flush()
    }
}

impl ReportWriter for GraphAnalysis {
    fn try_write_json<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)
    }

    fn try_write_csv<W: Write>(
        &self,
        mut writer: W,
        with_header: bool,
    ) -> Result<(), std::io::Error> {
        if with_header {
            writeln!(writer, "{CSV_HEADER}")?;
        }

        for point in &self.points {
            write!(writer, "{},{},{},", point.k, point.dk, point.alpha_approx)?;
            if let Some(alpha) = point.alpha_exact {
                write!(writer, "{alpha}")?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

/// Writes several analyses as one JSON array
pub fn try_write_json_reports<W: Write>(
    mut writer: W,
    reports: &[GraphAnalysis],
) -> Result<(), std::io::Error> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writeln!(writer)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{analysis::AnalysisConfig, graph::*, testing::*};

    #[test]
    fn csv() {
        let analysis =
            GraphAnalysis::new("diamond", &diamond_graph(), &AnalysisConfig::default());
        let mut buffer = Vec::new();
        analysis.try_write_csv(&mut buffer, true).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "k,dk,alpha_approx,alpha_exact\n0,2,3,3\n1,2,3,3\n2,2,3,3\n3,2,3,3\n"
        );

        let config = AnalysisConfig {
            exact: false,
            max_k: Some(1),
            ..Default::default()
        };
        let analysis = GraphAnalysis::new("diamond", &diamond_graph(), &config);
        let mut buffer = Vec::new();
        analysis.try_write_csv(&mut buffer, false).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0,2,3,\n1,2,3,\n");
    }

    #[test]
    fn json_files() {
        let dir = tempfile::tempdir().unwrap();
        let reports = [
            GraphAnalysis::new("K5", &CsrGraph::complete(5), &AnalysisConfig::default()),
            GraphAnalysis::new("C6", &CsrGraph::cycle(6), &AnalysisConfig::default()),
        ];

        let path = dir.path().join("k5.json");
        reports[0].try_write_json_file(&path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["name"], "K5");
        assert_eq!(value["number_of_edges"], 10);

        let mut buffer = Vec::new();
        try_write_json_reports(&mut buffer, &reports).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[1]["degeneracy"], 2);

        let path = dir.path().join("c6.csv");
        reports[1].try_write_csv_file(&path).unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 7);
        assert!(csv.starts_with(CSV_HEADER));
    }
}
