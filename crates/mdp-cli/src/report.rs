use crate::cli::OutputFormat;
use crate::error::Result;
use mdpcheck::{Diagnostic, Severity};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// The diagnostics of one checked file, already filtered and sorted.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn new(path: PathBuf, mut diagnostics: Vec<Diagnostic>, min_severity: Severity) -> Self {
        diagnostics.retain(|d| d.severity >= min_severity);
        diagnostics.sort_by_key(|d| (d.range.line, d.range.start_column));
        Self { path, diagnostics }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub errors: usize,
    pub warnings: usize,
    pub information: usize,
}

impl Totals {
    pub fn of(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, report| Self {
            errors: acc.errors + report.count(Severity::Error),
            warnings: acc.warnings + report.count(Severity::Warning),
            information: acc.information + report.count(Severity::Information),
        })
    }
}

pub fn render(reports: &[FileReport], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(reports, out),
        OutputFormat::Json => render_json(reports, out),
    }
}

/// Compiler-style lines with 1-based positions, then a one-line summary.
fn render_text(reports: &[FileReport], out: &mut dyn Write) -> Result<()> {
    for report in reports {
        for d in &report.diagnostics {
            writeln!(
                out,
                "{}:{}:{}: {}[{}]: {}",
                report.path.display(),
                d.range.line + 1,
                d.range.start_column + 1,
                d.severity,
                d.code,
                d.message
            )?;
        }
    }

    let totals = Totals::of(reports);
    writeln!(
        out,
        "{} file(s) checked: {} error(s), {} warning(s), {} information",
        reports.len(),
        totals.errors,
        totals.warnings,
        totals.information
    )?;
    Ok(())
}

fn render_json(reports: &[FileReport], out: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(reports).map_err(anyhow::Error::from)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdpcheck::{DiagnosticCode, TextRange};

    fn sample_report() -> FileReport {
        FileReport::new(
            PathBuf::from("run.mdp"),
            vec![
                Diagnostic::information(
                    TextRange::document_start(),
                    DiagnosticCode::MissingRecommendedParameter,
                    "Recommended parameter not found: nstlist",
                ),
                Diagnostic::error(
                    TextRange::new(2, 5, 10),
                    DiagnosticCode::InvalidRealValue,
                    "Invalid real number value 'fast' for dt. Expected a decimal number",
                ),
                Diagnostic::warning(
                    TextRange::new(1, 0, 7),
                    DiagnosticCode::UnknownParameter,
                    "Unknown parameter: nstepz. Did you mean: nsteps?",
                ),
            ],
            Severity::Information,
        )
    }

    #[test]
    fn diagnostics_are_sorted_by_position() {
        let report = sample_report();
        let lines: Vec<usize> = report.diagnostics.iter().map(|d| d.line()).collect();
        assert_eq!(lines, vec![0, 1, 2]);
    }

    #[test]
    fn min_severity_filters_diagnostics() {
        let report = FileReport::new(
            PathBuf::from("run.mdp"),
            sample_report().diagnostics,
            Severity::Warning,
        );
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.count(Severity::Information), 0);
    }

    #[test]
    fn text_output_uses_one_based_positions() {
        let mut out = Vec::new();
        render(&[sample_report()], OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "run.mdp:1:1: information[missing-recommended-parameter]: Recommended parameter not found: nstlist"
        );
        assert_eq!(
            lines[1],
            "run.mdp:2:1: warning[unknown-parameter]: Unknown parameter: nstepz. Did you mean: nsteps?"
        );
        assert!(lines[2].starts_with("run.mdp:3:6: error[invalid-real-value]"));
        assert_eq!(
            lines[3],
            "1 file(s) checked: 1 error(s), 1 warning(s), 1 information"
        );
    }

    #[test]
    fn json_output_is_an_array_of_reports() {
        let mut out = Vec::new();
        render(&[sample_report()], OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["path"], "run.mdp");
        let first = &reports[0]["diagnostics"][0];
        assert_eq!(first["severity"], "information");
        assert_eq!(first["code"], "missing-recommended-parameter");
        assert_eq!(first["line"], 0);
        assert_eq!(reports[0]["diagnostics"][2]["startColumn"], 5);
    }
}
