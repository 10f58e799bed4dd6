use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::report::{self, FileReport, Totals};
use anyhow::Context;
use mdpcheck::{Catalog, Engine};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Validates every file in parallel and prints one combined report.
///
/// Fails with [`CliError::ProblemsFound`] when any error is reported, or any
/// warning when `deny_warnings` is set.
#[instrument(skip_all, fields(files = files.len()))]
pub fn run(
    files: &[PathBuf],
    catalog: &Catalog,
    config: &AppConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let engine = Engine::with_config(catalog, config.validation.clone());
    let min_severity = config.output.min_severity;

    let reports = files
        .par_iter()
        .map(|path| -> Result<FileReport> {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let diagnostics = engine.validate(&text);
            debug!(
                "{} produced {} diagnostic(s).",
                path.display(),
                diagnostics.len()
            );
            Ok(FileReport::new(path.clone(), diagnostics, min_severity))
        })
        .collect::<Result<Vec<_>>>()?;

    report::render(&reports, config.output.format, out)?;

    let totals = Totals::of(&reports);
    info!(
        "Checked {} file(s): {} error(s), {} warning(s).",
        reports.len(),
        totals.errors,
        totals.warnings
    );

    if totals.errors > 0 || (config.output.deny_warnings && totals.warnings > 0) {
        return Err(CliError::ProblemsFound {
            errors: totals.errors,
            warnings: totals.warnings,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::models::OutputSettings;
    use mdpcheck::{Severity, ValidationConfig};
    use std::fs;
    use tempfile::tempdir;

    fn config(format: OutputFormat, deny_warnings: bool) -> AppConfig {
        AppConfig {
            catalog_path: None,
            validation: ValidationConfig::default(),
            output: OutputSettings {
                format,
                min_severity: Severity::Warning,
                deny_warnings,
            },
        }
    }

    #[test]
    fn clean_files_pass() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("em.mdp");
        fs::write(
            &path,
            "integrator = steep\nnsteps = 5000\nnstlist = 10\ncoulombtype = PME\nfourierspacing = 0.12\nvdwtype = cut-off\n",
        )
        .unwrap();

        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        run(&[path], &catalog, &config(OutputFormat::Text, true), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.trim(),
            "1 file(s) checked: 0 error(s), 0 warning(s), 0 information"
        );
    }

    #[test]
    fn errors_fail_the_command_and_are_printed() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.mdp");
        let bad = dir.path().join("bad.mdp");
        fs::write(&good, "integrator = md\n").unwrap();
        fs::write(&bad, "integrator = md\ndt = fast\n").unwrap();

        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        let result = run(
            &[good, bad.clone()],
            &catalog,
            &config(OutputFormat::Text, false),
            &mut out,
        );

        assert!(matches!(
            result,
            Err(CliError::ProblemsFound {
                errors: 1,
                warnings: 0
            })
        ));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&format!("{}:2:6: error[invalid-real-value]", bad.display())));
    }

    #[test]
    fn warnings_fail_only_when_denied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nvt.mdp");
        fs::write(&path, "integrator = md\nnstepz = 100\n").unwrap();
        let catalog = Catalog::builtin().unwrap();

        let mut out = Vec::new();
        run(
            &[path.clone()],
            &catalog,
            &config(OutputFormat::Json, false),
            &mut out,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["diagnostics"][0]["code"], "unknown-parameter");

        let result = run(
            &[path],
            &catalog,
            &config(OutputFormat::Json, true),
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CliError::ProblemsFound { warnings: 1, .. })
        ));
    }

    #[test]
    fn unreadable_file_is_reported() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::builtin().unwrap();
        let result = run(
            &[dir.path().join("absent.mdp")],
            &catalog,
            &config(OutputFormat::Text, false),
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(CliError::Other(e)) if e.to_string().contains("absent.mdp")));
    }
}
