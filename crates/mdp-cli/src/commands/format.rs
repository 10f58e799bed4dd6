use crate::cli::FormatMode;
use crate::error::{CliError, Result};
use anyhow::Context;
use mdpcheck::Catalog;
use mdpcheck::workflows::format::{FormatOptions, format_document};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(path: &Path, mode: FormatMode, catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let formatted = format_document(catalog, &text, &FormatOptions::default());
    info!(
        "{} line(s) of {} would change.",
        formatted.edits.len(),
        path.display()
    );

    if mode.check {
        if formatted.is_changed() {
            for edit in &formatted.edits {
                writeln!(out, "{}:{}:", path.display(), edit.line + 1)?;
                writeln!(out, "- {}", edit.original)?;
                writeln!(out, "+ {}", edit.replacement)?;
            }
            return Err(CliError::Unformatted(path.to_path_buf()));
        }
        return Ok(());
    }

    if mode.write {
        if formatted.is_changed() {
            std::fs::write(path, &formatted.text)?;
            info!("Rewrote {}.", path.display());
        }
        return Ok(());
    }

    out.write_all(formatted.text.as_bytes())?;
    Ok(())
}
