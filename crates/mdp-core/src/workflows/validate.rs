use crate::core::catalog::Catalog;
use crate::core::syntax::{AssignmentRecord, ParsedLine, SyntaxIssue, parse_document};
use crate::core::utils::similarity;
use crate::engine::config::ValidationConfig;
use crate::engine::dependencies::{self, DocumentParameters};
use crate::engine::diagnostic::{Diagnostic, DiagnosticCode, TextRange};
use crate::engine::validator;
use tracing::{debug, instrument};

/// Validates mdp documents against a borrowed catalog.
///
/// An engine is cheap to build and holds no per-document state, so one instance
/// can serve any number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Engine<'c> {
    catalog: &'c Catalog,
    config: ValidationConfig,
}

impl<'c> Engine<'c> {
    /// Creates an engine with the stock rule set.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_config(catalog, ValidationConfig::default())
    }

    pub fn with_config(catalog: &'c Catalog, config: ValidationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a whole document. See [`run`].
    pub fn validate(&self, text: &str) -> Vec<Diagnostic> {
        run(self.catalog, &self.config, text)
    }
}

/// Runs the complete diagnostic pass over `text`.
///
/// Every line is classified first. Syntax problems and per-assignment findings
/// (unknown names, bad values) come out in line order, followed by the
/// document-wide checks: duplicates, companion parameters, then required and
/// recommended parameters. Codes disabled in `config` are dropped.
///
/// The pass never fails. Any input, including an empty document, yields a
/// (possibly empty) list, and identical input always yields an identical list.
#[instrument(skip_all, name = "validation_workflow")]
pub fn run(catalog: &Catalog, config: &ValidationConfig, text: &str) -> Vec<Diagnostic> {
    let lines: Vec<&str> = text.lines().collect();
    let parsed = parse_document(text);

    let mut diagnostics = Vec::new();
    let mut records = Vec::new();

    for (line_number, outcome) in parsed.into_iter().enumerate() {
        match outcome {
            ParsedLine::Ignored => {}
            ParsedLine::Malformed(issue) => {
                diagnostics.push(syntax_diagnostic(issue, line_number, lines[line_number]));
            }
            ParsedLine::Assignment(record) => {
                diagnostics.extend(check_assignment(catalog, config, &record));
                records.push(record);
            }
        }
    }
    debug!(
        "Classified {} lines: {} assignments, {} line diagnostics",
        lines.len(),
        records.len(),
        diagnostics.len()
    );

    let parameters = DocumentParameters::collect(catalog, &records);
    diagnostics.extend(dependencies::check_duplicates(&parameters));
    diagnostics.extend(dependencies::check_companions(&parameters));
    diagnostics.extend(dependencies::check_presence(&parameters, config));

    diagnostics.retain(|diagnostic| config.is_enabled(diagnostic.code));
    debug!("Validation finished with {} diagnostics", diagnostics.len());
    diagnostics
}

fn syntax_diagnostic(issue: SyntaxIssue, line_number: usize, line: &str) -> Diagnostic {
    let range = TextRange::whole_line(line_number, line);
    match issue {
        SyntaxIssue::MissingEquals => Diagnostic::error(
            range,
            DiagnosticCode::MissingEquals,
            "Missing \"=\" in parameter assignment. Expected format: parameter = value",
        ),
        SyntaxIssue::InvalidFormat => Diagnostic::error(
            range,
            DiagnosticCode::InvalidFormat,
            "Invalid parameter line format. Expected: parameter = value",
        ),
        SyntaxIssue::InvalidCharacters => Diagnostic::warning(
            range,
            DiagnosticCode::InvalidCharacters,
            "Line contains unsupported characters or invalid syntax",
        ),
    }
}

fn check_assignment(
    catalog: &Catalog,
    config: &ValidationConfig,
    record: &AssignmentRecord,
) -> Option<Diagnostic> {
    let name_range =
        TextRange::from_byte_span(record.line_number, &record.raw_line, &record.name_span);

    let Some(definition) = catalog.lookup(&record.parameter_name) else {
        let mut message = format!("Unknown parameter: {}", record.parameter_name);
        let suggestions = similarity::suggest(
            &record.parameter_name,
            catalog.all_names(),
            config.suggestions,
        );
        if !suggestions.is_empty() {
            message.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
        }
        return Some(Diagnostic::warning(
            name_range,
            DiagnosticCode::UnknownParameter,
            message,
        ));
    };

    let issue = validator::check_value(definition, &record.raw_value, config.suggestions)?;
    let range = if record.has_value() {
        TextRange::from_byte_span(record.line_number, &record.raw_line, &record.value_span)
    } else {
        name_range
    };
    Some(Diagnostic::new(range, issue.severity, issue.code, issue.message))
}
