use crate::core::syntax::line::char_column;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// How serious a finding is.
///
/// Variants are ordered by importance, so `Severity::Error > Severity::Warning`
/// and a minimum-severity filter is a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A stylistic or best-practice hint.
    Information,
    /// A likely mistake that does not make the file unusable.
    Warning,
    /// The configuration is invalid as written.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Information => "information",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "information" | "info" | "hint" => Ok(Severity::Information),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

/// Machine-readable category of a diagnostic, serialized in kebab-case
/// (e.g. `unknown-parameter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    MissingEquals,
    InvalidFormat,
    InvalidCharacters,
    UnknownParameter,
    DuplicateParameter,
    MissingValue,
    EmptyValue,
    InvalidEnumValue,
    InvalidBooleanValue,
    InvalidIntegerValue,
    InvalidRealValue,
    ValueBelowMinimum,
    ValueAboveMaximum,
    InvalidPathSeparator,
    InvalidGroupName,
    MissingDependentParameter,
    MissingRequiredParameter,
    MissingRecommendedParameter,
}

impl DiagnosticCode {
    pub const ALL: [DiagnosticCode; 18] = [
        DiagnosticCode::MissingEquals,
        DiagnosticCode::InvalidFormat,
        DiagnosticCode::InvalidCharacters,
        DiagnosticCode::UnknownParameter,
        DiagnosticCode::DuplicateParameter,
        DiagnosticCode::MissingValue,
        DiagnosticCode::EmptyValue,
        DiagnosticCode::InvalidEnumValue,
        DiagnosticCode::InvalidBooleanValue,
        DiagnosticCode::InvalidIntegerValue,
        DiagnosticCode::InvalidRealValue,
        DiagnosticCode::ValueBelowMinimum,
        DiagnosticCode::ValueAboveMaximum,
        DiagnosticCode::InvalidPathSeparator,
        DiagnosticCode::InvalidGroupName,
        DiagnosticCode::MissingDependentParameter,
        DiagnosticCode::MissingRequiredParameter,
        DiagnosticCode::MissingRecommendedParameter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::MissingEquals => "missing-equals",
            DiagnosticCode::InvalidFormat => "invalid-format",
            DiagnosticCode::InvalidCharacters => "invalid-characters",
            DiagnosticCode::UnknownParameter => "unknown-parameter",
            DiagnosticCode::DuplicateParameter => "duplicate-parameter",
            DiagnosticCode::MissingValue => "missing-value",
            DiagnosticCode::EmptyValue => "empty-value",
            DiagnosticCode::InvalidEnumValue => "invalid-enum-value",
            DiagnosticCode::InvalidBooleanValue => "invalid-boolean-value",
            DiagnosticCode::InvalidIntegerValue => "invalid-integer-value",
            DiagnosticCode::InvalidRealValue => "invalid-real-value",
            DiagnosticCode::ValueBelowMinimum => "value-below-minimum",
            DiagnosticCode::ValueAboveMaximum => "value-above-maximum",
            DiagnosticCode::InvalidPathSeparator => "invalid-path-separator",
            DiagnosticCode::InvalidGroupName => "invalid-group-name",
            DiagnosticCode::MissingDependentParameter => "missing-dependent-parameter",
            DiagnosticCode::MissingRequiredParameter => "missing-required-parameter",
            DiagnosticCode::MissingRecommendedParameter => "missing-recommended-parameter",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

/// A span on a single line. Line and columns are zero-based; columns count
/// characters and `end_column` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl TextRange {
    pub fn new(line: usize, start_column: usize, end_column: usize) -> Self {
        Self {
            line,
            start_column,
            end_column,
        }
    }

    /// The empty range at the start of the document, used for findings about the
    /// document as a whole.
    pub fn document_start() -> Self {
        Self::new(0, 0, 0)
    }

    /// The whole of `text` on `line`.
    pub fn whole_line(line: usize, text: &str) -> Self {
        Self::new(line, 0, text.chars().count())
    }

    /// Converts a byte span of `text` into a character range.
    pub fn from_byte_span(line: usize, text: &str, span: &Range<usize>) -> Self {
        Self::new(line, char_column(text, span.start), char_column(text, span.end))
    }
}

/// A single finding. Diagnostics are plain derived data: they carry no identity
/// and are never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub range: TextRange,
    pub severity: Severity,
    pub message: String,
    pub code: DiagnosticCode,
}

impl Diagnostic {
    pub fn new(
        range: TextRange,
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity,
            message: message.into(),
            code,
        }
    }

    pub fn error(range: TextRange, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Error, code, message)
    }

    pub fn warning(range: TextRange, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Warning, code, message)
    }

    pub fn information(range: TextRange, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(range, Severity::Information, code, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn line(&self) -> usize {
        self.range.line
    }
}
