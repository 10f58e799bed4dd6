use crate::core::catalog::Catalog;
use crate::core::syntax::line::{byte_offset, leading_name};
use crate::core::syntax::{ParsedLine, parse_line};
use crate::core::utils::similarity::{self, SuggestionPolicy};
use crate::engine::diagnostic::{Diagnostic, DiagnosticCode, TextRange};

/// A change to the document. Line numbers refer to the text the fix was
/// computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Replace the characters of `range` with `new_text`.
    Replace { range: TextRange, new_text: String },
    /// Remove a whole line, including its line break.
    DeleteLine { line: usize },
    /// Insert `text` as a new line before `line`; `line` equal to the line
    /// count appends at the end.
    InsertLine { line: usize, text: String },
}

impl TextEdit {
    fn line(&self) -> usize {
        match self {
            TextEdit::Replace { range, .. } => range.line,
            TextEdit::DeleteLine { line } | TextEdit::InsertLine { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFix {
    pub title: String,
    pub edits: Vec<TextEdit>,
}

impl QuickFix {
    fn new(title: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            title: title.into(),
            edits: vec![edit],
        }
    }

    /// Applies the fix to `text`, returning the edited document.
    pub fn apply(&self, text: &str) -> String {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        let mut edits: Vec<&TextEdit> = self.edits.iter().collect();
        edits.sort_by_key(|edit| std::cmp::Reverse(edit.line()));

        for edit in edits {
            match edit {
                TextEdit::Replace { range, new_text } => {
                    if let Some(line) = lines.get_mut(range.line) {
                        let start = byte_offset(line, range.start_column);
                        let end = byte_offset(line, range.end_column).max(start);
                        line.replace_range(start..end, new_text);
                    }
                }
                TextEdit::DeleteLine { line } => {
                    if *line < lines.len() {
                        lines.remove(*line);
                    }
                }
                TextEdit::InsertLine { line, text } => {
                    let at = (*line).min(lines.len());
                    lines.insert(at, text.clone());
                }
            }
        }

        let mut out = lines.join("\n");
        if text.ends_with('\n') || (text.is_empty() && !out.is_empty()) {
            out.push('\n');
        }
        out
    }
}

/// Candidate fixes for one diagnostic produced from `text`.
///
/// Codes without an automatic fix, and diagnostics whose line no longer matches
/// what the fix expects, yield an empty list.
pub fn quick_fixes(
    catalog: &Catalog,
    text: &str,
    diagnostic: &Diagnostic,
    policy: SuggestionPolicy,
) -> Vec<QuickFix> {
    let Some(line) = text.lines().nth(diagnostic.range.line) else {
        return match diagnostic.code {
            DiagnosticCode::MissingRequiredParameter => add_required(catalog, text, diagnostic),
            _ => Vec::new(),
        };
    };

    match diagnostic.code {
        DiagnosticCode::UnknownParameter => rename_unknown(catalog, line, diagnostic, policy),
        DiagnosticCode::InvalidEnumValue => replace_enum_value(catalog, line, diagnostic, policy),
        DiagnosticCode::MissingEquals => insert_equals(line, diagnostic.range.line),
        DiagnosticCode::DuplicateParameter => vec![QuickFix::new(
            "Remove duplicate parameter",
            TextEdit::DeleteLine {
                line: diagnostic.range.line,
            },
        )],
        DiagnosticCode::MissingRequiredParameter => add_required(catalog, text, diagnostic),
        DiagnosticCode::InvalidFormat => vec![QuickFix::new(
            "Comment out invalid line",
            TextEdit::Replace {
                range: TextRange::whole_line(diagnostic.range.line, line),
                new_text: format!("{}; {}", indentation(line), line.trim()),
            },
        )],
        _ => Vec::new(),
    }
}

fn rename_unknown(
    catalog: &Catalog,
    line: &str,
    diagnostic: &Diagnostic,
    policy: SuggestionPolicy,
) -> Vec<QuickFix> {
    let Some(span) = leading_name(line) else {
        return Vec::new();
    };
    let name_range = TextRange::from_byte_span(diagnostic.range.line, line, &span);

    let mut fixes: Vec<QuickFix> = similarity::suggest(&line[span], catalog.all_names(), policy)
        .into_iter()
        .map(|suggestion| {
            QuickFix::new(
                format!("Replace with '{}'", suggestion),
                TextEdit::Replace {
                    range: name_range,
                    new_text: suggestion.to_string(),
                },
            )
        })
        .collect();
    fixes.push(QuickFix::new(
        "Delete this line",
        TextEdit::DeleteLine {
            line: diagnostic.range.line,
        },
    ));
    fixes
}

fn replace_enum_value(
    catalog: &Catalog,
    line: &str,
    diagnostic: &Diagnostic,
    policy: SuggestionPolicy,
) -> Vec<QuickFix> {
    let ParsedLine::Assignment(record) = parse_line(diagnostic.range.line, line) else {
        return Vec::new();
    };
    let Some(definition) = catalog.lookup(&record.parameter_name) else {
        return Vec::new();
    };
    let value_range = TextRange::from_byte_span(record.line_number, line, &record.value_span);

    let mut fixes: Vec<QuickFix> = similarity::suggest(
        &record.raw_value,
        definition.valid_values.iter().map(String::as_str),
        policy,
    )
    .into_iter()
    .map(|suggestion| {
        QuickFix::new(
            format!("Replace with '{}'", suggestion),
            TextEdit::Replace {
                range: value_range,
                new_text: suggestion.to_string(),
            },
        )
    })
    .collect();

    if let Some(default) = &definition.default_value {
        fixes.push(QuickFix::new(
            format!("Use default value '{}'", default),
            TextEdit::Replace {
                range: value_range,
                new_text: default.clone(),
            },
        ));
    }
    fixes
}

fn insert_equals(line: &str, line_number: usize) -> Vec<QuickFix> {
    let Some(span) = leading_name(line) else {
        return Vec::new();
    };
    let rest = line[span.end..].trim();
    let rewritten = format!("{}{} = {}", indentation(line), &line[span], rest);
    vec![QuickFix::new(
        "Add missing \"=\"",
        TextEdit::Replace {
            range: TextRange::whole_line(line_number, line),
            new_text: rewritten.trim_end().to_string(),
        },
    )]
}

fn add_required(catalog: &Catalog, text: &str, diagnostic: &Diagnostic) -> Vec<QuickFix> {
    let Some(name) = diagnostic
        .message
        .strip_prefix("Missing required parameter: ")
        .map(str::trim)
    else {
        return Vec::new();
    };
    let default = catalog
        .lookup(name)
        .and_then(|definition| definition.default_value.as_deref())
        .unwrap_or_default();

    vec![QuickFix::new(
        format!("Add required parameter '{}'", name),
        TextEdit::InsertLine {
            line: text.lines().count(),
            text: format!("{} = {}", name, default).trim_end().to_string(),
        },
    )]
}

fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
