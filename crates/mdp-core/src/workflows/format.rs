use crate::core::catalog::{Catalog, ParameterDefinition, ParameterType};
use crate::core::syntax::{AssignmentRecord, ParsedLine, parse_line};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Parameters whose whitespace-separated entries line up column by column,
/// one entry per coupling group or wall.
const ALIGNMENT_GROUPS: &[&[&str]] = &[
    &["tc-grps", "tau-t", "ref-t"],
    &["wall-atomtype", "wall-density"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Rewrite names to their catalog spelling (`tau_t` becomes `tau-t`).
    pub canonical_names: bool,
    /// Pad names so every `=` sits in the same column.
    pub align_names: bool,
    /// Start every trailing comment in the same column.
    pub align_comments: bool,
    /// Pad the entries of grouped multi-value parameters column-wise.
    pub align_groups: bool,
    /// Spaces between the longest assignment and the comment column.
    pub comment_gap: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            canonical_names: true,
            align_names: true,
            align_comments: true,
            align_groups: true,
            comment_gap: 2,
        }
    }
}

/// Replacement of one whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub line: usize,
    pub original: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    /// Only the lines that changed, in line order.
    pub edits: Vec<LineEdit>,
}

impl Formatted {
    pub fn is_changed(&self) -> bool {
        !self.edits.is_empty()
    }
}

struct Assignment<'a> {
    name: String,
    value: String,
    comment: Option<String>,
    definition: Option<&'a ParameterDefinition>,
}

/// Lays out a document canonically.
///
/// Blank lines become empty and comments get a single space after the `;`,
/// except `;;`-style section comments which are only trimmed. Assignments are
/// rewritten as `name = value` with normalized values, aligned names and aligned
/// trailing comments. Lines that are not assignments lose trailing whitespace
/// and are otherwise kept. Line endings are normalized to `\n`; a final newline
/// is kept if the input had one.
///
/// Formatting is idempotent: formatting the output again changes nothing.
#[instrument(skip_all, name = "format_workflow")]
pub fn format_document(catalog: &Catalog, text: &str, options: &FormatOptions) -> Formatted {
    let lines: Vec<&str> = text.lines().collect();
    let assignments: Vec<Option<Assignment>> = lines
        .iter()
        .enumerate()
        .map(|(line_number, line)| match parse_line(line_number, line) {
            ParsedLine::Assignment(record) => Some(prepare(catalog, record, options)),
            _ => None,
        })
        .collect();

    let column_widths = if options.align_groups {
        group_column_widths(&assignments)
    } else {
        HashMap::new()
    };

    let mut bodies: Vec<Option<String>> = Vec::with_capacity(lines.len());
    let name_width = if options.align_names {
        assignments
            .iter()
            .flatten()
            .map(|a| a.name.chars().count())
            .max()
            .unwrap_or(0)
    } else {
        0
    };
    for assignment in &assignments {
        bodies.push(assignment.as_ref().map(|a| {
            let value = match a.definition.and_then(|d| column_widths.get(d.name.as_str())) {
                Some(widths) => pad_columns(&a.value, widths),
                None => a.value.clone(),
            };
            format!("{:<width$} = {}", a.name, value, width = name_width)
        }));
    }

    let comment_column = bodies
        .iter()
        .flatten()
        .map(|body| body.chars().count())
        .max()
        .unwrap_or(0)
        + options.comment_gap;

    let mut formatted_lines = Vec::with_capacity(lines.len());
    let mut edits = Vec::new();
    for (line_number, original) in lines.iter().enumerate() {
        let formatted = match (&assignments[line_number], &bodies[line_number]) {
            (Some(assignment), Some(body)) => match &assignment.comment {
                Some(comment) if options.align_comments => {
                    format!("{:<width$}{}", body, comment, width = comment_column)
                }
                Some(comment) => {
                    format!("{}{}{}", body, " ".repeat(options.comment_gap), comment)
                }
                None => body.trim_end().to_string(),
            },
            _ => format_other_line(original),
        };
        if formatted != *original {
            edits.push(LineEdit {
                line: line_number,
                original: original.to_string(),
                replacement: formatted.clone(),
            });
        }
        formatted_lines.push(formatted);
    }

    let mut text_out = formatted_lines.join("\n");
    if text.ends_with('\n') {
        text_out.push('\n');
    }
    debug!("Formatting changed {} of {} lines", edits.len(), lines.len());
    Formatted {
        text: text_out,
        edits,
    }
}

/// Normalizes a single value for its parameter.
///
/// Booleans become `yes`/`no`, enum values take the catalog spelling, and
/// numbers are kept as written so precision is never altered. Multi-entry values
/// are normalized entry by entry and rejoined with single spaces.
pub fn normalize_value(definition: Option<&ParameterDefinition>, value: &str) -> String {
    let Some(definition) = definition else {
        return value.trim().to_string();
    };
    if value.split_whitespace().nth(1).is_some() {
        return value
            .split_whitespace()
            .map(|entry| normalize_entry(definition, entry))
            .collect::<Vec<_>>()
            .join(" ");
    }
    normalize_entry(definition, value.trim())
}

fn normalize_entry(definition: &ParameterDefinition, entry: &str) -> String {
    match definition.kind {
        ParameterType::Boolean => match entry.to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" | "1" => "yes".to_string(),
            "no" | "false" | "off" | "0" => "no".to_string(),
            _ => entry.to_string(),
        },
        ParameterType::Enum => definition
            .matching_value(entry)
            .unwrap_or(entry)
            .to_string(),
        _ => entry.to_string(),
    }
}

fn prepare<'a>(
    catalog: &'a Catalog,
    record: AssignmentRecord,
    options: &FormatOptions,
) -> Assignment<'a> {
    let definition = catalog.lookup(&record.parameter_name);
    let name = match definition {
        Some(definition) if options.canonical_names => definition.name.clone(),
        _ => record.parameter_name,
    };
    Assignment {
        name,
        value: normalize_value(definition, &record.raw_value),
        comment: record.trailing_comment,
        definition,
    }
}

fn group_column_widths(assignments: &[Option<Assignment>]) -> HashMap<&'static str, Vec<usize>> {
    let mut widths = HashMap::new();
    for group in ALIGNMENT_GROUPS {
        let mut columns: Vec<usize> = Vec::new();
        let members = assignments
            .iter()
            .flatten()
            .filter(|a| a.definition.is_some_and(|d| group.contains(&d.name.as_str())));
        for member in members {
            for (column, entry) in member.value.split_whitespace().enumerate() {
                let width = entry.chars().count();
                match columns.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => columns.push(width),
                }
            }
        }
        if !columns.is_empty() {
            for name in group.iter() {
                widths.insert(*name, columns.clone());
            }
        }
    }
    widths
}

fn pad_columns(value: &str, widths: &[usize]) -> String {
    let padded: Vec<String> = value
        .split_whitespace()
        .enumerate()
        .map(|(column, entry)| {
            let width = widths.get(column).copied().unwrap_or(0);
            format!("{:<width$}", entry, width = width)
        })
        .collect();
    padded.join(" ").trim_end().to_string()
}

fn format_other_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Some(content) = trimmed.strip_prefix(';') {
        if content.starts_with(';') {
            return trimmed.to_string();
        }
        let content = content.trim();
        return if content.is_empty() {
            ";".to_string()
        } else {
            format!("; {}", content)
        };
    }
    line.trim_end().to_string()
}
