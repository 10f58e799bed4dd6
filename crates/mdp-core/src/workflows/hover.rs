use crate::core::catalog::categories::category_title;
use crate::core::catalog::{Catalog, ParameterDefinition};
use crate::core::syntax::line::{byte_offset, char_column};
use crate::core::utils::names;
use crate::engine::diagnostic::TextRange;
use std::fmt::Write;
use std::ops::Range;

const MANUAL_URL: &str = "https://manual.gromacs.org/current/user-guide/mdp-options.html";

/// Documentation for the parameter under a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    /// Markdown text.
    pub contents: String,
    /// The span of the resolved name on the hovered line.
    pub range: TextRange,
}

/// Resolves the parameter under `column` on `line` and documents it.
///
/// The word under the cursor (letters, digits, `-` and `_`) is looked up first;
/// if that is not a parameter, the line's leading token is tried instead, so
/// hovering over a value still documents the parameter being assigned.
/// Positions inside a trailing comment never produce a hover.
pub fn hover(catalog: &Catalog, line_number: usize, line: &str, column: usize) -> Option<Hover> {
    if let Some(comment_column) = line.find(';').map(|offset| char_column(line, offset)) {
        if column > comment_column {
            return None;
        }
    }

    let cursor = byte_offset(line, column);
    let (definition, span) = word_at(line, cursor)
        .and_then(|span| catalog.lookup(&line[span.clone()]).map(|d| (d, span)))
        .or_else(|| {
            let span = leading_token(line)?;
            catalog.lookup(&line[span.clone()]).map(|d| (d, span))
        })?;

    Some(Hover {
        contents: render_documentation(definition),
        range: TextRange::from_byte_span(line_number, line, &span),
    })
}

/// The full markdown page for a parameter: heading, description, property
/// table, valid values, an example assignment and a link to the GROMACS manual.
pub fn render_documentation(definition: &ParameterDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "### {} [{}]\n",
        definition.name,
        category_title(&definition.category)
    );
    if !definition.description.is_empty() {
        let _ = writeln!(out, "{}\n", definition.description);
    }

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    let _ = writeln!(out, "| Type | `{}` |", definition.kind);
    if let Some(default) = &definition.default_value {
        let _ = writeln!(out, "| Default | `{}`{} |", default, unit_suffix(definition));
    }
    if let Some(unit) = &definition.unit {
        let _ = writeln!(out, "| Unit | {} |", unit);
    }
    if let Some(range) = definition.effective_range() {
        let _ = writeln!(out, "| Range | {} |", range.describe());
    }
    if definition.multi_value {
        out.push_str("| Entries | one per group or lambda state |\n");
    }
    let _ = writeln!(out, "| Category | {} |", definition.category);

    if !definition.valid_values.is_empty() {
        out.push_str("\n#### Valid Values\n");
        for value in &definition.valid_values {
            let _ = writeln!(out, "- `{}`", value);
        }
    }

    out.push_str("\n#### Example\n");
    let _ = writeln!(
        out,
        "```mdp\n{} = {}\n```",
        definition.name,
        definition.example_value().unwrap_or("value")
    );

    out.push_str("\n---\n");
    let _ = write!(out, "[GROMACS Manual]({})", manual_link(definition));
    out
}

/// A compact markdown summary, used as completion documentation.
pub fn render_summary(definition: &ParameterDefinition) -> String {
    let mut out = format!("**{}**\n\n", definition.name);
    if !definition.description.is_empty() {
        let _ = write!(out, "{}\n\n", definition.description);
    }
    if let Some(default) = &definition.default_value {
        let _ = write!(out, "**Default:** {}{}\n\n", default, unit_suffix(definition));
    }
    let _ = write!(out, "**Type:** {}\n\n", definition.kind);
    if !definition.valid_values.is_empty() {
        let _ = write!(
            out,
            "**Valid values:** {}\n\n",
            definition.valid_values.join(", ")
        );
    }
    if let Some(range) = definition.effective_range() {
        let _ = write!(out, "**Range:** {}\n\n", range.describe());
    }
    if let Some(unit) = &definition.unit {
        let _ = write!(out, "**Unit:** {}\n\n", unit);
    }
    out.truncate(out.trim_end().len());
    out
}

/// Link to the parameter's entry in the online GROMACS manual.
pub fn manual_link(definition: &ParameterDefinition) -> String {
    format!("{}#mdp-{}", MANUAL_URL, names::hyphenated(&definition.name))
}

fn unit_suffix(definition: &ParameterDefinition) -> String {
    definition
        .unit
        .as_deref()
        .map(|unit| format!(" {}", unit))
        .unwrap_or_default()
}

fn word_at(line: &str, cursor: usize) -> Option<Range<usize>> {
    let start = line[..cursor]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| names::is_name_char(c))
        .last()
        .map_or(cursor, |(offset, _)| offset);
    let end = line[cursor..]
        .char_indices()
        .find(|&(_, c)| !names::is_name_char(c))
        .map_or(line.len(), |(offset, _)| cursor + offset);
    (start < end).then_some(start..end)
}

fn leading_token(line: &str) -> Option<Range<usize>> {
    let start = line.len() - line.trim_start().len();
    let len = line[start..]
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len() - start);
    (len > 0).then_some(start..start + len)
}
