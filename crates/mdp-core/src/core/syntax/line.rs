use crate::core::utils::names;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9_-]*)\s*=\s*([^;]*?)\s*(;.*)?$")
        .expect("internal assignment grammar must compile")
});

/// One `name = value [; comment]` line.
///
/// Spans are byte ranges into `raw_line`. Records are rebuilt on every pass and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Zero-based line index within the document.
    pub line_number: usize,
    pub raw_line: String,
    /// The name exactly as typed; it may be misspelled or unknown.
    pub parameter_name: String,
    /// The value with surrounding whitespace and any comment removed.
    pub raw_value: String,
    /// The trailing comment including its leading `;`, trimmed.
    pub trailing_comment: Option<String>,
    pub name_span: Range<usize>,
    pub value_span: Range<usize>,
}

impl AssignmentRecord {
    pub fn has_value(&self) -> bool {
        !self.raw_value.is_empty()
    }
}

/// Why a non-comment line could not be read as an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxIssue {
    /// A name-like token with no `=` anywhere on the line.
    MissingEquals,
    /// A name-like token and an `=`, but not in `name = value` shape.
    InvalidFormat,
    /// No leading name and characters outside the mdp alphabet.
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Ignored,
    Assignment(AssignmentRecord),
    Malformed(SyntaxIssue),
}

/// Classifies a single line.
///
/// Blank lines and lines whose first non-whitespace character is `;` are
/// ignored. Lines that do not start with a letter are only reported when they
/// contain characters outside `[\s\w=;.-]`; otherwise they are ignored too.
pub fn parse_line(line_number: usize, line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(';') {
        return ParsedLine::Ignored;
    }

    if let Some(captures) = ASSIGNMENT.captures(line) {
        if let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) {
            return ParsedLine::Assignment(AssignmentRecord {
                line_number,
                raw_line: line.to_string(),
                parameter_name: name.as_str().to_string(),
                raw_value: value.as_str().trim().to_string(),
                trailing_comment: captures.get(3).map(|c| c.as_str().trim().to_string()),
                name_span: name.range(),
                value_span: value.range(),
            });
        }
    }

    let starts_with_name = trimmed
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    if starts_with_name {
        if trimmed.contains('=') {
            ParsedLine::Malformed(SyntaxIssue::InvalidFormat)
        } else {
            ParsedLine::Malformed(SyntaxIssue::MissingEquals)
        }
    } else if trimmed.chars().any(is_disallowed_char) {
        ParsedLine::Malformed(SyntaxIssue::InvalidCharacters)
    } else {
        ParsedLine::Ignored
    }
}

/// Classifies every line of `text`; the result is indexed by line number.
pub fn parse_document(text: &str) -> Vec<ParsedLine> {
    text.lines()
        .enumerate()
        .map(|(line_number, line)| parse_line(line_number, line))
        .collect()
}

/// Converts a byte offset within `line` into a character column.
pub fn char_column(line: &str, byte_offset: usize) -> usize {
    let end = byte_offset.min(line.len());
    line.get(..end).map_or(end, |prefix| prefix.chars().count())
}

/// Converts a character column into a byte offset, clamped to the line length.
pub fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}

/// The leading name-like token of a line, as a byte range, if the line starts
/// with a letter after optional whitespace.
pub fn leading_name(line: &str) -> Option<Range<usize>> {
    let start = line.len() - line.trim_start().len();
    let rest = &line[start..];
    if !rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let len = rest
        .char_indices()
        .find(|&(_, c)| !names::is_name_char(c))
        .map_or(rest.len(), |(offset, _)| offset);
    Some(start..start + len)
}

fn is_disallowed_char(c: char) -> bool {
    !(c.is_whitespace() || c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | ';' | '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(line: &str) -> AssignmentRecord {
        match parse_line(0, line) {
            ParsedLine::Assignment(record) => record,
            other => panic!("expected assignment for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        assert_eq!(parse_line(0, ""), ParsedLine::Ignored);
        assert_eq!(parse_line(0, "   \t"), ParsedLine::Ignored);
        assert_eq!(parse_line(0, "; run control"), ParsedLine::Ignored);
        assert_eq!(parse_line(0, "   ;;; Section"), ParsedLine::Ignored);
    }

    #[test]
    fn simple_assignment_is_parsed() {
        let record = assignment("integrator = md");
        assert_eq!(record.parameter_name, "integrator");
        assert_eq!(record.raw_value, "md");
        assert_eq!(record.trailing_comment, None);
        assert_eq!(record.name_span, 0..10);
        assert_eq!(record.value_span, 13..15);
    }

    #[test]
    fn assignment_with_comment_and_padding_is_parsed() {
        let line = "  tau_t   =  0.1 0.1   ; ps per group  ";
        let record = assignment(line);
        assert_eq!(record.parameter_name, "tau_t");
        assert_eq!(record.raw_value, "0.1 0.1");
        assert_eq!(record.trailing_comment.as_deref(), Some("; ps per group"));
        assert_eq!(&line[record.name_span.clone()], "tau_t");
        assert_eq!(&line[record.value_span.clone()], "0.1 0.1");
    }

    #[test]
    fn assignment_without_spaces_or_value_is_parsed() {
        let record = assignment("dt=0.002");
        assert_eq!(record.raw_value, "0.002");

        let record = assignment("define =");
        assert_eq!(record.raw_value, "");
        assert!(!record.has_value());
    }

    #[test]
    fn name_without_equals_is_missing_equals() {
        assert_eq!(
            parse_line(0, "integrator md"),
            ParsedLine::Malformed(SyntaxIssue::MissingEquals)
        );
    }

    #[test]
    fn name_with_misplaced_equals_is_invalid_format() {
        assert_eq!(
            parse_line(0, "nsteps 5000 = 10"),
            ParsedLine::Malformed(SyntaxIssue::InvalidFormat)
        );
        assert_eq!(
            parse_line(0, "ref t = 300"),
            ParsedLine::Malformed(SyntaxIssue::InvalidFormat)
        );
    }

    #[test]
    fn line_without_name_reports_only_disallowed_characters() {
        assert_eq!(
            parse_line(0, "@@ = 3"),
            ParsedLine::Malformed(SyntaxIssue::InvalidCharacters)
        );
        assert_eq!(parse_line(0, "123 = 4"), ParsedLine::Ignored);
        assert_eq!(parse_line(0, "= 4"), ParsedLine::Ignored);
    }

    #[test]
    fn parse_document_indexes_lines() {
        let parsed = parse_document("; header\nintegrator = md\r\n\nnsteps\n");
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[0], ParsedLine::Ignored);
        assert!(matches!(&parsed[1], ParsedLine::Assignment(r) if r.line_number == 1 && r.raw_value == "md"));
        assert_eq!(parsed[2], ParsedLine::Ignored);
        assert_eq!(parsed[3], ParsedLine::Malformed(SyntaxIssue::MissingEquals));
    }

    #[test]
    fn column_conversions_count_characters() {
        let line = "title = Å-test";
        assert_eq!(char_column(line, 8), 8);
        assert_eq!(char_column(line, line.len()), 14);
        assert_eq!(byte_offset(line, 9), 10);
        assert_eq!(byte_offset(line, 100), line.len());
    }

    #[test]
    fn leading_name_finds_first_token() {
        let line = "   tc-grps = Protein";
        let span = leading_name(line).unwrap();
        assert_eq!(&line[span], "tc-grps");
        assert_eq!(leading_name("  ; comment"), None);
        assert_eq!(leading_name(""), None);
    }
}
