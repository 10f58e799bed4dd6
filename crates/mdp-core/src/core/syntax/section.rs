/// A folding marker written as a triple-semicolon comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionMarker<'a> {
    /// `;;;Title` opens a section named `Title`.
    Open(&'a str),
    /// A bare `;;;` closes the innermost open section.
    Close,
}

/// Recognizes a section marker, ignoring surrounding whitespace.
///
/// `;;;` followed only by whitespace is a close marker; any other text after the
/// three semicolons is a title.
pub fn section_marker(line: &str) -> Option<SectionMarker<'_>> {
    let rest = line.trim().strip_prefix(";;;")?;
    match rest.trim() {
        "" => Some(SectionMarker::Close),
        title => Some(SectionMarker::Open(title)),
    }
}
