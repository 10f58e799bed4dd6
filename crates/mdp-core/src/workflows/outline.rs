use crate::core::syntax::{SectionMarker, section_marker};

/// A foldable region of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// Line of the opening `;;;Title` marker.
    pub start_line: usize,
    /// Line of the closing `;;;` marker, or the last line for unclosed sections.
    pub end_line: usize,
}

/// Collects the `;;;` sections of a document.
///
/// Sections nest: a bare `;;;` closes the innermost open section, and a stray
/// close marker with nothing open is ignored. Sections are returned in the order
/// they close; those still open at the end close innermost first.
pub fn outline(text: &str) -> Vec<Section> {
    let mut open: Vec<(String, usize)> = Vec::new();
    let mut sections = Vec::new();
    let mut last_line = 0;

    for (line_number, line) in text.lines().enumerate() {
        last_line = line_number;
        match section_marker(line) {
            Some(SectionMarker::Open(title)) => open.push((title.to_string(), line_number)),
            Some(SectionMarker::Close) => {
                if let Some((title, start_line)) = open.pop() {
                    sections.push(Section {
                        title,
                        start_line,
                        end_line: line_number,
                    });
                }
            }
            None => {}
        }
    }

    while let Some((title, start_line)) = open.pop() {
        sections.push(Section {
            title,
            start_line,
            end_line: last_line,
        });
    }
    sections
}
