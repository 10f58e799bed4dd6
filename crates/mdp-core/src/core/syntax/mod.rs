//! Line-level syntax of mdp files.
//!
//! Every line is classified into exactly one of three outcomes: ignored (blank or
//! comment), an [`line::AssignmentRecord`], or a [`line::SyntaxIssue`]. The parser
//! never fails, so one malformed line cannot hide problems on the lines after it.
//!
//! Comments starting with `;;;` double as section markers ([`section`]); they are
//! still ignored by validation.

pub mod line;
pub mod section;

pub use line::{AssignmentRecord, ParsedLine, SyntaxIssue, parse_document, parse_line};
pub use section::{SectionMarker, section_marker};
