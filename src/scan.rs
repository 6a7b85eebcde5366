//! Walk raw config text into one [`LineRecord`] per physical line.
//!
//! The scanner never drops a line: blank lines, comments and lines that do
//! not parse as properties all produce a record, so the writer can rebuild
//! the file line for line. A final empty segment after a trailing `\n` is not
//! a line of its own.

use tracing::trace;

use crate::matcher::match_property;
use crate::token::{PropertyToken, tokenize};

/// One physical line of a config file.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// Content after the leading whitespace and the comment marker.
    pub raw_line: String,
    /// Spaces and tabs that preceded the content.
    pub leading_space: String,
    /// The first non-blank character was `#`.
    pub is_comment: bool,
    /// The parsed property, if the line holds one that survived matching.
    pub property: Option<PropertyToken>,
}

impl LineRecord {
    fn new() -> Self {
        Self {
            raw_line: String::new(),
            leading_space: String::new(),
            is_comment: false,
            property: None,
        }
    }

    fn is_blank(&self) -> bool {
        self.raw_line.is_empty() && self.leading_space.is_empty() && !self.is_comment
    }

    /// Rebuild the physical line exactly as it was read.
    pub fn verbatim(&self) -> String {
        let marker = if self.is_comment { "#" } else { "" };
        format!("{}{marker}{}", self.leading_space, self.raw_line)
    }
}

/// Scan `text` into line records.
///
/// Property lines are tokenized and matched against `constraints`. With
/// `ignore_comment` set, commented lines are kept as records but never parsed.
pub fn scan_lines(
    text: &str,
    constraints: &[String],
    extend: bool,
    ignore_case: bool,
    ignore_comment: bool,
) -> Vec<LineRecord> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let finish = |mut record: LineRecord| {
        if !record.raw_line.is_empty() && !(record.is_comment && ignore_comment) {
            record.property = tokenize(&record.raw_line)
                .and_then(|token| match_property(token, constraints, extend, ignore_case));
        }
        trace!(
            line = %record.verbatim(),
            property = record.property.as_ref().map(|p| p.name.as_str()),
            "scanned line"
        );
        record
    };

    let mut records = Vec::new();
    let mut current = LineRecord::new();
    let mut at_start = true;

    for c in text.chars() {
        match c {
            '\n' => {
                records.push(finish(std::mem::replace(&mut current, LineRecord::new())));
                at_start = true;
            }
            ' ' | '\t' if at_start => current.leading_space.push(c),
            '#' if at_start => {
                current.is_comment = true;
                at_start = false;
            }
            _ => {
                at_start = false;
                current.raw_line.push(c);
            }
        }
    }

    if !current.is_blank() {
        records.push(finish(current));
    }
    records
}
