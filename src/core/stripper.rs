//! Line-oriented erasure of video field values.
//!
//! Documents are never parsed into a tree. Each line is matched against one
//! pattern per target field and only the bytes of the quoted value are
//! removed, so indentation, key order, trailing commas and line endings come
//! out exactly as they went in.

use regex::Regex;
use std::ops::Range;
use tracing::debug;

use crate::error::Result;
use crate::models::{RemovedValue, DEFAULT_VIDEO_FIELDS};

/// Compiled pattern for a single target field
#[derive(Debug, Clone)]
struct FieldPattern {
    field: String,
    regex: Regex,
}

impl FieldPattern {
    fn new(field: &str) -> Result<Self> {
        // prefix, value and suffix groups; the value stops at the first quote
        let regex = Regex::new(&format!(
            r#"(\s*"{}"\s*:\s*)"([^"]*)"(\s*,?)"#,
            regex::escape(field)
        ))?;
        Ok(Self {
            field: field.to_string(),
            regex,
        })
    }
}

/// A target field's key-value pair found on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch<'a> {
    pub field: &'a str,
    /// Leading whitespace, quoted key, colon and whitespace before the value
    pub prefix: &'a str,
    /// Value text between the quotes
    pub value: &'a str,
    /// Whitespace and optional comma after the closing quote
    pub suffix: &'a str,
    /// Byte range of the whole match within the line
    pub span: Range<usize>,
}

impl FieldMatch<'_> {
    /// The line with this match's value collapsed to `""`
    pub fn erase(&self, line: &str) -> String {
        format!(
            "{}{}\"\"{}{}",
            &line[..self.span.start],
            self.prefix,
            self.suffix,
            &line[self.span.end..]
        )
    }
}

/// Result of stripping one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub text: String,
    pub changed: bool,
    pub removed: Vec<RemovedValue>,
}

/// Erases the values of an ordered set of fields from raw document text
#[derive(Debug, Clone)]
pub struct FieldStripper {
    patterns: Vec<FieldPattern>,
}

impl FieldStripper {
    /// Compile patterns for `fields`, checked per line in the given order
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        let patterns = fields
            .iter()
            .map(|f| FieldPattern::new(f.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Stripper for the built-in video field list
    pub fn default_fields() -> Result<Self> {
        Self::new(DEFAULT_VIDEO_FIELDS)
    }

    /// Target field names in priority order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.field.as_str())
    }

    /// First target field, in set order, whose pattern matches `line`
    pub fn find_match<'a>(&'a self, line: &'a str) -> Option<FieldMatch<'a>> {
        self.patterns.iter().find_map(|pattern| {
            let caps = pattern.regex.captures(line)?;
            Some(FieldMatch {
                field: &pattern.field,
                prefix: caps.get(1)?.as_str(),
                value: caps.get(2)?.as_str(),
                suffix: caps.get(3)?.as_str(),
                span: caps.get(0)?.range(),
            })
        })
    }

    /// Erase target values line by line.
    ///
    /// A line is split on `\n` only, so a missing or present trailing newline
    /// and any `\r` survive untouched. At most one field is handled per line.
    /// A matching field whose value is already empty counts as a match but
    /// not as a change, which keeps the operation idempotent.
    pub fn strip(&self, text: &str) -> StripOutcome {
        let mut output = String::with_capacity(text.len());
        let mut removed = Vec::new();

        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                output.push('\n');
            }

            match self.find_match(line) {
                Some(m) if !m.value.is_empty() => {
                    debug!("Line {}: erasing {} = {:?}", idx + 1, m.field, m.value);
                    output.push_str(&m.erase(line));
                    removed.push(RemovedValue {
                        field: m.field.to_string(),
                        value: m.value.to_string(),
                        line: idx + 1,
                    });
                }
                _ => output.push_str(line),
            }
        }

        StripOutcome {
            changed: !removed.is_empty(),
            text: output,
            removed,
        }
    }
}

/// One-shot strip of `text` against `fields`
pub fn strip<S: AsRef<str>>(text: &str, fields: &[S]) -> Result<StripOutcome> {
    Ok(FieldStripper::new(fields)?.strip(text))
}
