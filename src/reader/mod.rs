//! Low-level GEDCOM file access
//!
//! This module turns a GEDCOM source into validated, continuation-folded
//! lines grouped into level-0 records. It knows nothing about the meaning
//! of individual tags beyond `CONC`/`CONT`; interpreting records is the
//! parser's job.

use crate::config::GedcomReaderConfig;
use crate::error::util::safe_read_to_string;
use crate::error::{GedcomError, Result};
use std::path::Path;

/// One tokenized GEDCOM line: `LEVEL [@XREF@] TAG [VALUE]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine {
    /// Nesting level, 0 through 99
    pub level: u8,
    /// Cross-reference key (`@I1@`) when the line declares one
    pub xref: Option<String>,
    /// Record tag, e.g. `INDI` or `BIRT`
    pub tag: String,
    /// Line value, with continuations folded in; `None` when absent or empty
    pub value: Option<String>,
    /// 1-based source line number, for error reporting
    pub line_no: usize,
}

/// A level-0 record together with all of its subordinate lines
#[derive(Debug, Clone)]
pub struct GedcomRecord {
    /// Record lines; the first is always the level-0 line
    pub lines: Vec<GedcomLine>,
}

impl GedcomRecord {
    /// Tag of the level-0 line
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.lines[0].tag
    }

    /// Cross-reference key of the level-0 line, if declared
    #[must_use]
    pub fn xref(&self) -> Option<&str> {
        self.lines[0].xref.as_deref()
    }

    /// Source line number of the level-0 line
    #[must_use]
    pub fn line_no(&self) -> usize {
        self.lines[0].line_no
    }

    /// Subordinate lines, excluding the level-0 line itself
    #[must_use]
    pub fn sub_lines(&self) -> &[GedcomLine] {
        &self.lines[1..]
    }
}

/// Reader over a GEDCOM source, yielding chunked records
#[derive(Debug)]
pub struct GedcomReader {
    records: Vec<GedcomRecord>,
}

impl GedcomReader {
    /// Open and tokenize a GEDCOM file
    pub fn open(path: &Path, config: &GedcomReaderConfig) -> Result<Self> {
        let text = safe_read_to_string(path, "GEDCOM source")?;
        Self::from_text(&text, config)
    }

    /// Tokenize in-memory GEDCOM text
    pub fn from_text(source: &str, config: &GedcomReaderConfig) -> Result<Self> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let lines = tokenize(source, config)?;
        let records = chunk(lines);
        if config.validate_structure {
            validate_frame(&records)?;
        }
        Ok(Self { records })
    }

    /// The chunked records, in document order
    #[must_use]
    pub fn records(&self) -> &[GedcomRecord] {
        &self.records
    }

    /// Consume the reader and return its records
    #[must_use]
    pub fn into_records(self) -> Vec<GedcomRecord> {
        self.records
    }
}

/// Split the source into validated lines, folding `CONC`/`CONT` into the
/// preceding line's value
fn tokenize(source: &str, config: &GedcomReaderConfig) -> Result<Vec<GedcomLine>> {
    let mut lines: Vec<GedcomLine> = Vec::new();
    let mut prev_level: Option<u8> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        if raw.len() > config.max_line_length {
            return Err(GedcomError::invalid_record(
                format!("line exceeds {} characters", config.max_line_length),
                line_no,
            ));
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line = parse_line(trimmed, line_no)?;
        match prev_level {
            None if line.level != 0 => {
                return Err(GedcomError::invalid_gedcom(
                    format!("first line has level {}, expected 0", line.level),
                    line_no,
                ));
            }
            Some(prev) if line.level > prev + 1 => {
                return Err(GedcomError::invalid_gedcom(
                    format!("level jumps from {prev} to {}", line.level),
                    line_no,
                ));
            }
            _ => {}
        }
        prev_level = Some(line.level);

        if line.tag == "CONC" || line.tag == "CONT" {
            let Some(target) = lines.last_mut() else {
                return Err(GedcomError::invalid_gedcom(
                    format!("{} line has nothing to continue", line.tag),
                    line_no,
                ));
            };
            let value = target.value.get_or_insert_with(String::new);
            if line.tag == "CONT" {
                value.push('\n');
            }
            if let Some(addition) = &line.value {
                value.push_str(addition);
            }
        } else {
            lines.push(line);
        }
    }

    Ok(lines)
}

/// Parse a single non-blank line into its components
fn parse_line(text: &str, line_no: usize) -> Result<GedcomLine> {
    let (level_token, rest) = text.split_once(' ').unwrap_or((text, ""));
    let level: u8 = level_token.parse().map_err(|_| {
        GedcomError::invalid_gedcom(format!("malformed level '{level_token}'"), line_no)
    })?;
    if level > 99 {
        return Err(GedcomError::invalid_gedcom(
            format!("level {level} out of range"),
            line_no,
        ));
    }

    let mut rest = rest.trim_start();
    let mut xref = None;
    if rest.starts_with('@') {
        let (token, after) = rest.split_once(' ').unwrap_or((rest, ""));
        if token.len() < 3 || !token.ends_with('@') {
            return Err(GedcomError::invalid_gedcom(
                format!("malformed cross-reference '{token}'"),
                line_no,
            ));
        }
        xref = Some(token.to_string());
        rest = after.trim_start();
    }

    let (tag, value) = match rest.split_once(' ') {
        Some((tag, value)) => (tag, (!value.is_empty()).then(|| value.to_string())),
        None => (rest, None),
    };
    if tag.is_empty() {
        return Err(GedcomError::invalid_gedcom("missing tag", line_no));
    }

    Ok(GedcomLine {
        level,
        xref,
        tag: tag.to_string(),
        value,
        line_no,
    })
}

/// Group lines into records opened by each level-0 line
fn chunk(lines: Vec<GedcomLine>) -> Vec<GedcomRecord> {
    let mut records: Vec<GedcomRecord> = Vec::new();
    for line in lines {
        if line.level == 0 {
            records.push(GedcomRecord { lines: vec![line] });
        } else if let Some(record) = records.last_mut() {
            record.lines.push(line);
        }
    }
    records
}

/// Require the `HEAD`-first / `TRLR`-last frame
fn validate_frame(records: &[GedcomRecord]) -> Result<()> {
    let Some(first) = records.first() else {
        return Err(GedcomError::invalid_gedcom("file contains no records", 1));
    };
    if first.tag() != "HEAD" {
        return Err(GedcomError::invalid_gedcom(
            format!("file begins with '{}', expected HEAD", first.tag()),
            first.line_no(),
        ));
    }
    let last = records.last().unwrap_or(first);
    if last.tag() != "TRLR" {
        return Err(GedcomError::invalid_gedcom(
            format!("file ends with '{}', expected TRLR", last.tag()),
            last.line_no(),
        ));
    }
    Ok(())
}
