//! Reading the two-column SFS format.
//!
//! The format has no header and one line per polymorphic bin. Columns are tab-separated; the
//! first column is ignored, and the second column holds the count for the bin. Counts may be
//! written as floats, in which case they are truncated towards zero.

use std::{fmt, io};

fn parse_count(line: &str, number: usize) -> Result<i64, ParseSfsError> {
    let field = line
        .split('\t')
        .nth(1)
        .ok_or(ParseSfsError::MissingCount { line: number })?;

    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|&count| count >= i64::MIN as f64 && count < i64::MAX as f64)
        .map(|count| count.trunc() as i64)
        .ok_or_else(|| ParseSfsError::InvalidCount {
            line: number,
            value: field.to_string(),
        })
}

/// Reads the counts of all polymorphic bins from a reader, in order.
pub fn read_counts<R>(reader: R) -> Result<Vec<i64>, ParseSfsError>
where
    R: io::BufRead,
{
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| parse_count(&line?, i + 1))
        .collect()
}

/// An error associated with reading the two-column SFS format.
#[derive(Debug)]
pub enum ParseSfsError {
    /// I/O error.
    Io(io::Error),
    /// Line has no second column.
    MissingCount {
        /// Line number, starting from one.
        line: usize,
    },
    /// Second column is not a number representable as a count.
    InvalidCount {
        /// Line number, starting from one.
        line: usize,
        /// Raw value of the second column.
        value: String,
    },
}

impl From<io::Error> for ParseSfsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for ParseSfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSfsError::Io(e) => write!(f, "{e}"),
            ParseSfsError::MissingCount { line } => {
                write!(f, "line {line} has no tab-separated count column")
            }
            ParseSfsError::InvalidCount { line, value } => {
                write!(f, "failed to parse '{value}' on line {line} as count")
            }
        }
    }
}

impl std::error::Error for ParseSfsError {}
