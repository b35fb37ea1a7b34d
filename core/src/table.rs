//! Tables of results with a header.
//!
//! A [`Table`] holds its cells as the raw strings read from input, so that values are written
//! back unchanged. Only the column used for sorting is ever parsed.

use std::{cmp::Ordering, fmt, fs, io, path::Path};

use indexmap::IndexSet;

use crate::input;

pub mod replicates;
pub use replicates::Replicates;

/// A table with named columns.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    header: IndexSet<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Appends the rows of another table.
    ///
    /// Columns are matched by name. Columns not previously in the table are added at the end,
    /// and cells in columns missing from either table are left empty.
    pub fn append(&mut self, other: Table) {
        let indices = other
            .header
            .into_iter()
            .map(|name| self.header.insert_full(name).0)
            .collect::<Vec<_>>();

        let width = self.header.len();
        self.rows
            .iter_mut()
            .for_each(|row| row.resize(width, String::new()));

        self.rows.extend(other.rows.into_iter().map(|row| {
            let mut aligned = vec![String::new(); width];
            for (&i, cell) in indices.iter().zip(row) {
                aligned[i] = cell;
            }
            aligned
        }));
    }

    /// Returns the value of a column in each row.
    ///
    /// Returns `None` if the table has no column with the provided name.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let i = self.header.get_index_of(name)?;

        Some(self.rows.iter().map(move |row| row[i].as_str()))
    }

    /// Returns the column names.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.header.iter().map(String::as_str)
    }

    /// Reads a table from a path.
    ///
    /// The file may be gzip-compressed.
    pub fn from_path<P>(path: P) -> Result<Self, TableError>
    where
        P: AsRef<Path>,
    {
        Self::read_tsv(input::open(path)?)
    }

    /// Reads a table with a header in tab-separated format from a reader.
    ///
    /// Rows with fewer fields than the header are padded with empty cells. Rows with more fields
    /// than the header are an error.
    pub fn read_tsv<R>(reader: R) -> Result<Self, TableError>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut header = IndexSet::new();
        for name in reader.headers()? {
            if !header.insert(name.to_string()) {
                return Err(TableError::DuplicateColumn {
                    name: name.to_string(),
                });
            }
        }
        if header.is_empty() {
            return Err(TableError::MissingHeader);
        }

        let width = header.len();
        let rows = reader
            .records()
            .enumerate()
            .map(|(i, record)| -> Result<Vec<String>, TableError> {
                let record = record?;
                if record.len() > width {
                    return Err(TableError::TooManyFields {
                        row: i + 1,
                        expected: width,
                        found: record.len(),
                    });
                }

                let mut row = record.iter().map(String::from).collect::<Vec<_>>();
                row.resize(width, String::new());
                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { header, rows })
    }

    /// Returns the rows of the table.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns a copy of the table sorted in descending order by a numeric column.
    ///
    /// The sort is stable, so rows with equal values keep their order. Empty cells and NaN are
    /// placed last.
    pub fn sorted_by_descending(&self, name: &str) -> Result<Self, TableError> {
        let i = self
            .header
            .get_index_of(name)
            .ok_or_else(|| TableError::MissingColumn {
                name: name.to_string(),
            })?;

        let keys = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                parse_sort_key(&cells[i]).ok_or_else(|| TableError::InvalidNumber {
                    row: row + 1,
                    column: name.to_string(),
                    value: cells[i].clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut order = (0..self.rows.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| cmp_descending(keys[a], keys[b]));

        Ok(Self {
            header: self.header.clone(),
            rows: order.into_iter().map(|j| self.rows[j].clone()).collect(),
        })
    }

    /// Writes the table with a header in comma-separated format to a writer.
    pub fn write_csv<W>(&self, writer: W) -> Result<(), TableError>
    where
        W: io::Write,
    {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .from_writer(writer);

        writer.write_record(&self.header)?;
        for row in self.rows.iter() {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Writes the table with a header in comma-separated format to a path.
    ///
    /// If path already exists, it will be overwritten.
    pub fn write_to_path<P>(&self, path: P) -> Result<(), TableError>
    where
        P: AsRef<Path>,
    {
        self.write_csv(io::BufWriter::new(fs::File::create(path)?))
    }
}

fn parse_sort_key(s: &str) -> Option<f64> {
    let s = s.trim();

    if s.is_empty() {
        Some(f64::NAN)
    } else {
        s.parse().ok()
    }
}

fn cmp_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// An error associated with reading, writing, or sorting a table.
#[derive(Debug)]
pub enum TableError {
    /// Malformed delimited data.
    Csv(csv::Error),
    /// Header contains the same column name more than once.
    DuplicateColumn {
        /// Name of column.
        name: String,
    },
    /// Cell could not be parsed as a number.
    InvalidNumber {
        /// Row number, starting from one and not counting the header.
        row: usize,
        /// Name of column.
        column: String,
        /// Raw value of cell.
        value: String,
    },
    /// I/O error.
    Io(io::Error),
    /// Input was empty.
    MissingHeader,
    /// Table has no column with the requested name.
    MissingColumn {
        /// Name of column.
        name: String,
    },
    /// Row has more fields than the header.
    TooManyFields {
        /// Row number, starting from one and not counting the header.
        row: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },
}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<io::Error> for TableError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Csv(e) => write!(f, "{e}"),
            TableError::DuplicateColumn { name } => {
                write!(f, "duplicate column '{name}' in header")
            }
            TableError::InvalidNumber { row, column, value } => {
                write!(
                    f,
                    "failed to parse '{value}' in column '{column}' on row {row} as number"
                )
            }
            TableError::Io(e) => write!(f, "{e}"),
            TableError::MissingHeader => f.write_str("missing header"),
            TableError::MissingColumn { name } => write!(f, "no column named '{name}'"),
            TableError::TooManyFields {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} fields, but header has {expected} columns"
            ),
        }
    }
}

impl std::error::Error for TableError {}
