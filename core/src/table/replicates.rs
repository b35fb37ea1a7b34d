//! Result tables from replicate runs.
//!
//! Replicates are laid out as `<directory>/run_<i>/<filename>` for `i` in `1..=count`.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use super::{Table, TableError};

/// The default number of replicate runs.
pub const DEFAULT_COUNT: usize = 50;

/// A set of replicate runs sharing a result file name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Replicates {
    directory: PathBuf,
    filename: PathBuf,
    count: usize,
}

impl Replicates {
    /// Returns the number of replicates.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Creates a new set of replicates with the default count.
    pub fn new<D, F>(directory: D, filename: F) -> Self
    where
        D: AsRef<Path>,
        F: AsRef<Path>,
    {
        Self {
            directory: directory.as_ref().to_path_buf(),
            filename: filename.as_ref().to_path_buf(),
            count: DEFAULT_COUNT,
        }
    }

    /// Returns the path to the result file of a replicate, numbered from one.
    pub fn path(&self, replicate: usize) -> PathBuf {
        self.directory
            .join(format!("run_{replicate}"))
            .join(&self.filename)
    }

    /// Returns the paths to the result files of all replicates in order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (1..=self.count).map(|replicate| self.path(replicate))
    }

    /// Reads the tables of all replicates and concatenates them in order.
    ///
    /// Reading stops at the first replicate that cannot be read.
    pub fn read_combined(&self) -> Result<Table, ReplicateError> {
        self.paths().try_fold(Table::default(), |mut combined, path| {
            match Table::from_path(&path) {
                Ok(table) => {
                    combined.append(table);
                    Ok(combined)
                }
                Err(source) => Err(ReplicateError { path, source }),
            }
        })
    }

    /// Set the number of replicates.
    ///
    /// If unset, [`DEFAULT_COUNT`] replicates are used.
    pub fn set_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// An error associated with reading the table of a single replicate.
#[derive(Debug)]
pub struct ReplicateError {
    path: PathBuf,
    source: TableError,
}

impl ReplicateError {
    /// Returns the path of the replicate that could not be read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ReplicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to read replicate table '{}'",
            self.path.display()
        )
    }
}

impl std::error::Error for ReplicateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
