use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::{Context, Error};

use clap::Parser;

use dadi_prep_core::Replicates;

/// Column used for sorting the merged results.
const LOG_LIKELIHOOD: &str = "LL";

/// Merge dadi results from replicate runs.
#[derive(Debug, Parser)]
pub struct Merge {
    /// Directory containing the replicate runs.
    ///
    /// The results of each replicate should be in a subdirectory named 'run_<i>', where i starts
    /// from one.
    #[arg(long, value_name = "DIR")]
    directory: PathBuf,

    /// Name of the results file in each replicate run.
    ///
    /// Each file should be tab-separated with a header, and contain a log-likelihood column
    /// named 'LL'.
    #[arg(long, value_name = "NAME")]
    filename: PathBuf,

    /// Output path for the merged results.
    ///
    /// Results are written comma-separated, in the order of the replicate runs.
    /// If path already exists, it will be overwritten.
    #[arg(long = "out_filename", value_name = "PATH")]
    out_filename: PathBuf,

    /// Output path for the merged results sorted by log-likelihood.
    ///
    /// Results are written comma-separated, from the highest to the lowest log-likelihood.
    /// If path already exists, it will be overwritten.
    #[arg(long = "out_filename_sorted", value_name = "PATH")]
    out_filename_sorted: PathBuf,

    /// Number of replicate runs.
    #[arg(long, default_value = "50", value_name = "INT")]
    replicates: NonZeroUsize,
}

impl Merge {
    pub fn run(self) -> Result<(), Error> {
        let replicates =
            Replicates::new(&self.directory, &self.filename).set_count(self.replicates.get());

        log::info!(
            "Reading {} replicate results '{}' from '{}'",
            replicates.count(),
            self.filename.display(),
            self.directory.display(),
        );

        let combined = replicates.read_combined()?;

        log::debug!(
            "Merged {} rows across {} columns",
            combined.rows().len(),
            combined.header().count()
        );

        let sorted = combined
            .sorted_by_descending(LOG_LIKELIHOOD)
            .with_context(|| format!("failed to sort results by column '{LOG_LIKELIHOOD}'"))?;

        combined
            .write_to_path(&self.out_filename)
            .with_context(|| {
                format!(
                    "failed to write results to '{}'",
                    self.out_filename.display()
                )
            })?;
        log::info!("Wrote merged results to '{}'", self.out_filename.display());

        sorted
            .write_to_path(&self.out_filename_sorted)
            .with_context(|| {
                format!(
                    "failed to write sorted results to '{}'",
                    self.out_filename_sorted.display()
                )
            })?;
        log::info!(
            "Wrote sorted results to '{}'",
            self.out_filename_sorted.display()
        );

        Ok(())
    }
}
