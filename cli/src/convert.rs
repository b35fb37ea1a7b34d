use std::path::PathBuf;

use anyhow::{Context, Error};

use clap::Parser;

use dadi_prep_core::{
    spectrum::{self, io::dadi::Header},
    Monomorphic, Spectrum,
};

/// Convert SFS from two-column format to dadi format.
#[derive(Debug, Parser)]
pub struct Convert {
    /// Number of bins in the output SFS.
    ///
    /// This should equal the number of unfolded SFS bins plus one for the monomorphic bin. For
    /// example, with 7 individuals there are 7*2=14 unfolded bins, so 15 should be used.
    #[arg(long = "num_bin", value_name = "INT")]
    num_bin: usize,

    /// Folding label, usually "folded" or "unfolded".
    ///
    /// The label is written as given to the output header.
    #[arg(long = "folded_or_unfolded", value_name = "LABEL")]
    folded_or_unfolded: String,

    /// Population name.
    #[arg(long = "population_name", value_name = "NAME")]
    population_name: String,

    /// Input SFS.
    ///
    /// Each line should contain a single polymorphic bin, with the count in the second
    /// tab-separated column. Counts written as floats are truncated to integers.
    #[arg(long = "sfs_filename", value_name = "PATH")]
    sfs_filename: PathBuf,

    /// Number of individuals in the sample.
    ///
    /// This many masked zeros are appended to the SFS.
    #[arg(long = "num_individuals", value_name = "INT")]
    num_individuals: usize,

    /// Output path.
    ///
    /// If path already exists, it will be overwritten.
    #[arg(long = "out_filename", value_name = "PATH")]
    out_filename: PathBuf,

    /// Number of monomorphic sites.
    #[arg(long = "num_monomorphic", allow_negative_numbers = true, value_name = "INT")]
    num_monomorphic: i64,

    /// Whether to include the monomorphic bin.
    ///
    /// Use "yes" to include the monomorphic bin. Any other value masks it.
    #[arg(
        long = "include_monomorphic",
        value_parser = parse_monomorphic,
        value_name = "yes|no"
    )]
    include_monomorphic: Monomorphic,

    /// Promote warnings to errors.
    ///
    /// By default, a warning is given if the number of bins in the output SFS does not match
    /// `--num_bin`. Using this flag will cause an error instead, and no output will be written.
    #[arg(long)]
    strict: bool,
}

fn parse_monomorphic(s: &str) -> Result<Monomorphic, clap::Error> {
    Ok(Monomorphic::from(s))
}

impl Convert {
    pub fn run(self) -> Result<(), Error> {
        log::info!("Reading SFS from '{}'", self.sfs_filename.display());

        let counts = spectrum::io::read_counts_from_path(&self.sfs_filename).with_context(|| {
            format!("failed to read SFS from '{}'", self.sfs_filename.display())
        })?;

        log::debug!("Read {} polymorphic bins", counts.len());

        let spectrum = Spectrum::new(self.num_monomorphic, counts, self.num_individuals);

        if let Err(e) = spectrum.check_bins(self.num_bin) {
            if self.strict {
                return Err(e).context("number of bins does not match '--num_bin'");
            } else {
                log::warn!("{e}, output will not match '--num_bin'");
            }
        }

        let header = Header::new(
            self.num_bin,
            &self.folded_or_unfolded,
            &self.population_name,
        );
        let mask = spectrum.mask(self.include_monomorphic);

        spectrum::io::write_dadi_to_path(&self.out_filename, &header, &spectrum, &mask)
            .with_context(|| {
                format!(
                    "failed to write SFS to '{}'",
                    self.out_filename.display()
                )
            })?;

        log::info!(
            "Wrote SFS with {} bins to '{}'",
            spectrum.len(),
            self.out_filename.display()
        );

        Ok(())
    }
}
