//! Utilities for reading and writing spectra.

use std::{fs, io, path::Path};

use crate::{input, Mask, Spectrum};

pub mod dadi;
use dadi::Header;

pub mod tanya;
use tanya::ParseSfsError;

/// Reads the counts of an SFS in the two-column format from a path.
///
/// The file may be gzip-compressed.
pub fn read_counts_from_path<P>(path: P) -> Result<Vec<i64>, ParseSfsError>
where
    P: AsRef<Path>,
{
    tanya::read_counts(input::open(path)?)
}

/// Writes a spectrum in the dadi format to a path.
///
/// If path already exists, it will be overwritten.
pub fn write_dadi_to_path<P>(
    path: P,
    header: &Header,
    spectrum: &Spectrum,
    mask: &Mask,
) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let mut writer = io::BufWriter::new(fs::File::create(path)?);
    dadi::write(&mut writer, header, spectrum, mask)?;
    io::Write::flush(&mut writer)
}
