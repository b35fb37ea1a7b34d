//! Writing the dadi text format.
//!
//! The format consists of three lines. The first line is a header `<bins> <folding> "<name>"`,
//! giving the number of bins, a folding label such as "folded" or "unfolded", and the quoted
//! population name. The second line gives the spectrum, and the third line gives the mask,
//! both separated by a single space.

use std::{fmt, io};

use crate::{Mask, Spectrum};

/// The header line of the dadi format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    bins: usize,
    folding: String,
    population: String,
}

impl Header {
    /// Creates a new header.
    ///
    /// The folding label is written as given and is not validated.
    pub fn new<F, P>(bins: usize, folding: F, population: P) -> Self
    where
        F: ToString,
        P: ToString,
    {
        Self {
            bins,
            folding: folding.to_string(),
            population: population.to_string(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.bins, self.folding, self.population)
    }
}

/// Writes a spectrum in dadi format to a writer.
pub fn write<W>(
    writer: &mut W,
    header: &Header,
    spectrum: &Spectrum,
    mask: &Mask,
) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(writer, "{header}")?;
    writeln!(writer, "{spectrum}")?;
    writeln!(writer, "{mask}")
}
