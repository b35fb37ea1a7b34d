//! Spectra in the layout expected by dadi.
//!
//! A [`Spectrum`] is laid out as the monomorphic count, followed by the polymorphic counts in
//! order, followed by zero padding. The accompanying [`Mask`] marks which entries dadi should
//! ignore.

use std::fmt;

pub mod io;

/// Whether the monomorphic bin should be used downstream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Monomorphic {
    /// The monomorphic bin is unmasked.
    Include,
    /// The monomorphic bin is masked.
    Mask,
}

impl Monomorphic {
    fn flag(self) -> bool {
        match self {
            Monomorphic::Include => false,
            Monomorphic::Mask => true,
        }
    }
}

impl From<&str> for Monomorphic {
    /// Only the exact string "yes" includes the monomorphic bin, anything else masks it.
    fn from(s: &str) -> Self {
        match s {
            "yes" => Self::Include,
            _ => Self::Mask,
        }
    }
}

/// A spectrum of counts, including the monomorphic bin and padding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Spectrum {
    values: Vec<i64>,
    polymorphic: usize,
    padding: usize,
}

impl Spectrum {
    /// Returns the values of the spectrum.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Checks that the spectrum has the provided number of bins.
    pub fn check_bins(&self, bins: usize) -> Result<(), BinCountError> {
        if self.len() == bins {
            Ok(())
        } else {
            Err(BinCountError {
                expected: bins,
                polymorphic: self.polymorphic,
                padding: self.padding,
            })
        }
    }

    /// Returns `true` if the spectrum is empty.
    ///
    /// A spectrum always holds the monomorphic bin, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of bins in the spectrum.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the mask for the spectrum.
    ///
    /// Polymorphic bins are never masked, padding is always masked, and the monomorphic bin is
    /// masked depending on `monomorphic`.
    pub fn mask(&self, monomorphic: Monomorphic) -> Mask {
        let flags = std::iter::once(monomorphic.flag())
            .chain(std::iter::repeat(false).take(self.polymorphic))
            .chain(std::iter::repeat(true).take(self.padding))
            .collect();

        Mask(flags)
    }

    /// Creates a new spectrum from the monomorphic count, the polymorphic counts, and the amount
    /// of zero padding.
    pub fn new<I>(monomorphic: i64, polymorphic: I, padding: usize) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut values = vec![monomorphic];
        values.extend(polymorphic);
        let polymorphic = values.len() - 1;
        values.resize(values.len() + padding, 0);

        Self {
            values,
            polymorphic,
            padding,
        }
    }
}

impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_separated(f, self.values.iter())
    }
}

/// A mask for a [`Spectrum`], where `true` marks a masked bin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mask(Vec<bool>);

impl Mask {
    /// Returns the flags of the mask.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_separated(f, self.0.iter().map(|&masked| u8::from(masked)))
    }
}

fn fmt_separated<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, x) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{x}")?;
    }

    Ok(())
}

/// An error associated with a spectrum not matching the expected number of bins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BinCountError {
    expected: usize,
    polymorphic: usize,
    padding: usize,
}

impl BinCountError {
    /// Returns the number of bins in the spectrum.
    pub fn found(&self) -> usize {
        1 + self.polymorphic + self.padding
    }
}

impl fmt::Display for BinCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} bins, but spectrum has {} bins \
                (1 monomorphic, {} polymorphic, {} padding)",
            self.expected,
            self.found(),
            self.polymorphic,
            self.padding,
        )
    }
}

impl std::error::Error for BinCountError {}
