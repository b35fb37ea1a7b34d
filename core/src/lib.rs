#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Tools for preparing site frequency spectra for dadi and collecting its results.
//!
//! This serves as the core library implementation for the `dadi-prep` CLI, but can also be used
//! as a free-standing library.
//!
//! # Overview
//!
//! There are two independent parts. The [`spectrum`] module converts a two-column, tab-separated
//! SFS into the dadi text format, which consists of a header, the [`Spectrum`] itself, and a
//! [`Mask`]. The [`table`] module reads result [`Table`]s from a set of [`Replicates`], combines
//! them, and sorts them by a numeric column.
//!
//! # Example
//!
//! ```
//! use dadi_prep_core::{spectrum::io::dadi::{self, Header}, Monomorphic, Spectrum};
//!
//! // Two polymorphic bins read from somewhere, padded with two zeros
//! let spectrum = Spectrum::new(100, [5, 4], 2);
//! let mask = spectrum.mask(Monomorphic::from("yes"));
//!
//! let mut dest = Vec::new();
//! dadi::write(&mut dest, &Header::new(5, "unfolded", "pop"), &spectrum, &mask).unwrap();
//!
//! assert_eq!(dest, b"5 unfolded \"pop\"\n100 5 4 0 0\n0 0 0 1 1\n");
//! ```

pub mod input;

pub mod spectrum;
pub use spectrum::{Mask, Monomorphic, Spectrum};

pub mod table;
pub use table::{Replicates, Table};
