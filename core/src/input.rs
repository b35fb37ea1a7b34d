//! Opening input files.
//!
//! Inputs may be plain text or gzip-compressed; compression is detected from the leading bytes.

use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

use flate2::bufread::MultiGzDecoder;

/// A compression method for an input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip, including multi-member and BGZF streams.
    Gzip,
}

impl CompressionMethod {
    const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

    /// Detects the compression method of a reader without consuming any input.
    ///
    /// Returns `None` if the input is not compressed.
    pub fn detect<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: BufRead,
    {
        let src = reader.fill_buf()?;

        if let Some(buf) = src.get(..Self::GZIP_MAGIC_NUMBER.len()) {
            if buf == Self::GZIP_MAGIC_NUMBER {
                return Ok(Some(CompressionMethod::Gzip));
            }
        }

        Ok(None)
    }
}

/// Wraps a reader in a decoder if the input is compressed.
pub fn decode<R>(mut reader: R) -> io::Result<Box<dyn BufRead>>
where
    R: 'static + BufRead,
{
    match CompressionMethod::detect(&mut reader)? {
        Some(CompressionMethod::Gzip) => {
            Ok(Box::new(io::BufReader::new(MultiGzDecoder::new(reader))))
        }
        None => Ok(Box::new(reader)),
    }
}

/// Opens a path for reading, decompressing if required.
pub fn open<P>(path: P) -> io::Result<Box<dyn BufRead>>
where
    P: AsRef<Path>,
{
    File::open(path).map(io::BufReader::new).and_then(decode)
}
