//! Traits for interpreting font data

use crate::font_data::FontData;

/// A type that can be read from raw table data.
///
/// This trait is implemented for tables that are self-describing: that is,
/// tables that do not require any external state in order to interpret their
/// underlying bytes.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    ///
    /// In the case of a table, this method is responsible for ensuring the input
    /// data has the length the table requires.
    fn read(data: FontData<'a>) -> Result<Self, FormatError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The data for a fixed-size record was not the required length.
    ///
    /// This contains the length that was observed.
    BadSize(usize),
    /// An attempt to read a value past the end of the data.
    OutOfBounds,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::BadSize(len) => write!(f, "Bad size for maxp table ({len} bytes)"),
            FormatError::OutOfBounds => write!(f, "An offset was out of bounds"),
        }
    }
}

impl std::error::Error for FormatError {}
