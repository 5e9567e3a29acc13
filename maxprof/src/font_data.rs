//! raw font bytes

use std::ops::{Bound, RangeBounds};

use types::Scalar;

use crate::read::FormatError;

/// A reference to raw binary font data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for slicing and reading big-endian scalars out of that data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns self[range], or `None` if it is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(|bytes| FontData { bytes })
    }

    /// Returns the `len` bytes starting at `offset`, or `None` if any of them
    /// are out of bounds.
    pub fn slice_len(&self, offset: usize, len: usize) -> Option<FontData<'a>> {
        let end = offset.checked_add(len)?;
        self.slice((Bound::Included(offset), Bound::Excluded(end)))
    }

    /// Read a scalar at the provided location in the data.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, FormatError> {
        let end = offset
            .checked_add(T::RAW_BYTE_LEN)
            .ok_or(FormatError::OutOfBounds)?;
        self.bytes
            .get(offset..end)
            .and_then(T::read)
            .ok_or(FormatError::OutOfBounds)
    }

    /// Return the data as a byte slice
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl AsRef<[u8]> for FontData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for FontData<'a> {
    fn from(src: &'a [u8]) -> FontData<'a> {
        FontData::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Version16Dot16;

    #[test]
    fn read_scalars() {
        let data = FontData::new(&[0x00, 0x01, 0x00, 0x00, 0xFF, 0xFF]);
        assert_eq!(
            data.read_at::<Version16Dot16>(0).unwrap(),
            Version16Dot16::VERSION_1_0
        );
        assert_eq!(data.read_at::<u16>(4).unwrap(), 65535);
        assert!(matches!(
            data.read_at::<u16>(5),
            Err(FormatError::OutOfBounds)
        ));
        assert!(matches!(
            data.read_at::<u32>(usize::MAX),
            Err(FormatError::OutOfBounds)
        ));
    }

    #[test]
    fn slicing() {
        let bytes = [1u8, 2, 3, 4, 5];
        let data = FontData::new(&bytes);
        assert_eq!(data.slice(1..3).unwrap().as_bytes(), &[2, 3]);
        assert_eq!(data.slice(3..).unwrap().len(), 2);
        assert!(data.slice(4..6).is_none());
        assert_eq!(data.slice_len(2, 3).unwrap().as_bytes(), &[3, 4, 5]);
        assert!(data.slice_len(2, 4).is_none());
        assert!(data.slice_len(usize::MAX, 2).is_none());
        assert!(data.slice_len(5, 0).unwrap().is_empty());
    }
}
