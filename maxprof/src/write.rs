use types::{Tag, Version16Dot16};

use crate::tables::TopLevelTable;

/// A type that that can be written out as part of a font file.
///
/// Implementors write their fields, in order, as big-endian bytes.
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// An append-only buffer of big-endian bytes.
#[derive(Debug, Default, Clone)]
pub struct TableWriter {
    bytes: Vec<u8>,
}

/// Serialize a top-level table.
///
/// This returns the bytes encoding the table, suitable for adding to a font
/// with a table directory entry for [`TopLevelTable::TAG`].
pub fn dump_table<T: FontWrite + TopLevelTable>(table: &T) -> Vec<u8> {
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    let bytes = writer.into_data();
    log::debug!("dumped '{}' ({} bytes)", T::TAG, bytes.len());
    bytes
}

impl TableWriter {
    /// Create a writer with room for `len` bytes.
    pub fn with_capacity(len: usize) -> Self {
        TableWriter {
            bytes: Vec::with_capacity(len),
        }
    }

    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Finish writing, returning the bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(&self.to_be_bytes())
            }
        }
    };
}

write_be_bytes!(u8);
write_be_bytes!(u16);
write_be_bytes!(u32);
write_be_bytes!(Tag);
write_be_bytes!(Version16Dot16);

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_big_endian() {
        let mut writer = TableWriter::default();
        Version16Dot16::VERSION_0_5.write_into(&mut writer);
        0xABCDu16.write_into(&mut writer);
        [1u8, 2].write_into(&mut writer);
        Tag::new(b"maxp").write_into(&mut writer);
        assert_eq!(writer.len(), 12);
        assert_eq!(
            writer.into_data(),
            [0x00, 0x00, 0x50, 0x00, 0xAB, 0xCD, 1, 2, b'm', b'a', b'x', b'p']
        );
    }
}
