//! The tables handled by this crate

use types::Tag;

pub mod maxp;

/// A table that has an associated tag.
///
/// This is true of top-level tables, which are located through the table
/// directory of a font.
pub trait TopLevelTable {
    /// The table's tag.
    const TAG: Tag;
}
