//! Reading and writing the OpenType [maximum profile][maxp] record.
//!
//! The `maxp` table declares the resources a TrueType outline interpreter
//! must provision for a font: the largest glyph outlines, the size of the
//! twilight zone, storage and stack, and the number of function and
//! instruction definitions.
//!
//! This crate handles exactly one 32-byte record. Locating that record in a
//! font file (the table directory and its checksums) is the job of the
//! caller, which hands us the already-sliced table bytes.
//!
//! There are two ways to look at the data:
//!
//! - [`Maxp`] is a zero-copy view over borrowed bytes, with one accessor per
//!   field.
//! - [`MaxProfile`] is an owned record with public fields, which can be
//!   built field by field and encoded back into bytes.
//!
//! # Example
//!
//! ```
//! use maxprof::MaxProfile;
//!
//! let mut profile = MaxProfile::default();
//! profile.num_glyphs = 258;
//! profile.max_stack_elements = 512;
//!
//! let bytes = profile.encode();
//! assert_eq!(bytes.len(), MaxProfile::len());
//!
//! let loaded = MaxProfile::decode(&bytes).unwrap();
//! assert_eq!(loaded, profile);
//! println!("{}", loaded.describe());
//! ```
//!
//! [maxp]: https://learn.microsoft.com/en-us/typography/opentype/spec/maxp

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

mod font_data;
mod read;
pub mod tables;
mod write;


pub use font_data::FontData;
pub use read::{FontRead, FormatError};
pub use tables::maxp::{MaxProfile, Maxp, MaxpFixedFields};
pub use tables::TopLevelTable;
pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the maxprof-types crate.
pub extern crate maxprof_types as types;
