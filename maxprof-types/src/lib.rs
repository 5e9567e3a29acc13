//! Scalar data types used by the [maxp] record.
//!
//! [maxp]: https://learn.microsoft.com/en-us/typography/opentype/spec/maxp

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod raw;
mod tag;
mod version;

pub use raw::{BigEndian, FixedSize, Scalar};
pub use tag::Tag;
pub use version::Version16Dot16;
