//! Station lookup by name.
//!
//! Riders type partial, unaccented names; the index matches them against
//! station names and ids.

mod index;

pub use index::{StationIndex, normalize};
