//! # Strand Crate
//!
//! The `dnastrand` crate provides an owned, ordered character sequence
//! (`Strand`) together with the operations used to build and inspect DNA
//! strands: concatenation, reversal, 1-based substring extraction and
//! first-occurrence search.

pub mod base;
pub mod checks;
pub mod errors;
pub mod prelude;

pub use base::{Acid, Strand, NOT_FOUND};
pub use errors::StrandError;
