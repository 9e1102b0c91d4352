//! Base types for strand representation.
//!
//! This module provides the single-character `Acid` element and the owned
//! `Strand` sequence built from it.

mod acid;
mod strand;

pub use acid::Acid;
pub use strand::{Strand, NOT_FOUND};
