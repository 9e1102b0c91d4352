//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use dnastrand::prelude::*;
//!
//! let strand: Strand = "ACGT".parse().unwrap();
//! assert_eq!(strand.reversed().to_string(), "T G C A");
//! ```

pub use crate::base::{Acid, Strand, NOT_FOUND};
pub use crate::checks::{self, Check, CheckOutcome};
pub use crate::errors::StrandError;
