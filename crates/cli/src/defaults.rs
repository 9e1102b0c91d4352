//! Shared default values for the command shell.
//! These values are used by clap and by `ShellConfig::default`.

/// Strand written over an entry once `s` has extracted a substring from it.
pub const PLACEHOLDER: &str = "aaaa";

/// Log filter used when neither `RUST_LOG` nor `-v` is given.
pub const LOG_FILTER: &str = "warn";
