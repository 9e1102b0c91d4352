use crate::defaults;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ShellArgs {
    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Strand written over an entry after `s` extracts a substring from it
    #[arg(long, default_value = defaults::PLACEHOLDER)]
    pub placeholder: String,

    /// Stop at the first failing command with a non-zero exit status
    #[arg(long)]
    pub strict: bool,
}

impl Default for ShellArgs {
    fn default() -> Self {
        Self {
            input: None,
            placeholder: defaults::PLACEHOLDER.to_string(),
            strict: false,
        }
    }
}
