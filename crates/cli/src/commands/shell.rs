use crate::args::ShellArgs;
use crate::session::{RunSummary, Session, ShellConfig};
use anyhow::{Context, Result};
use dnastrand::Strand;
use log::info;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

pub fn run_shell(args: &ShellArgs) -> Result<()> {
    let placeholder: Strand = args
        .placeholder
        .parse()
        .with_context(|| format!("Invalid --placeholder {:?}", args.placeholder))?;
    let config = ShellConfig {
        placeholder,
        strict: args.strict,
    };

    let stdout = io::stdout();
    let mut session = Session::new(config, BufWriter::new(stdout.lock()));

    let summary: RunSummary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!("reading commands from {}", path.display());
            session.run(BufReader::new(file))
        }
        None => session.run(io::stdin().lock()),
    }
    .context("Shell session aborted")?;

    info!(
        "session finished: {} command(s), {} error(s)",
        summary.commands, summary.errors
    );
    Ok(())
}
