mod args;
mod commands;
pub mod defaults;
mod errors;
mod opcode;
mod registry;
mod session;
mod tokens;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;

use args::ShellArgs;
use commands::{check, shell};

/// dnastrand: build, combine and search DNA strands.
///
/// Without a subcommand the command shell reads single-letter opcodes
/// from standard input.
#[derive(Parser, Debug)]
#[command(name = "dnastrand")]
#[command(author, version, about = "Build, combine and search DNA strands", long_about = None)]
struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the command shell.
    ///
    /// Opcodes: i (insert), p (print), r (reverse), f (find), a (add),
    /// s (substring), d (delete), e (exchange), E (equals), c (clear), q (quit).
    Shell(ShellArgs),

    /// Run the built-in self-checks.
    Check,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => defaults::LOG_FILTER,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Shell(args)) => shell::run_shell(&args)?,
        Some(Commands::Check) => check::run_checks()?,
        None => shell::run_shell(&ShellArgs::default())?,
    }

    Ok(())
}
