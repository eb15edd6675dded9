use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use duskmode::install::DEFAULT_STATIC_DIR;
use duskmode::{InstallError, InstallOptions, resolve_from, script};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Install(#[from] InstallError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "duskmode", about = "Install and inspect the duskmode theme bootstrap script")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Copy theme-init.js into a static-asset directory.
    Install(InstallArgs),
    /// Print the bootstrap script to stdout.
    Script {
        /// Wrap the script in a `<script>` element.
        #[arg(long, default_value_t = false)]
        tag: bool,
    },
    /// Show which theme a given stored value and system preference resolve to.
    Resolve {
        /// Raw value under the storage key; omit when nothing is stored.
        #[arg(long)]
        stored: Option<String>,
        /// System color-scheme signal; omit when unreadable.
        #[arg(long)]
        prefers_dark: Option<bool>,
    },
}

#[derive(Args, Debug)]
struct InstallArgs {
    #[arg(long, env = "DUSKMODE_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,

    #[arg(long, env = "DUSKMODE_SCRIPT_SOURCE", help = "Copy this file instead of the built-in script")]
    source: Option<PathBuf>,
}

impl From<InstallArgs> for InstallOptions {
    fn from(args: InstallArgs) -> Self {
        Self {
            static_dir: args.static_dir,
            source: args.source,
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli.command, &mut io::stdout().lock())
}

fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    tracing::debug!(?command, "running command");
    match command {
        Command::Install(args) => {
            let written = duskmode::install(&args.into())?;
            writeln!(out, "{}", written.display())?;
        }
        Command::Script { tag } => {
            let body = script::render();
            if tag {
                writeln!(out, "<script>\n{body}</script>")?;
            } else {
                write!(out, "{body}")?;
            }
        }
        Command::Resolve {
            stored,
            prefers_dark,
        } => {
            let theme = resolve_from(stored.as_deref(), prefers_dark);
            writeln!(out, "{theme}")?;
        }
    }
    Ok(())
}
