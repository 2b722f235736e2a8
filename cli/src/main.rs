use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::{check, emit};

fn main() -> Result<()> {
    cli::logging::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Emit {
            path,
            base,
            handle_prefix,
            format,
        } => emit::emit_file(path, base.as_deref(), handle_prefix.as_deref(), *format),
        Commands::Check { path } => check::check_file(path),
    }
}
