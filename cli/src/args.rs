use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "trampgen")]
#[command(about = "Trampoline call-expression generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the call expression of every representable signature
    Emit {
        /// Definitions file (.toml or .json)
        path: String,
        /// Trampoline base name, e.g. "syscall.Syscall" (overrides the file)
        #[arg(long)]
        base: Option<String>,
        /// Prefix of the native handle variable (overrides the file)
        #[arg(long)]
        handle_prefix: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report signatures with more parameters than any trampoline accepts
    Check {
        /// Definitions file (.toml or .json)
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Label: expression` line per signature
    Text,
    /// A JSON array of call records
    Json,
}
