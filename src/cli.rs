use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::core::Strategy;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FormatKind {
    Json,
    #[value(alias = "text")]
    Table,
}

impl From<FormatKind> for OutputFormat {
    fn from(k: FormatKind) -> Self {
        match k {
            FormatKind::Json => OutputFormat::Json,
            FormatKind::Table => OutputFormat::Table,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StrategyKind {
    Dense,
    Local,
}

impl From<StrategyKind> for Strategy {
    fn from(k: StrategyKind) -> Self {
        match k {
            StrategyKind::Dense => Strategy::Dense,
            StrategyKind::Local => Strategy::Local,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "qsim",
    about = "qsim: evolve a qubit register through a time-ordered gate circuit",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QsimCli {
    /// Global: trace every gate application on stderr (same as QSIM_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    /// Global: path to config (TOML); default: ~/.qsim/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a circuit request and print the final amplitudes
    ///
    /// Examples:
    ///   qsim simulate bell.json
    ///   cat bell.json | qsim simulate - --format table --bloch
    Simulate {
        /// Circuit request (JSON); `-` reads stdin
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output format (overrides config)
        #[arg(long = "format", value_enum)]
        format: Option<FormatKind>,

        /// Write the result to FILE instead of stdout (short: -o)
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Also report each wire's Bloch vector
        #[arg(long = "bloch", action = ArgAction::SetTrue)]
        bloch: bool,

        /// Gate application strategy (overrides config)
        #[arg(long = "strategy", value_enum)]
        strategy: Option<StrategyKind>,

        /// Decimal places in table output (overrides config)
        #[arg(long = "precision", value_name = "N")]
        precision: Option<usize>,
    },

    /// List the gates the engine understands
    Gates,
}
