use clap::{Parser, Subcommand};
use std::path::PathBuf;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(name = "solpup", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SolpupCli {
    /// Root of the Foundry project to check
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Lint configuration to use, instead of searching for solpup.ron
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<SolpupCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SolpupCommand {
    /// Run the naming convention lints and `forge fmt --check` (default)
    Check {
        /// Skip the formatting check
        #[arg(long)]
        no_fmt: bool,
    },

    /// Print all contracts and the lints that apply to them
    PrintContracts {
        /// Print the project context as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a solpup.ron with the built-in conventions
    GenerateConfig {
        /// Overwrite an existing solpup.ron
        #[arg(long)]
        force: bool,
    },

    /// Format the project's Solidity sources with `forge fmt`
    Fmt {
        /// Only check formatting, don't write changes
        #[arg(long)]
        check: bool,
    },
}

impl SolpupCli {
    pub fn command(&self) -> SolpupCommand {
        self.command
            .clone()
            .unwrap_or(SolpupCommand::Check { no_fmt: false })
    }
}
