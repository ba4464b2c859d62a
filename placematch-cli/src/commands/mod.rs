//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use placematch_core::{AnchorPolicy, StrategyKind};
use std::io::{self, Write};

pub mod generate_config;
pub mod search;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search a message corpus for fuzzy mentions of place names
    Search(search::SearchArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Search(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List token similarity strategies
    Strategies,

    /// List anchoring policies
    Anchors,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing to `out`
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Strategies => {
                writeln!(out, "Similarity strategies:")?;
                for kind in StrategyKind::ALL {
                    let marker = if kind == StrategyKind::default() { " (default)" } else { "" };
                    writeln!(out, "  {:<14} {}{marker}", kind.as_str(), kind.description())?;
                }
            }
            ListCommands::Anchors => {
                writeln!(out, "Anchor policies:")?;
                for policy in AnchorPolicy::ALL {
                    let marker = if policy == AnchorPolicy::default() { " (default)" } else { "" };
                    writeln!(out, "  {:<14} {}{marker}", policy.as_str(), policy.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<14} {}", format.as_str(), format.description())?;
                }
            }
        }
        Ok(())
    }
}
