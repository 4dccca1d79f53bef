//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scan the workspace and write the HTML gallery
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Directory holding the app repositories (overrides config file)
    #[arg(long, env = "ICON_GALLERY_ROOT")]
    pub root: Option<PathBuf>,

    /// Report file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Commit and push the report with git after generating
    #[arg(long)]
    pub push: bool,

    /// Open the report in the browser after generating
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the apps and write the icon gallery
    Generate(GenerateCommand),
    /// Initialize a new .icongalleryrc.json configuration file
    Init,
}
