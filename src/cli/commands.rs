//! CLI command definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// projboard - submit projects and watch them in active and finished lists
#[derive(Parser, Debug)]
#[command(name = "projboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive board (default)
    Tui,

    /// Submit one project to a fresh board and print both lists
    Submit {
        /// Project title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Project description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Number of people, as typed into the form
        #[arg(short = 'n', long = "people", default_value = "")]
        count: String,

        /// Print the store snapshot as JSON instead of the lists
        #[arg(long)]
        json: bool,
    },
}
