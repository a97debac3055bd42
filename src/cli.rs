//! Command-line interface implementation for stackforge.
//! Provides argument parsing using clap's derive API.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line arguments structure for stackforge.
#[derive(Parser, Debug)]
#[command(
    name = "stackforge",
    version,
    about = "stackforge: generate project boilerplate for common web stacks",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project with boilerplate code
    Create(CreateArgs),

    /// List all available templates
    List,
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Project name
    #[arg(value_name = "PROJECT_NAME")]
    pub name: Option<String>,

    /// Tech stack (mern, pern, nextjs, flask, express)
    #[arg(short, long, visible_alias = "template")]
    pub stack: Option<String>,

    /// Enable TypeScript
    #[arg(long)]
    pub typescript: bool,

    /// Include Docker configuration
    #[arg(short, long)]
    pub docker: bool,

    /// Project description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Author name
    #[arg(long, default_value = "")]
    pub author: String,

    /// Skip dependency installation
    #[arg(long)]
    pub no_install: bool,

    /// Skip git initialization
    #[arg(long)]
    pub no_git: bool,

    /// Directory in which the project directory is created
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Parses command line arguments.
pub fn get_args() -> Cli {
    Cli::parse()
}
