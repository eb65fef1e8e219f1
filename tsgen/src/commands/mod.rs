mod completions;
mod generate;
mod list;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use tsclassgen_source::Config;

/// Extension trait for exiting on configuration and discovery errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tsclassgen_source::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tsgen")]
#[command(version)]
#[command(about = "Generate TypeScript model classes from marked types")]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Running without a subcommand generates
    #[command(flatten)]
    generate: GenerateCommand,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::List(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => self.generate.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .model.ts file for every marked type (the default)
    Generate(GenerateCommand),

    /// List modules and the marked types they contain
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments locating the project and its compiled modules.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Project directory (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Path to tsgen.toml (defaults to <project>/tsgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read modules from this directory instead of searching the build output
    #[arg(short, long)]
    pub modules: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn load_config(&self) -> tsclassgen_source::Result<Config> {
        match &self.config {
            Some(path) => Config::open(path),
            None => Config::load_or_default(&self.project),
        }
    }

    pub fn modules_dir(&self) -> Option<&Path> {
        self.modules.as_deref()
    }
}
