use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory (overrides tsgen.toml; defaults to <project>/ts-classes)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated classes without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.project.load_config().unwrap_or_exit();
        let discovery = ops::discover(&self.project.project, &config, self.project.modules_dir())
            .unwrap_or_exit();

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| self.project.project.join(&config.generator.output_dir));

        let report = ops::generate(
            discovery,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
