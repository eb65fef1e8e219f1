use clap::Args;
use eyre::Result;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.project.load_config().unwrap_or_exit();
        let discovery = ops::discover(&self.project.project, &config, self.project.modules_dir())
            .unwrap_or_exit();

        ops::list(&discovery, &config.generator.marker).render(&mut TerminalOutput::new());
        Ok(())
    }
}
