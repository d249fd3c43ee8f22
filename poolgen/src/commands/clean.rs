use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use poolgen_model::{MANIFEST_FILE, ManifestFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to poolgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Target directory (overrides output.directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let directory = self
            .output
            .clone()
            .unwrap_or_else(|| file.output_directory());

        let report = ops::clean(&directory, &file.manifest().output.extension)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
