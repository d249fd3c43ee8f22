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
pub struct GenerateCommand {
    /// Path to poolgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Target directory (overrides output.directory); files land in its Generated/ subdirectory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Run only these generators (overrides output.generators)
    #[arg(short, long = "generator", value_name = "NAME")]
    pub generators: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &file,
            ops::generate::GenerateOptions {
                output: self.output.as_deref(),
                generators: (!self.generators.is_empty()).then_some(self.generators.as_slice()),
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
