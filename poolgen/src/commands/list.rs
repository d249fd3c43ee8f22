use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use poolgen_codegen::{Capabilities, Capability};
use poolgen_core::DataModelProvider;
use poolgen_model::{MANIFEST_FILE, ManifestFile};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to poolgen.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();

        println!("Pools:");
        for pool in manifest.pool_names() {
            let count = manifest.components_in_pool(pool).count();
            println!(
                "  {} ({} component{})",
                pool,
                count,
                if count == 1 { "" } else { "s" }
            );
        }

        if manifest.component_infos().is_empty() {
            println!("\nNo components defined");
        } else {
            println!("\nComponents:");
            for component in manifest.component_infos() {
                let fields = if component.is_flag() {
                    "flag".to_string()
                } else {
                    component
                        .fields
                        .iter()
                        .map(|f| format!("{}: {}", f.name, f.type_name))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                println!(
                    "  {} [{}] ({})",
                    component.name,
                    component.pools.join(", "),
                    fields
                );
            }
        }

        if !manifest.blueprint_names().is_empty() {
            println!("\nBlueprints:");
            for blueprint in manifest.blueprint_names() {
                println!("  {}", blueprint);
            }
        }

        println!("\nGenerators:");
        for name in poolgen_generators::BUILTIN_NAMES {
            let generator = poolgen_generators::by_name(name)?;
            println!(
                "  {:<18} {}",
                name,
                capability_list(Capabilities::of(generator.as_ref()))
            );
        }

        Ok(())
    }
}

fn capability_list(capabilities: Capabilities) -> String {
    capabilities
        .iter()
        .map(|c: Capability| c.phase_name())
        .collect::<Vec<_>>()
        .join(", ")
}
