//! Check operation - manifest validation beyond parsing.

use poolgen_core::DataModelProvider;
use poolgen_model::ManifestFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the data model; this resolves the configured
/// generators and summarizes the manifest.
pub fn check(file: &ManifestFile) -> CheckReport {
    let manifest = file.manifest();

    let mut errors = Vec::new();
    if let Some(names) = &manifest.output.generators {
        for name in names {
            if let Err(e) = poolgen_generators::by_name(name) {
                errors.push(e.to_string());
            }
        }
    }

    CheckReport {
        config_path: file.path().to_path_buf(),
        errors,
        pools: manifest.pool_names().len(),
        components: manifest.component_infos().len(),
        blueprints: manifest.blueprint_names().len(),
    }
}
