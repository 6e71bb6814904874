//! Module specification files
//!
//! JSON files hold a bare array of modules; TOML files hold a `modules`
//! array of tables.

use crate::error::{SettingsError, SettingsResult};
use crate::format::{read_file, write_file, FileFormat};
use cabinetkit_core::ModuleSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct ModuleFile {
    modules: Vec<ModuleSpec>,
}

/// Load module specifications, rejecting duplicate ids
pub fn load_modules(path: &Path) -> SettingsResult<Vec<ModuleSpec>> {
    let modules = match FileFormat::from_path(path)? {
        FileFormat::Json => read_file::<Vec<ModuleSpec>>(path)?,
        FileFormat::Toml => read_file::<ModuleFile>(path)?.modules,
    };

    let mut seen = HashSet::new();
    for module in &modules {
        if !seen.insert(&module.id) {
            return Err(SettingsError::invalid(
                "modules",
                format!("duplicate module id '{}'", module.id),
            ));
        }
    }

    info!(path = %path.display(), modules = modules.len(), "Loaded modules");
    Ok(modules)
}

pub fn save_modules(modules: &[ModuleSpec], path: &Path) -> SettingsResult<()> {
    match FileFormat::from_path(path)? {
        FileFormat::Json => write_file(path, &modules),
        FileFormat::Toml => write_file(
            path,
            &ModuleFile {
                modules: modules.to_vec(),
            },
        ),
    }
}
