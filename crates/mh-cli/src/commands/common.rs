//! Shared helpers for commands

use anyhow::{Context, Result};
use mh_core::{resolve_path, HandoffConfig, MigrationFile};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load handoff.yml from `--config` or the project directory
pub(crate) fn load_config(global: &GlobalArgs) -> Result<HandoffConfig> {
    match &global.config {
        Some(path) => HandoffConfig::load(path).context("Failed to load configuration file"),
        None => HandoffConfig::load_or_default(&global.project_dir)
            .context("Failed to load project configuration"),
    }
}

/// Read the migration named on the command line, or the configured one.
///
/// Both are resolved against the project directory.
pub(crate) fn load_migration(
    path: Option<&Path>,
    config: &HandoffConfig,
    global: &GlobalArgs,
) -> Result<MigrationFile> {
    let path = match path {
        Some(p) => resolve_path(&global.project_dir, p),
        None => config.migration_path(&global.project_dir),
    };
    MigrationFile::load(&path).context("Failed to read migration file")
}
