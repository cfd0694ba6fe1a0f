//! Show command implementation

use anyhow::{Context, Result};
use mh_core::Method;
use mh_render::{InstructionContext, InstructionRenderer};
use std::io::Write;

use crate::cli::{GlobalArgs, ShowArgs};
use crate::commands::common::{load_config, load_migration};

/// Execute the show command.
///
/// The migration is read and the full text rendered before the first byte is
/// written, so a missing file leaves `out` untouched.
pub fn execute(args: &ShowArgs, global: &GlobalArgs, out: &mut impl Write) -> Result<()> {
    let config = load_config(global)?;
    let migration = load_migration(args.path.as_deref(), &config, global)?;

    let methods = if args.method.is_empty() {
        dedup(config.methods.iter().copied())
    } else {
        dedup(args.method.iter().copied().map(Method::from))
    };

    let renderer = match config.template_path(&global.project_dir) {
        Some(path) => InstructionRenderer::from_template_file(&path)
            .context("Failed to load instruction template")?,
        None => InstructionRenderer::new()?,
    };

    let ctx = InstructionContext::new(&config, &migration, &methods);
    let text = renderer
        .render(&ctx)
        .context("Failed to render instructions")?;
    log::debug!(
        "Rendered {} methods for {} ({} statements)",
        methods.len(),
        migration.path.display(),
        ctx.statement_count
    );

    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Keep the first occurrence of each method
fn dedup(methods: impl Iterator<Item = Method>) -> Vec<Method> {
    let mut seen = Vec::new();
    for method in methods {
        if !seen.contains(&method) {
            seen.push(method);
        }
    }
    seen
}

#[cfg(test)]
#[path = "show_test.rs"]
mod tests;
