//! Jinja environment setup for instruction rendering

use crate::context::InstructionContext;
use crate::error::{RenderError, RenderResult};
use crate::filters::shell_quote;
use crate::template::{CUSTOM_TEMPLATE_NAME, INSTRUCTIONS_TEMPLATE, INSTRUCTIONS_TEMPLATE_NAME};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::path::Path;

/// Renders operator instructions from a template
pub struct InstructionRenderer {
    env: Environment<'static>,
    template_name: &'static str,
}

impl InstructionRenderer {
    /// Create a renderer using the built-in template
    pub fn new() -> RenderResult<Self> {
        let mut env = base_environment();
        env.add_template(INSTRUCTIONS_TEMPLATE_NAME, INSTRUCTIONS_TEMPLATE)?;
        Ok(Self {
            env,
            template_name: INSTRUCTIONS_TEMPLATE_NAME,
        })
    }

    /// Create a renderer from template source.
    ///
    /// The template's final newline is kept so redirected output ends in one.
    pub fn with_template(source: String) -> RenderResult<Self> {
        let mut env = base_environment();
        env.set_keep_trailing_newline(true);
        env.add_template_owned(CUSTOM_TEMPLATE_NAME, source)?;
        Ok(Self {
            env,
            template_name: CUSTOM_TEMPLATE_NAME,
        })
    }

    /// Create a renderer from a template file on disk
    pub fn from_template_file(path: &Path) -> RenderResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RenderError::TemplateRead {
            path: path.display().to_string(),
            source: e,
        })?;
        log::debug!("Using custom template {}", path.display());
        Self::with_template(source)
    }

    /// Render the instructions for `ctx`
    pub fn render(&self, ctx: &InstructionContext) -> RenderResult<String> {
        let template = self.env.get_template(self.template_name)?;
        Ok(template.render(ctx)?)
    }
}

/// Shared settings for built-in and custom templates.
///
/// Auto-escaping is off because the SQL must come out byte for byte, and
/// undefined variables are errors so typos in custom templates surface.
fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_filter("shell_quote", shell_quote);
    env
}

#[cfg(test)]
#[path = "environment_test.rs"]
mod tests;
