//! Template context for instruction rendering.
//!
//! Everything a template can reference is collected here once per
//! invocation. Nothing time- or run-dependent is included, so rendering the
//! same migration twice gives identical text.

use mh_core::{HandoffConfig, Method, MigrationFile};
use serde::Serialize;

/// Values exposed to the instruction template
#[derive(Debug, Clone, Serialize)]
pub struct InstructionContext {
    /// Heading, e.g. "migration 011_chapter_system_enhancement.sql"
    pub title: String,
    /// SQL editor URL
    pub console_url: String,
    /// Migration path as the operator should type it
    pub migration_path: String,
    /// Bare file name of the migration
    pub file_name: String,
    /// SHA-256 of the migration content
    pub checksum: String,
    /// Number of statements found by the textual splitter
    pub statement_count: usize,
    /// Connection parameters for the psql method
    pub psql: PsqlContext,
    /// Methods to print, in order
    pub methods: Vec<MethodContext>,
    /// Migration content, verbatim
    pub sql: String,
}

/// psql parameters exposed as `{{ psql.host }}`, etc.
#[derive(Debug, Clone, Serialize)]
pub struct PsqlContext {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub database: String,
    /// Name of the variable holding the password, never the password
    pub password_env: Option<String>,
}

/// One entry of `{{ methods }}`
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    /// `console`, `psql` or `manual`
    pub key: &'static str,
    /// Heading printed after `METHOD n:`
    pub title: &'static str,
}

impl From<Method> for MethodContext {
    fn from(method: Method) -> Self {
        Self {
            key: method.as_str(),
            title: method.title(),
        }
    }
}

impl InstructionContext {
    /// Build the context for `migration` using `methods` in the given order
    pub fn new(config: &HandoffConfig, migration: &MigrationFile, methods: &[Method]) -> Self {
        let file_name = migration.file_name();
        let title = config
            .title
            .clone()
            .unwrap_or_else(|| format!("migration {}", file_name));

        Self {
            title,
            console_url: config.console_url(),
            migration_path: migration.path.display().to_string(),
            file_name,
            checksum: migration.checksum(),
            statement_count: migration.statements().len(),
            psql: PsqlContext {
                host: config.psql.host.clone(),
                port: config.psql.port,
                user: config.psql_user(),
                database: config.psql.database.clone(),
                password_env: config.psql.password_env.clone(),
            },
            methods: methods.iter().copied().map(MethodContext::from).collect(),
            sql: migration.content.clone(),
        }
    }
}
