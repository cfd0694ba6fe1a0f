//! Configuration types and parsing for handoff.yml

use crate::error::{CoreError, CoreResult};
use crate::method::Method;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Migration printed when neither the command line nor the config names one
pub const DEFAULT_MIGRATION_PATH: &str = "supabase/migrations/011_chapter_system_enhancement.sql";

/// Config file names searched for in the project directory, in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["handoff.yml", "handoff.yaml"];

const PROJECT_REF_PLACEHOLDER: &str = "<project-ref>";

/// Project configuration from handoff.yml
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandoffConfig {
    /// Migration file, relative to the project directory
    #[serde(default)]
    pub migration: Option<String>,

    /// Heading override, e.g. "Chapter System Migration"
    #[serde(default)]
    pub title: Option<String>,

    /// Hosted project reference used in console URLs and the pooler user
    #[serde(default)]
    pub project_ref: Option<String>,

    /// SQL editor settings
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Command-line client settings
    #[serde(default)]
    pub psql: PsqlConfig,

    /// Methods to print, in order
    #[serde(default = "default_methods")]
    pub methods: Vec<Method>,

    /// Custom Jinja template for the instructions, relative to the project directory
    #[serde(default)]
    pub template: Option<String>,
}

/// Hosted SQL editor settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Full editor URL; overrides the one derived from `project_ref`
    #[serde(default)]
    pub url: Option<String>,
}

/// Connection parameters printed into the `psql` command.
///
/// Holds the *name* of the password variable only. Secrets stay in the
/// operator's environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PsqlConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Login role; defaults to `postgres.<project_ref>`
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default = "default_database")]
    pub database: String,

    /// Environment variable holding the database password
    #[serde(default)]
    pub password_env: Option<String>,
}

impl Default for PsqlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: None,
            database: default_database(),
            password_env: None,
        }
    }
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            migration: None,
            title: None,
            project_ref: None,
            console: ConsoleConfig::default(),
            psql: PsqlConfig::default(),
            methods: default_methods(),
            template: None,
        }
    }
}

fn default_methods() -> Vec<Method> {
    Method::ALL.to_vec()
}

fn default_host() -> String {
    "<db-host>".to_string()
}

fn default_port() -> u16 {
    6543
}

fn default_database() -> String {
    "postgres".to_string()
}

impl HandoffConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: HandoffConfig =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the project directory.
    ///
    /// Looks for handoff.yml or handoff.yaml and falls back to defaults when
    /// neither exists.
    pub fn load_or_default(dir: &Path) -> CoreResult<Self> {
        match CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.exists())
        {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => {
                log::debug!("No handoff.yml in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> CoreResult<()> {
        if self.methods.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one entry in methods must be specified".to_string(),
            });
        }

        if self.psql.port == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "psql.port must be between 1 and 65535".to_string(),
            });
        }

        if let Some(name) = &self.psql.password_env {
            if !is_env_var_name(name) {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "psql.password_env '{}' is not an environment variable name. \
                         Store the password in your secret store and reference it by name",
                        name
                    ),
                });
            }
        }

        if matches!(self.migration.as_deref(), Some(m) if m.trim().is_empty()) {
            return Err(CoreError::ConfigInvalid {
                message: "migration cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Migration path resolved against the project directory
    pub fn migration_path(&self, root: &Path) -> PathBuf {
        resolve_path(
            root,
            Path::new(self.migration.as_deref().unwrap_or(DEFAULT_MIGRATION_PATH)),
        )
    }

    /// Custom template path resolved against the project directory
    pub fn template_path(&self, root: &Path) -> Option<PathBuf> {
        self.template.as_deref().map(|t| resolve_path(root, Path::new(t)))
    }

    /// SQL editor URL for the configured project
    pub fn console_url(&self) -> String {
        if let Some(url) = &self.console.url {
            return url.clone();
        }
        format!(
            "https://supabase.com/dashboard/project/{}/sql",
            self.project_ref_or_placeholder()
        )
    }

    /// Login role for the psql command
    pub fn psql_user(&self) -> String {
        match &self.psql.user {
            Some(user) => user.clone(),
            None => format!("postgres.{}", self.project_ref_or_placeholder()),
        }
    }

    fn project_ref_or_placeholder(&self) -> &str {
        self.project_ref
            .as_deref()
            .unwrap_or(PROJECT_REF_PLACEHOLDER)
    }
}

/// Join `rel` onto the project directory `root`.
///
/// Absolute paths pass through, and paths under the current directory stay as
/// written so instructions show them the way the operator typed them.
pub fn resolve_path(root: &Path, rel: &Path) -> PathBuf {
    if rel.is_absolute() || root == Path::new(".") {
        rel.to_path_buf()
    } else {
        root.join(rel)
    }
}

fn is_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
