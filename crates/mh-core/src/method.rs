//! Operator methods for applying a migration by hand

use serde::{Deserialize, Serialize};

/// One way for an operator to apply a migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Paste into the hosted SQL editor
    Console,
    /// Run the `psql` client against the pooler
    Psql,
    /// Copy the raw SQL printed below the instructions
    Manual,
}

impl Method {
    /// All methods in their default presentation order
    pub const ALL: [Method; 3] = [Method::Console, Method::Psql, Method::Manual];

    /// Heading shown above the method's instructions
    pub fn title(self) -> &'static str {
        match self {
            Method::Console => "Supabase SQL Editor (Recommended)",
            Method::Psql => "Using psql (if installed)",
            Method::Manual => "Manual SQL (Quick)",
        }
    }

    /// Lowercase key used in config files and templates
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Console => "console",
            Method::Psql => "psql",
            Method::Manual => "manual",
        }
    }
}
