//! mh-core - Core library for Migration Handoff
//!
//! This crate provides the `handoff.yml` configuration, the error taxonomy,
//! migration file loading, and statement splitting shared by the renderer
//! and the `mh` binary.

pub mod checksum;
pub mod config;
pub mod error;
pub mod method;
pub mod migration;

pub use checksum::compute_checksum;
pub use config::{
    resolve_path, ConsoleConfig, HandoffConfig, PsqlConfig, DEFAULT_MIGRATION_PATH,
};
pub use error::{CoreError, CoreResult};
pub use method::Method;
pub use migration::{split_statements, MigrationFile, Statement};
