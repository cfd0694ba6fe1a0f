//! CLI command implementations

pub(crate) mod common;
pub(crate) mod show;
pub(crate) mod statements;
