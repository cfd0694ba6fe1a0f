//! Migration file loading and statement splitting

use crate::checksum::compute_checksum;
use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A migration file read fully into memory
#[derive(Debug, Clone)]
pub struct MigrationFile {
    /// Path as it should be shown to the operator
    pub path: PathBuf,

    /// Verbatim file content
    pub content: String,
}

/// One `;`-terminated statement from a migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// 1-based position among the kept statements
    pub index: usize,

    /// Statement text, trimmed, with its terminating `;`
    pub sql: String,

    /// `COMMENT ON ...` statements carry documentation only
    pub skipped: bool,
}

impl MigrationFile {
    /// Read a migration file.
    ///
    /// The whole file is read before anything is returned, so callers can
    /// rely on a failed read producing no partial content.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::MigrationNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        log::debug!("Read {} bytes from {}", content.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// File name without directories, e.g. `011_chapter_system_enhancement.sql`
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// SHA-256 of the content
    pub fn checksum(&self) -> String {
        compute_checksum(&self.content)
    }

    /// Split the content into statements
    pub fn statements(&self) -> Vec<Statement> {
        split_statements(&self.content)
    }
}

impl Statement {
    /// First line of the statement that is not a `--` comment, without the
    /// terminating `;`
    pub fn headline(&self) -> &str {
        self.sql
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty() && !l.starts_with("--"))
            .map(|l| l.strip_suffix(';').unwrap_or(l).trim_end())
            .unwrap_or("")
    }
}

/// Split SQL text on `;` into statements.
///
/// Chunks that are empty or hold only `--` comment lines are dropped. The
/// split is textual: a `;` inside a string literal or function body also ends
/// a statement.
pub fn split_statements(sql: &str) -> Vec<Statement> {
    sql.split(';')
        .map(str::trim)
        .filter(|chunk| !is_comment_only(chunk))
        .enumerate()
        .map(|(i, chunk)| {
            let sql = format!("{};", chunk);
            let mut stmt = Statement {
                index: i + 1,
                sql,
                skipped: false,
            };
            stmt.skipped = stmt
                .headline()
                .split_whitespace()
                .next()
                .is_some_and(|kw| kw.eq_ignore_ascii_case("comment"));
            stmt
        })
        .collect()
}

fn is_comment_only(chunk: &str) -> bool {
    chunk
        .lines()
        .map(str::trim)
        .all(|l| l.is_empty() || l.starts_with("--"))
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
