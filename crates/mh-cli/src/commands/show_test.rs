use super::*;
use crate::cli::MethodArg;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn global_for(project_dir: &Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: project_dir.to_path_buf(),
        config: None,
    }
}

fn write_default_migration(project_dir: &Path, sql: &str) {
    let migrations = project_dir.join("supabase/migrations");
    fs::create_dir_all(&migrations).unwrap();
    fs::write(migrations.join("011_chapter_system_enhancement.sql"), sql).unwrap();
}

#[test]
fn test_show_prints_sql_after_header() {
    let temp_dir = tempdir().unwrap();
    write_default_migration(temp_dir.path(), "SELECT 1;\n");

    let mut out = Vec::new();
    execute(&ShowArgs::default(), &global_for(temp_dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("📖 Applying migration 011_chapter_system_enhancement.sql...\n"));
    let header = text.find("Copy this SQL and run it in Supabase SQL Editor:").unwrap();
    let sql = text.find("SELECT 1;\n").unwrap();
    assert!(sql > header);
}

#[test]
fn test_show_missing_file_writes_nothing() {
    let temp_dir = tempdir().unwrap();

    let mut out = Vec::new();
    let err = execute(&ShowArgs::default(), &global_for(temp_dir.path()), &mut out).unwrap_err();

    assert!(out.is_empty());
    let chain = format!("{err:#}");
    assert!(chain.contains("Migration file not found"), "{chain}");
}

#[test]
fn test_show_explicit_path_wins_over_config() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("handoff.yml"),
        "migration: does/not/exist.sql\n",
    )
    .unwrap();
    let explicit = temp_dir.path().join("one_off.sql");
    fs::write(&explicit, "DROP INDEX IF EXISTS idx_old;").unwrap();

    let args = ShowArgs {
        path: Some(explicit),
        method: vec![MethodArg::Manual],
    };
    let mut out = Vec::new();
    execute(&args, &global_for(temp_dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("METHOD 1: Manual SQL (Quick)"));
    assert!(text.ends_with("DROP INDEX IF EXISTS idx_old;\n"));
}

#[test]
fn test_show_relative_path_resolved_against_project_dir() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("hotfix")).unwrap();
    fs::write(
        temp_dir.path().join("hotfix/012_backfill.sql"),
        "UPDATE chapters SET color = 'blue';",
    )
    .unwrap();

    let args = ShowArgs {
        path: Some(PathBuf::from("hotfix/012_backfill.sql")),
        method: vec![MethodArg::Psql, MethodArg::Manual],
    };
    let mut out = Vec::new();
    execute(&args, &global_for(temp_dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let resolved = temp_dir.path().join("hotfix/012_backfill.sql");
    assert!(text.starts_with("📖 Applying migration 012_backfill.sql...\n"));
    assert!(text.contains(&resolved.display().to_string()));
    assert!(text.ends_with("UPDATE chapters SET color = 'blue';\n"));
}

#[test]
fn test_show_uses_configured_migration_and_methods() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("handoff.yml"),
        r#"
migration: migrations/006_user_questions.sql
project_ref: abcd1234
methods: [psql]
psql:
  host: pooler.example.com
  password_env: DB_PASSWORD
"#,
    )
    .unwrap();
    fs::create_dir_all(temp_dir.path().join("migrations")).unwrap();
    fs::write(
        temp_dir.path().join("migrations/006_user_questions.sql"),
        "CREATE TABLE user_questions (id uuid);",
    )
    .unwrap();

    let mut out = Vec::new();
    execute(&ShowArgs::default(), &global_for(temp_dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("METHOD 1: Using psql (if installed)"));
    assert!(text.contains("PGPASSWORD=\"$DB_PASSWORD\" psql \\\n"));
    assert!(text.contains("-U postgres.abcd1234"));
    assert!(!text.contains("METHOD 2"));
    assert!(!text.contains("CREATE TABLE user_questions"));
}

#[test]
fn test_show_duplicate_methods_printed_once() {
    let temp_dir = tempdir().unwrap();
    write_default_migration(temp_dir.path(), "SELECT 1;");

    let args = ShowArgs {
        path: None,
        method: vec![MethodArg::Console, MethodArg::Console],
    };
    let mut out = Vec::new();
    execute(&args, &global_for(temp_dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("Supabase SQL Editor (Recommended)").count(), 1);
}

#[test]
fn test_show_custom_template() {
    let temp_dir = tempdir().unwrap();
    write_default_migration(temp_dir.path(), "SELECT 1;");
    fs::write(
        temp_dir.path().join("handoff.yml"),
        "template: handoff.txt.j2\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("handoff.txt.j2"),
        "{{ file_name }} sha256:{{ checksum }}\n{{ sql }}\n",
    )
    .unwrap();

    let mut out = Vec::new();
    execute(&ShowArgs::default(), &global_for(temp_dir.path()), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        format!(
            "011_chapter_system_enhancement.sql sha256:{}\nSELECT 1;\n",
            mh_core::compute_checksum("SELECT 1;")
        )
    );
}

#[test]
fn test_show_missing_explicit_config() {
    let temp_dir = tempdir().unwrap();
    write_default_migration(temp_dir.path(), "SELECT 1;");
    let global = GlobalArgs {
        config: Some(temp_dir.path().join("elsewhere.yml")),
        ..global_for(temp_dir.path())
    };

    let mut out = Vec::new();
    let result = execute(&ShowArgs::default(), &global, &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
}
