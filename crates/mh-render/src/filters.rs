//! Template filters: shell_quote

/// Quote a value for pasting into a POSIX shell.
///
/// Values made only of characters that are safe unquoted pass through
/// unchanged; anything else is wrapped in single quotes.
///
/// ```jinja
/// psql -f {{ migration_path|shell_quote }}
/// ```
pub(crate) fn shell_quote(value: String) -> String {
    let safe = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:@,+=%".contains(c));
    if safe {
        value
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_unquoted() {
        assert_eq!(
            shell_quote("supabase/migrations/011_chapter_system_enhancement.sql".into()),
            "supabase/migrations/011_chapter_system_enhancement.sql"
        );
        assert_eq!(
            shell_quote("postgres.abcd1234".into()),
            "postgres.abcd1234"
        );
    }

    #[test]
    fn test_spaces_and_placeholders_quoted() {
        assert_eq!(shell_quote("my migrations/a.sql".into()), "'my migrations/a.sql'");
        assert_eq!(shell_quote("<db-host>".into()), "'<db-host>'");
        assert_eq!(shell_quote(String::new()), "''");
    }

    #[test]
    fn test_embedded_single_quote() {
        assert_eq!(shell_quote("it's.sql".into()), r"'it'\''s.sql'");
    }
}
