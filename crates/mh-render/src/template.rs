//! Built-in instruction template.
//!
//! Rendered with `trim_blocks` and `lstrip_blocks`, so block tags on their
//! own line leave no blank lines behind.

/// Template name for the built-in layout
pub const INSTRUCTIONS_TEMPLATE_NAME: &str = "instructions";

/// Template name used for a project-supplied layout
pub const CUSTOM_TEMPLATE_NAME: &str = "custom";

/// Operator instructions followed by the migration SQL
pub const INSTRUCTIONS_TEMPLATE: &str = r#"📖 Applying {{ title }}...
==================================================

⚠️  Cannot apply SQL migrations via REST API

Please use ONE of these methods:

{% for method in methods %}
METHOD {{ loop.index }}: {{ method.title }}
--------------------------------------------------
{% if method.key == "console" %}
1. Go to: {{ console_url }}
2. Create a new query
3. Copy the contents of: {{ migration_path }}
4. Paste and run

{% elif method.key == "psql" %}
Run this command:
{% if psql.password_env %}
PGPASSWORD="${{ psql.password_env }}" psql \
{% else %}
# export PGPASSWORD from your secret store first
psql \
{% endif %}
  -h {{ psql.host|shell_quote }} \
  -p {{ psql.port }} \
  -U {{ psql.user|shell_quote }} \
  -d {{ psql.database|shell_quote }} \
  -f {{ migration_path|shell_quote }}

{% elif method.key == "manual" %}
Copy this SQL and run it in Supabase SQL Editor:

{{ sql }}
{% if not loop.last %}

{% endif %}
{% endif %}
{% endfor %}
"#;
