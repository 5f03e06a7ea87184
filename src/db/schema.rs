//! SQL DDL for bootstrapping the database schema.
//! Tables are created if missing; there is no migration step.

/// SQLite schema includes:
/// - `pytori_repos` table (one row per participating team)
/// - `pytori_commits` table (word-chain moves; `merged_on` set once merged)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Repositories
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS pytori_repos (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    status INTEGER NOT NULL DEFAULT 0
);

-- ---------------------------------------------------------------------------
-- Commits (is_merged: 0/1, merged_on: ISO-8601 text, present iff merged)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS pytori_commits (
    id INTEGER PRIMARY KEY NOT NULL,
    repository_id INTEGER NOT NULL,
    current_word TEXT NOT NULL DEFAULT '',
    review_comment TEXT NOT NULL DEFAULT '',
    theme TEXT NOT NULL DEFAULT '',
    is_merged INTEGER NOT NULL DEFAULT 0,
    merged_on TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_pytori_commits_repo_merged ON pytori_commits(repository_id, is_merged);
"#;
