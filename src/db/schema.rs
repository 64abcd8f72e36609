//! SQL DDL for the catalog store.

/// SQLite schema:
/// - `tools`: one row per catalog entry; `features`, `useCases` and `steps`
///   hold JSON arrays serialized as text
/// - `users`: admin credentials; `password` holds an Argon2 PHC string
/// - `sessions`: issued login tokens, `expires_at` is RFC3339
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS tools (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    category TEXT,
    seoTitle TEXT,
    seoDescription TEXT,
    longDescription TEXT,
    features TEXT, -- JSON array
    useCases TEXT, -- JSON array
    steps TEXT -- JSON array
);

CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sessions (
    token TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    expires_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_sessions_expires_at ON sessions(expires_at);
"#;
