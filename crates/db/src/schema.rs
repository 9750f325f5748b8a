//! DDL for the `prompts` table, applied in order by
//! [`bootstrap_schema`](crate::bootstrap_schema).

pub const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS prompts (
        id          BIGSERIAL PRIMARY KEY,
        title       TEXT NOT NULL,
        prompt      TEXT NOT NULL,
        is_favorite BOOLEAN NOT NULL DEFAULT FALSE,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE INDEX IF NOT EXISTS idx_prompts_created_at ON prompts (created_at)",
    "CREATE INDEX IF NOT EXISTS idx_prompts_is_favorite ON prompts (is_favorite)",
];
