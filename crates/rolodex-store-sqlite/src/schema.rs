//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    email     TEXT    NOT NULL UNIQUE,   -- <= 120 chars
    password  TEXT    NOT NULL,          -- argon2 PHC string
    is_active INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS contacts (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT,                      -- <= 80 chars
    email     TEXT    NOT NULL UNIQUE,   -- <= 120 chars
    address   TEXT    NOT NULL,          -- <= 120 chars
    phone     TEXT    NOT NULL UNIQUE    -- <= 20 chars
);

CREATE TABLE IF NOT EXISTS contact_groups (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    group_name TEXT    NOT NULL UNIQUE   -- <= 20 chars
);

-- No ON DELETE action: removing a contact or group that still has
-- subscriptions fails with a FOREIGN KEY constraint error.
CREATE TABLE IF NOT EXISTS subscriptions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER NOT NULL REFERENCES contacts(id),
    group_id   INTEGER NOT NULL REFERENCES contact_groups(id),
    UNIQUE (contact_id, group_id)
);

CREATE INDEX IF NOT EXISTS subscriptions_group_idx ON subscriptions(group_id);

PRAGMA user_version = 1;
";
