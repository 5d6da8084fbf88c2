//! SQLite-backed session store.
//!
//! A command-line host runs one process per user action, so the session's
//! [`UserProfile`] has to live somewhere between invocations. This store
//! keeps it as JSON under a single key, next to any other small pieces of
//! host state.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

use super::data_dir;
use crate::error::{CoreError, DatabaseError};
use crate::profile::UserProfile;

const PROFILE_KEY: &str = "user_profile";

/// SQLite database holding the current session.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/growthmind/growthmind.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("growthmind.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open (or create) the database at `path`.
    pub fn open_at(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove `key`. Returns whether it existed.
    pub fn kv_delete(&self, key: &str) -> Result<bool, DatabaseError> {
        let removed = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }

    /// The stored session profile, if a session exists.
    pub fn load_profile(&self) -> Result<Option<UserProfile>, DatabaseError> {
        let Some(json) = self.kv_get(PROFILE_KEY)? else {
            return Ok(None);
        };
        let profile = serde_json::from_str(&json)
            .map_err(|e| DatabaseError::CorruptProfile(e.to_string()))?;
        Ok(Some(profile))
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(profile)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        self.kv_set(PROFILE_KEY, &json)?;
        debug!(
            completions = profile.completed_challenges.len(),
            reflections = profile.reflection_entries.len(),
            "session profile saved"
        );
        Ok(())
    }

    /// Drop the stored profile, ending the session. Returns whether one existed.
    pub fn clear_profile(&self) -> Result<bool, DatabaseError> {
        self.kv_delete(PROFILE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{complete_challenge, save_reflection};
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kv_set_overwrites() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.kv_get("k").unwrap(), None);
        db.kv_set("k", "one").unwrap();
        db.kv_set("k", "two").unwrap();
        assert_eq!(db.kv_get("k").unwrap().as_deref(), Some("two"));
        assert!(db.kv_delete("k").unwrap());
        assert!(!db.kv_delete("k").unwrap());
    }

    #[test]
    fn profile_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_profile().unwrap().is_none());

        let mut profile = UserProfile::new(day(2024, 8, 1));
        profile.name = "Ada".into();
        complete_challenge(&mut profile, 8, day(2024, 8, 2)).unwrap();
        save_reflection(&mut profile, "kept at it", day(2024, 8, 2).and_hms_opt(7, 30, 0).unwrap());

        db.save_profile(&profile).unwrap();
        assert_eq!(db.load_profile().unwrap(), Some(profile));

        assert!(db.clear_profile().unwrap());
        assert!(db.load_profile().unwrap().is_none());
    }

    #[test]
    fn corrupt_profile_is_reported() {
        let db = Database::open_memory().unwrap();
        db.kv_set(PROFILE_KEY, "{\"name\": 3}").unwrap();
        assert!(matches!(
            db.load_profile(),
            Err(DatabaseError::CorruptProfile(_))
        ));
    }

    #[test]
    fn file_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.db");
        let profile = UserProfile::new(day(2024, 8, 1));

        Database::open_at(&path).unwrap().save_profile(&profile).unwrap();
        let reopened = Database::open_at(&path).unwrap();
        assert_eq!(reopened.load_profile().unwrap(), Some(profile));
    }
}
