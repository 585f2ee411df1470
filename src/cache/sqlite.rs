use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;

use super::store::{CacheKey, CacheStore};

/// `SQLite`-backed cache store.
///
/// Opens a fresh connection per operation; the database schema is created
/// on construction. Entries are unbounded and live until overwritten.
pub struct SqliteCacheStore {
    db_path: PathBuf,
}

impl SqliteCacheStore {
    /// Opens (creating if needed) the cache database at `db_path`.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }

        let store = Self { db_path };
        store.init_db()?;

        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                target_language TEXT NOT NULL,
                flow TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON translations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }
}

impl CacheStore for SqliteCacheStore {
    fn lookup(&self, key: &CacheKey) -> Result<Option<String>> {
        let digest = key.digest();
        let conn = self.connect()?;

        let mut stmt =
            conn.prepare("SELECT translated_text FROM translations WHERE cache_key = ?1")?;

        let result: Option<String> = stmt.query_row([&digest], |row| row.get(0)).ok();

        Ok(result)
    }

    fn put(&self, key: &CacheKey, translated_text: &str) -> Result<()> {
        let digest = key.digest();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, source_text, translated_text, target_language, flow)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            [
                digest.as_str(),
                key.source_text.as_str(),
                translated_text,
                key.target_language.as_str(),
                key.flow.as_str(),
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
