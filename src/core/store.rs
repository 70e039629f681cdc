//! Key-value store adapter for pman's state.
//!
//! Every record lives in one SQLite table, partitioned into named buckets
//! (see [`Bucket`]). A connection is opened per call; nothing is cached
//! across calls.

use crate::core::db;
use crate::core::error::PmanError;
use crate::core::schemas::Bucket;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Store handle: the location of the database file.
///
/// Cheap to clone; it holds no open connection.
#[derive(Debug, Clone)]
pub struct Store {
    /// Absolute path to the database file
    pub db_path: PathBuf,
}

impl Store {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a closure with a fresh connection to the database.
    pub fn with_conn<F, R>(&self, op_name: &str, f: F) -> Result<R, PmanError>
    where
        F: FnOnce(&mut Connection) -> Result<R, PmanError>,
    {
        let mut conn = db::db_connect(&self.db_path)?;
        let result = f(&mut conn);
        match &result {
            Ok(_) => tracing::debug!(op = op_name, db = %self.db_path.display(), "store op ok"),
            Err(e) => tracing::debug!(op = op_name, error = %e, "store op failed"),
        }
        result
    }

    /// Fetch a single value. A missing key is `PmanError::NotFound`.
    pub fn get_record(&self, key: &str, bucket: Bucket) -> Result<String, PmanError> {
        self.with_conn("get_record", |conn| {
            let value: Option<String> = conn
                .query_row(
                    "SELECT value FROM kv WHERE bucket = ?1 AND key = ?2",
                    params![bucket.as_str(), key],
                    |row| row.get(0),
                )
                .optional()?;
            value.ok_or_else(|| PmanError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
        })
    }

    /// Overwrite the value of an existing key. Fails with `NotFound` if the key
    /// is absent, leaving the bucket untouched.
    pub fn update_rec(&self, key: &str, value: &str, bucket: Bucket) -> Result<(), PmanError> {
        self.with_conn("update_rec", |conn| {
            let changed = conn.execute(
                "UPDATE kv SET value = ?3 WHERE bucket = ?1 AND key = ?2",
                params![bucket.as_str(), key, value],
            )?;
            if changed == 0 {
                return Err(PmanError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                });
            }
            Ok(())
        })
    }

    /// Upsert every record of `records` into `bucket` in one transaction.
    pub fn write_to_db(
        &self,
        records: &HashMap<String, String>,
        bucket: Bucket,
    ) -> Result<(), PmanError> {
        self.with_conn("write_to_db", |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO kv(bucket, key, value) VALUES(?1, ?2, ?3)
                     ON CONFLICT(bucket, key) DO UPDATE SET value = excluded.value",
                )?;
                for (key, value) in records {
                    stmt.execute(params![bucket.as_str(), key, value])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
    }

    /// Every record of a bucket. An empty bucket yields an empty map.
    pub fn get_all_records(&self, bucket: Bucket) -> Result<HashMap<String, String>, PmanError> {
        self.with_conn("get_all_records", |conn| {
            let mut stmt = conn.prepare("SELECT key, value FROM kv WHERE bucket = ?1")?;
            let rows = stmt.query_map(params![bucket.as_str()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;

            let mut results = HashMap::new();
            for r in rows {
                let (k, v) = r?;
                results.insert(k, v);
            }
            Ok(results)
        })
    }

    /// Delete a key. Returns whether a record was removed.
    pub fn delete_from_db(&self, key: &str, bucket: Bucket) -> Result<bool, PmanError> {
        self.with_conn("delete_from_db", |conn| {
            let changed = conn.execute(
                "DELETE FROM kv WHERE bucket = ?1 AND key = ?2",
                params![bucket.as_str(), key],
            )?;
            Ok(changed > 0)
        })
    }

    /// In one transaction, delete `key` from each of `buckets` and every record
    /// of `by_value` whose value is `key`. Returns the keys removed from `by_value`.
    pub fn purge_key(
        &self,
        key: &str,
        buckets: &[Bucket],
        by_value: Bucket,
    ) -> Result<Vec<String>, PmanError> {
        self.with_conn("purge_key", |conn| {
            let tx = conn.transaction()?;
            for bucket in buckets {
                tx.execute(
                    "DELETE FROM kv WHERE bucket = ?1 AND key = ?2",
                    params![bucket.as_str(), key],
                )?;
            }
            let referrers = {
                let mut stmt =
                    tx.prepare("SELECT key FROM kv WHERE bucket = ?1 AND value = ?2 ORDER BY key")?;
                let rows = stmt.query_map(params![by_value.as_str(), key], |row| row.get(0))?;
                rows.collect::<Result<Vec<String>, _>>()?
            };
            tx.execute(
                "DELETE FROM kv WHERE bucket = ?1 AND value = ?2",
                params![by_value.as_str(), key],
            )?;
            tx.commit()?;
            Ok(referrers)
        })
    }

    /// Remove the database file entirely.
    pub fn reset(&self) -> Result<bool, PmanError> {
        db::remove_db_files(&self.db_path)
    }
}
