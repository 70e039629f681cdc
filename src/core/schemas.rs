//! Database layout: one key-value table partitioned into named buckets.

pub const DEFAULT_DB_NAME: &str = "projects.db";

pub const KV_DB_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS kv (
        bucket TEXT NOT NULL,
        key TEXT NOT NULL,
        value TEXT NOT NULL,
        PRIMARY KEY (bucket, key)
    )
";

pub const KV_DB_INDEX_VALUE: &str =
    "CREATE INDEX IF NOT EXISTS idx_kv_bucket_value ON kv(bucket, value)";

/// Config key holding the Unix time of the last last-edited refresh.
pub const LAST_REFRESH_TIME_KEY: &str = "lastRefreshTime";

/// Status assigned to a project when it is first indexed.
pub const DEFAULT_STATUS: &str = "Indexed";

/// Named namespaces inside the key-value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ProjectPaths,
    Status,
    ProjectAliases,
    Config,
    LastEdited,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::ProjectPaths => "project_paths",
            Bucket::Status => "project_status",
            Bucket::ProjectAliases => "project_aliases",
            Bucket::Config => "config",
            Bucket::LastEdited => "last_edited",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
