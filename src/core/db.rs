use crate::core::error;
use crate::core::schemas;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub fn db_connect(db_path: &Path) -> Result<Connection, error::PmanError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(error::PmanError::IoError)?;
    }
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(error::PmanError::RusqliteError)?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))
        .map_err(error::PmanError::RusqliteError)?;
    initialize_kv_schema(&conn)?;
    Ok(conn)
}

fn initialize_kv_schema(conn: &Connection) -> Result<(), error::PmanError> {
    conn.execute(schemas::KV_DB_SCHEMA, [])?;
    conn.execute(schemas::KV_DB_INDEX_VALUE, [])?;
    Ok(())
}

/// Remove the database file and its WAL side files. Returns whether anything was removed.
pub fn remove_db_files(db_path: &Path) -> Result<bool, error::PmanError> {
    let mut removed = false;
    for suffix in ["", "-wal", "-shm"] {
        let mut os = db_path.as_os_str().to_owned();
        os.push(suffix);
        let path = Path::new(&os);
        if path.exists() {
            fs::remove_file(path).map_err(error::PmanError::IoError)?;
            removed = true;
        }
    }
    Ok(removed)
}
