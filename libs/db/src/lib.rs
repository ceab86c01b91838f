//! SQLite connection handling for the wardrobe service.
//!
//! Provides a `DbHandle` wrapping an sqlx connection pool. The handle owns
//! DSN parsing, parent-directory creation for file databases and the pragmas
//! every connection needs (foreign keys on, busy timeout, WAL journal for
//! file-backed stores).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Library-local result type.
pub type Result<T> = std::result::Result<T, DbError>;

/// Typed error for the DB handle and helpers.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Unknown DSN: {0}")]
    UnknownDsn(String),

    #[error("Empty SQLite path in DSN")]
    EmptyPath,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Connection options.
///
/// Covers the pool knobs the server exposes through configuration; anything
/// not set falls back to a conservative default.
#[derive(Clone, Debug)]
pub struct ConnectOpts {
    /// Maximum number of connections in the pool.
    pub max_conns: Option<u32>,
    /// Timeout to acquire a connection from the pool.
    pub acquire_timeout: Option<Duration>,
    /// Busy timeout applied via PRAGMA busy_timeout.
    pub busy_timeout: Option<Duration>,
    /// For file DSNs, create parent directories if missing.
    pub create_dirs: bool,
}

impl Default for ConnectOpts {
    fn default() -> Self {
        Self {
            max_conns: Some(10),
            acquire_timeout: Some(Duration::from_secs(30)),
            busy_timeout: Some(Duration::from_millis(5_000)),
            create_dirs: true,
        }
    }
}

/// Returns true for the in-memory DSN spellings sqlx accepts.
pub fn is_memory_dsn(dsn: &str) -> bool {
    dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
}

/// Extract the filesystem path from a `sqlite://` or `sqlite:` DSN,
/// dropping any query string.
fn file_path_of(dsn: &str) -> Result<PathBuf> {
    let tail = dsn
        .strip_prefix("sqlite://")
        .or_else(|| dsn.strip_prefix("sqlite:"))
        .ok_or_else(|| DbError::UnknownDsn(dsn.to_string()))?;

    let path = match tail.split_once('?') {
        Some((p, _query)) => p,
        None => tail,
    };

    if path.is_empty() {
        return Err(DbError::EmptyPath);
    }
    Ok(PathBuf::from(path))
}

/// Main handle: an sqlx SQLite pool plus the DSN it was opened with.
pub struct DbHandle {
    pool: SqlitePool,
    dsn: String,
}

impl DbHandle {
    /// Connect and build handle.
    ///
    /// In-memory databases are pinned to a single pooled connection; with a
    /// larger pool every connection would see its own empty database.
    pub async fn connect(dsn: &str, opts: ConnectOpts) -> Result<Self> {
        let memory = is_memory_dsn(dsn);

        let conn_opts = if memory {
            SqliteConnectOptions::from_str("sqlite::memory:")?
                .journal_mode(SqliteJournalMode::Memory)
        } else {
            let path = file_path_of(dsn)?;
            if opts.create_dirs {
                if let Some(dir) = path.parent() {
                    if !dir.as_os_str().is_empty() {
                        std::fs::create_dir_all(dir)?;
                    }
                }
            }
            SqliteConnectOptions::new()
                .filename(&path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
        };

        let mut conn_opts = conn_opts.foreign_keys(true);
        if let Some(t) = opts.busy_timeout {
            conn_opts = conn_opts.busy_timeout(t);
        }

        let max_conns = if memory {
            1
        } else {
            opts.max_conns.unwrap_or(10)
        };
        let mut pool_opts = SqlitePoolOptions::new().max_connections(max_conns);
        if let Some(t) = opts.acquire_timeout {
            pool_opts = pool_opts.acquire_timeout(t);
        }

        let pool = pool_opts.connect_with(conn_opts).await?;
        tracing::debug!(dsn, max_conns, "opened sqlite pool");

        Ok(Self {
            pool,
            dsn: dsn.to_string(),
        })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// DSN this handle was opened with.
    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    /// Close the pool, waiting for in-flight connections to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_memory_dsns() {
        assert!(is_memory_dsn("sqlite::memory:"));
        assert!(is_memory_dsn("sqlite://:memory:"));
        assert!(!is_memory_dsn("sqlite://wardrobe.db"));
    }

    #[test]
    fn extracts_file_path() {
        let p = file_path_of("sqlite:///tmp/wardrobe.db?cache=shared").unwrap();
        assert_eq!(p, PathBuf::from("/tmp/wardrobe.db"));

        let p = file_path_of("sqlite:data/wardrobe.db").unwrap();
        assert_eq!(p, PathBuf::from("data/wardrobe.db"));
    }

    #[test]
    fn rejects_foreign_dsns() {
        assert!(matches!(
            file_path_of("postgres://localhost/app"),
            Err(DbError::UnknownDsn(_))
        ));
        assert!(matches!(file_path_of("sqlite://"), Err(DbError::EmptyPath)));
    }
}
