use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use runtime::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

/// Detect DB backend from URL scheme (sqlite/postgres).
pub fn detect_from_dsn(cfg: &DatabaseConfig) -> Result<Backend> {
    let raw = cfg.url.trim().to_owned();
    if raw.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }
    if is_sqlite_memory(&raw) {
        return Ok(Backend::Sqlite);
    }

    let url = Url::parse(&raw).map_err(|e| anyhow!("Invalid database DSN '{}': {}", raw, e))?;

    match url.scheme() {
        "sqlite" | "sqlite3" => Ok(Backend::Sqlite),
        "postgres" | "postgresql" => Ok(Backend::Postgres),
        other => Err(anyhow!("Unsupported database type: {}", other)),
    }
}

fn is_sqlite_memory(dsn: &str) -> bool {
    dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
}

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - Keeps "sqlite::memory:" as-is.
/// - Normalizes backslashes into forward slashes (important on Windows).
/// - Adds `mode=rwc` so a missing database file is created.
pub fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if is_sqlite_memory(dsn) {
        return Ok("sqlite::memory:".to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if let Some(dir) = p.parent() {
        if create_dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
    }

    // Rebuild DSN with absolute path and normalized slashes
    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    match query {
        Some(q) if q.split('&').any(|kv| kv.starts_with("mode=")) => {
            out.push('?');
            out.push_str(q);
        }
        Some(q) => {
            out.push('?');
            out.push_str(q);
            out.push_str("&mode=rwc");
        }
        None => out.push_str("?mode=rwc"),
    }
    Ok(out)
}

/// Open the pooled SeaORM connection described by `cfg`.
/// Relative sqlite paths resolve against `base_dir`.
pub async fn connect(cfg: &DatabaseConfig, base_dir: &Path) -> Result<DatabaseConnection> {
    let backend = detect_from_dsn(cfg)?;

    let mut dsn = cfg.url.trim().to_owned();
    if backend == Backend::Sqlite {
        dsn = absolutize_sqlite_dsn(&dsn, base_dir, true)?;
    }
    let memory = is_sqlite_memory(&dsn);

    let mut opts = ConnectOptions::new(dsn.clone());
    opts.max_connections(if memory { 1 } else { cfg.max_conns.unwrap_or(10) })
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if memory {
        // Every connection to :memory: is a separate database
        opts.min_connections(1);
    }
    if backend == Backend::Sqlite {
        let busy = Duration::from_millis(u64::from(cfg.busy_timeout_ms.unwrap_or(5000)));
        opts.map_sqlx_sqlite_opts(move |o| o.busy_timeout(busy));
    }

    tracing::info!("Connecting to database: {}", redact(&dsn));
    let db = Database::connect(opts)
        .await
        .with_context(|| format!("Failed to connect to {}", redact(&dsn)))?;
    tracing::info!("Connected DB backend: {:?}", backend);
    Ok(db)
}

/// Hide the password of a DSN for logging.
fn redact(dsn: &str) -> String {
    match Url::parse(dsn) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("***"));
            url.to_string()
        }
        _ => dsn.to_string(),
    }
}
