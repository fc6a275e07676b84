pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, warn};

pub use repository::{CourseStore, SqliteCourseStore};

/// Opens a pool for `database_url`, creating the SQLite file if needed.
///
/// In-memory databases live only as long as their connection, so for those
/// the pool is pinned to one connection that is never recycled and
/// `max_connections` is ignored.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = is_in_memory(database_url);
    let pool_options = if in_memory {
        if max_connections != 1 {
            warn!(
                max_connections,
                "in-memory database uses a single connection; configured pool size ignored"
            );
        }
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    debug!(database_url, in_memory, "opening sqlite pool");
    pool_options.connect_with(options).await
}

/// `sqlite::memory:` / `sqlite://:memory:`, or any URL with `mode=memory`.
fn is_in_memory(database_url: &str) -> bool {
    let (location, query) = database_url.split_once('?').unwrap_or((database_url, ""));
    let path = location.trim_start_matches("sqlite:").trim_start_matches("//");

    path == ":memory:" || query.split('&').any(|param| param == "mode=memory")
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
