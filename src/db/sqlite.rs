use crate::db::schema::SQLITE_INIT;
use crate::error::RecordsError;
use crate::types::Record;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// Handle to the records table. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `db_path`, check the connection and
    /// make sure the `records` table exists.
    pub async fn connect(db_path: &Path) -> Result<Self, RecordsError> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

        sqlx::query("SELECT 1").execute(&pool).await?;
        info!(path = %db_path.display(), "connected to database");

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RecordsError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a record and read it back with its assigned id and timestamp.
    pub async fn create(&self, name: &str) -> Result<Record, RecordsError> {
        let id = sqlx::query("INSERT INTO records (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        let record = sqlx::query_as::<_, Record>(
            "SELECT id, name, created_at FROM records WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        debug!(id, "record inserted");
        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<Record>, RecordsError> {
        let records =
            sqlx::query_as::<_, Record>("SELECT id, name, created_at FROM records ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(records)
    }

    /// Rename the record with `id`. [`RecordsError::NotFound`] when no row matched.
    pub async fn update(&self, id: i64, name: &str) -> Result<(), RecordsError> {
        let affected = sqlx::query("UPDATE records SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(RecordsError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Remove the record with `id`. [`RecordsError::NotFound`] when no row matched.
    pub async fn delete(&self, id: i64) -> Result<(), RecordsError> {
        let affected = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(RecordsError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
