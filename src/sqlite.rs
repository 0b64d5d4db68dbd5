use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::animal::{Animal, NewAnimal};
use crate::error::{Result, StoreError};
use crate::schema::{animal_schema, Schema, ANIMALS_TABLE};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "animals.db";

/// Store configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Schema definition for the database
    pub schema: Schema,
}

impl StoreConfig {
    /// Create a new config with path and schema
    pub fn new(db_path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            db_path: db_path.into(),
            schema,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH, animal_schema())
    }
}

/// Owner of the single connection to the animals database.
///
/// Dropping the store releases the connection; [`AnimalStore::close`] does the
/// same but reports the outcome.
pub struct AnimalStore {
    config: StoreConfig,
    conn: Connection,
}

impl AnimalStore {
    /// Open the database file, creating it if it does not exist.
    pub fn open(config: StoreConfig) -> Result<Self> {
        info!(path = %config.db_path.display(), "opening sqlite database");
        let conn = Connection::open(&config.db_path).map_err(|source| StoreError::Open {
            path: config.db_path.clone(),
            source,
        })?;
        Ok(Self { config, conn })
    }

    /// Open a private in-memory database with the default schema definition.
    pub fn open_in_memory() -> Result<Self> {
        let config = StoreConfig::new(":memory:", animal_schema());
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: config.db_path.clone(),
            source,
        })?;
        Ok(Self { config, conn })
    }

    pub fn path(&self) -> &Path {
        &self.config.db_path
    }

    /// Create every configured table that does not exist yet.
    pub fn ensure_schema(&self) -> Result<()> {
        let sql = self.config.schema.to_sql();
        debug!(%sql, "ensuring schema");
        self.conn.execute_batch(&sql).map_err(StoreError::Schema)
    }

    /// Insert one record and return the identifier assigned by the engine.
    pub fn insert(&self, animal: &NewAnimal) -> Result<i64> {
        insert_with(&self.conn, animal)
    }

    /// Insert all records in one transaction; on any failure nothing is stored.
    pub fn insert_all(&mut self, animals: &[NewAnimal]) -> Result<Vec<i64>> {
        let tx = self.conn.transaction().map_err(StoreError::Insert)?;
        let ids = animals
            .iter()
            .map(|animal| insert_with(&tx, animal))
            .collect::<Result<Vec<_>>>()?;
        tx.commit().map_err(StoreError::Insert)?;
        Ok(ids)
    }

    /// Every record, ordered by identifier.
    pub fn all(&self) -> Result<Vec<Animal>> {
        let sql = format!("SELECT {} FROM {ANIMALS_TABLE} ORDER BY id", Animal::COLUMNS);
        self.select(&sql, params![])
    }

    /// Records whose life expectancy is strictly greater than `years`.
    ///
    /// Records without a life expectancy never match.
    pub fn living_longer_than(&self, years: i64) -> Result<Vec<Animal>> {
        let sql = format!(
            "SELECT {} FROM {ANIMALS_TABLE} WHERE life_expectancy > ?1 ORDER BY id",
            Animal::COLUMNS
        );
        self.select(&sql, params![years])
    }

    /// The oldest record with the given name, if any.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Animal>> {
        let sql = format!(
            "SELECT {} FROM {ANIMALS_TABLE} WHERE name = ?1 ORDER BY id LIMIT 1",
            Animal::COLUMNS
        );
        self.conn
            .query_row(&sql, params![name], Animal::from_row)
            .optional()
            .map_err(StoreError::Query)
    }

    /// Set the in-danger flag on every record with the given name.
    /// Returns the number of rows changed.
    pub fn set_in_danger(&self, name: &str, in_danger: bool) -> Result<usize> {
        let sql = format!("UPDATE {ANIMALS_TABLE} SET in_danger = ?1 WHERE name = ?2");
        self.conn
            .execute(&sql, params![in_danger, name])
            .map_err(StoreError::Update)
    }

    /// Delete every record with the given name. Returns the number of rows removed.
    pub fn delete_by_name(&self, name: &str) -> Result<usize> {
        let sql = format!("DELETE FROM {ANIMALS_TABLE} WHERE name = ?1");
        self.conn
            .execute(&sql, params![name])
            .map_err(StoreError::Delete)
    }

    /// Close the connection, flushing any pending state.
    pub fn close(self) -> Result<()> {
        debug!(path = %self.config.db_path.display(), "closing sqlite database");
        self.conn.close().map_err(|(_, e)| StoreError::Close(e))
    }

    fn select(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Animal>> {
        let mut stmt = self.conn.prepare(sql).map_err(StoreError::Query)?;
        let rows = stmt
            .query_map(params, Animal::from_row)
            .map_err(StoreError::Query)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::Query)
    }
}

fn insert_with(conn: &Connection, animal: &NewAnimal) -> Result<i64> {
    let sql = format!(
        "INSERT INTO {ANIMALS_TABLE} (name, habitat, life_expectancy, in_danger) \
         VALUES (?1, ?2, ?3, ?4)"
    );
    conn.execute(
        &sql,
        params![
            animal.name,
            animal.habitat,
            animal.life_expectancy,
            animal.in_danger
        ],
    )
    .map_err(StoreError::Insert)?;
    Ok(conn.last_insert_rowid())
}
