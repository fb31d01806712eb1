//! SQLite-backed anchor storage.
//!
//! The connection is owned by [`SqliteStore`] and closed when the store is
//! dropped, so a command opens the store once and releases it on every exit
//! path.

use std::fs;
use std::path::Path;

use log::debug;
use rusqlite::{ffi, params, Connection, ErrorCode, OptionalExtension};

use crate::anchor::Anchor;
use crate::error::{Error, Result};
use crate::store::AnchorStore;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS anchors (id INTEGER PRIMARY KEY, key TEXT UNIQUE, value TEXT)";

fn is_unique_constraint_error(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn scan_anchor(row: &rusqlite::Row) -> rusqlite::Result<Anchor> {
    let value: Option<String> = row.get(2)?;

    Ok(Anchor {
        id: row.get(0)?,
        key: row.get(1)?,
        value: value.unwrap_or_default(),
    })
}

pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`, creating missing
    /// parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database
    /// cannot be opened or initialized.
    pub fn open(path: &str) -> Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::io_error(
                        "database directory".to_string(),
                        parent.display().to_string(),
                        e,
                    )
                })?;
            }
        }

        debug!("Opening database at `{path}`");
        Self::initialize(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        Self::initialize(Connection::open_in_memory()?)
    }

    fn initialize(connection: Connection) -> Result<Self> {
        connection.execute_batch(CREATE_TABLE)?;
        Ok(Self { connection })
    }
}

impl AnchorStore for SqliteStore {
    fn create(&mut self, key: &str, value: &str) -> Result<()> {
        let result = self.connection.execute(
            "INSERT INTO anchors (key, value) VALUES (?1, ?2)",
            params![key, value],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_constraint_error(&err) => Err(Error::Uniqueness(key.to_string())),
            Err(err) => Err(Error::Database(err)),
        }
    }

    fn read(&self, key: &str) -> Result<Anchor> {
        self.connection
            .query_row(
                "SELECT id, key, value FROM anchors WHERE key = ?1",
                params![key],
                scan_anchor,
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    fn read_all(&self) -> Result<Vec<Anchor>> {
        let mut statement = self
            .connection
            .prepare("SELECT id, key, value FROM anchors ORDER BY id")?;

        let anchors = statement
            .query_map([], scan_anchor)?
            .collect::<rusqlite::Result<Vec<Anchor>>>()?;

        Ok(anchors)
    }

    fn update(&mut self, anchor: &Anchor) -> Result<()> {
        let rows_affected = self.connection.execute(
            "UPDATE anchors SET key = ?1, value = ?2 WHERE key = ?1",
            params![anchor.key, anchor.value],
        )?;

        if rows_affected == 0 {
            return Err(Error::NotFound(anchor.key.clone()));
        }

        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let rows_affected = self
            .connection
            .execute("DELETE FROM anchors WHERE key = ?1", params![key])?;

        if rows_affected == 0 {
            return Err(Error::NotFound(key.to_string()));
        }

        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        let rows_affected = self.connection.execute("DELETE FROM anchors", [])?;
        debug!("Reset removed {rows_affected} anchor(s)");
        Ok(())
    }

    fn import(&mut self, anchors: &[Anchor]) -> Result<usize> {
        if anchors.is_empty() {
            return Ok(0);
        }

        let transaction = self.connection.transaction()?;
        let mut inserted = 0;

        {
            let mut statement = transaction
                .prepare("INSERT OR IGNORE INTO anchors (key, value) VALUES (?1, ?2)")?;

            for anchor in anchors {
                inserted += statement.execute(params![anchor.key, anchor.value])?;
            }
        }

        transaction.commit()?;
        debug!("Imported {inserted} of {} anchor(s)", anchors.len());

        Ok(inserted)
    }
}
