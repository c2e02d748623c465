use anyhow::{Context, Result};
use rusqlite::{ffi, Connection};
use std::path::Path;

use super::schema_gen::generate_create_table;
use crate::schema::ALL_TABLES;

/// Handle to the weapons database. Every pipeline stage receives a `&Store`
/// explicitly; nothing keeps ambient connection state.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file at the given path.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;
        disable_foreign_keys(&conn)?;
        Ok(Self { conn })
    }

    /// Open a private in-memory database, one per caller.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        disable_foreign_keys(&conn)?;
        Ok(Self { conn })
    }

    /// Create all six tables. Safe to call against an already-initialized
    /// store; every statement is CREATE TABLE IF NOT EXISTS.
    pub fn create_tables(&self) -> Result<()> {
        for schema in ALL_TABLES {
            let sql = generate_create_table(schema);
            self.conn
                .execute(&sql, [])
                .with_context(|| format!("Failed to create table: {}", schema.name))?;
        }

        Ok(())
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Turn foreign-key enforcement off explicitly. The bundled SQLite build
/// ships with SQLITE_DEFAULT_FOREIGN_KEYS=1; left on, the declared
/// Weapon->Material and EnchantedWith->Enchanting references fail at
/// prepare time ("foreign key mismatch") because the referenced name
/// columns are not UNIQUE. These are name-valued lookups that may dangle
/// (e.g. bow weapons reference the type name "Archery" while the seeded
/// row is named "Bow"), so enforcement must stay off.
fn disable_foreign_keys(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = OFF;")
        .context("Failed to disable foreign key enforcement")
}

/// Whether an error is a duplicate-key failure, i.e. a repeated Weapon.ID
/// from re-seeding an already-populated store. Only primary-key and
/// unique-index violations qualify; other constraint failures (NOT NULL,
/// CHECK) are not duplicates.
pub fn is_duplicate_key(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<rusqlite::Error>(),
            Some(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        store.create_tables().unwrap();
        store.create_tables().unwrap();

        let count: i64 = store
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn test_foreign_key_enforcement_is_off() {
        let store = Store::open_in_memory().unwrap();
        let enabled: i64 = store
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 0);
    }

    #[test]
    fn test_weak_references_are_not_enforced() {
        let store = Store::open_in_memory().unwrap();
        store.create_tables().unwrap();

        // No Type or Material row exists yet; the insert must still land.
        // With enforcement on, this statement would not even prepare: the
        // referenced Material(Name) column is not UNIQUE.
        store
            .conn()
            .execute(
                "INSERT INTO \"Weapon\" (\"ID\", \"Name\", \"Type\", \"Material\") \
                 VALUES ('deadbeef', 'Test Blade', 'No Such Type', 'No Such Material')",
                [],
            )
            .unwrap();
    }

    #[test]
    fn test_duplicate_key_classification() {
        let store = Store::open_in_memory().unwrap();
        store.create_tables().unwrap();

        let insert = "INSERT INTO \"Weapon\" (\"ID\", \"Name\", \"Type\", \"Material\") \
                      VALUES ('00012eb7', 'Iron Sword', 'One-Handed Sword', 'Iron')";
        store.conn().execute(insert, []).unwrap();

        // Repeating the ID violates the primary key.
        let dup = anyhow::Error::from(store.conn().execute(insert, []).unwrap_err());
        assert!(is_duplicate_key(&dup));

        // A NOT NULL violation is a constraint failure but not a duplicate.
        let not_null = anyhow::Error::from(
            store
                .conn()
                .execute(
                    "INSERT INTO \"Type\" (\"Name\", \"Stagger\") VALUES (NULL, 1.0)",
                    [],
                )
                .unwrap_err(),
        );
        assert!(!is_duplicate_key(&not_null));
    }
}
