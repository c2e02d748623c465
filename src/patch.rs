//! Scripted corrections to the seeded dataset. Each patch is the same
//! shape: show the rows the mutation is about to touch, run one UPDATE or
//! DELETE with bound parameters, then show the rows matching the corrected
//! predicate. Patches match by predicate, not by key, and run in a fixed
//! order: the Ebony 15-to-14 correction must run before 16-to-15, or the
//! second would collapse two distinct rows onto the same damage value.

use anyhow::{Context, Result};
use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

use crate::report::{fetch_all, print_rows};
use crate::store::Store;

/// A bindable literal for a patch statement
#[derive(Debug, Clone, Copy)]
pub enum SqlArg {
    Int(i64),
    Real(f64),
    Text(&'static str),
}

impl ToSql for SqlArg {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlArg::Int(i) => i.to_sql(),
            SqlArg::Real(r) => r.to_sql(),
            SqlArg::Text(t) => t.to_sql(),
        }
    }
}

pub struct Patch {
    pub name: &'static str,
    /// Rows the mutation is about to touch
    pub before_sql: &'static str,
    /// The one UPDATE or DELETE statement
    pub apply_sql: &'static str,
    pub args: &'static [SqlArg],
    /// Rows matching the corrected predicate
    pub after_sql: &'static str,
}

pub static PATCHES: &[Patch] = &[
    Patch {
        name: "Two-Handed Sword swing speed",
        before_sql: "SELECT \"Name\", \"Speed\" FROM \"Type\" WHERE \"Name\" = 'Two-Handed Sword'",
        apply_sql: "UPDATE \"Type\" SET \"Speed\" = ? WHERE \"Name\" = ?",
        args: &[SqlArg::Real(0.75), SqlArg::Text("Two-Handed Sword")],
        after_sql: "SELECT \"Name\", \"Speed\" FROM \"Type\" WHERE \"Name\" = 'Two-Handed Sword'",
    },
    Patch {
        name: "Ebony damage correction (15 to 14)",
        before_sql: "SELECT \"Name\", \"Damage\", \"Weight\", \"Value\" FROM \"Material\" \
                     WHERE \"Name\" = 'Ebony' AND \"Damage\" = 15",
        apply_sql: "UPDATE \"Material\" SET \"Damage\" = ? WHERE \"Name\" = ? AND \"Damage\" = ?",
        args: &[SqlArg::Int(14), SqlArg::Text("Ebony"), SqlArg::Int(15)],
        after_sql: "SELECT \"Name\", \"Damage\", \"Weight\", \"Value\" FROM \"Material\" \
                    WHERE \"Name\" = 'Ebony' AND \"Damage\" = 14",
    },
    Patch {
        name: "Ebony damage correction (16 to 15)",
        before_sql: "SELECT \"Name\", \"Damage\", \"Weight\", \"Value\" FROM \"Material\" \
                     WHERE \"Name\" = 'Ebony' AND \"Damage\" = 16",
        apply_sql: "UPDATE \"Material\" SET \"Damage\" = ? WHERE \"Name\" = ? AND \"Damage\" = ?",
        args: &[SqlArg::Int(15), SqlArg::Text("Ebony"), SqlArg::Int(16)],
        after_sql: "SELECT \"Name\", \"Damage\", \"Weight\", \"Value\" FROM \"Material\" \
                    WHERE \"Name\" = 'Ebony' AND \"Damage\" = 15",
    },
    Patch {
        name: "Remove the Iron Bow",
        before_sql: "SELECT \"ID\", \"Name\", \"Type\", \"Material\" FROM \"Weapon\" \
                     WHERE \"Name\" = 'Iron Bow'",
        apply_sql: "DELETE FROM \"Weapon\" WHERE \"Name\" = ?",
        args: &[SqlArg::Text("Iron Bow")],
        after_sql: "SELECT \"ID\", \"Name\", \"Type\", \"Material\" FROM \"Weapon\" \
                    WHERE \"Name\" = 'Iron Bow'",
    },
    Patch {
        name: "Remove the Steel Bow",
        before_sql: "SELECT \"ID\", \"Name\", \"Type\", \"Material\" FROM \"Weapon\" \
                     WHERE \"Name\" = 'Steel Bow'",
        apply_sql: "DELETE FROM \"Weapon\" WHERE \"Name\" = ?",
        args: &[SqlArg::Text("Steel Bow")],
        after_sql: "SELECT \"ID\", \"Name\", \"Type\", \"Material\" FROM \"Weapon\" \
                    WHERE \"Name\" = 'Steel Bow'",
    },
];

/// Apply one patch, printing before/after rows around the mutation.
/// Returns the number of rows the statement changed.
pub fn apply(store: &Store, patch: &Patch) -> Result<usize> {
    println!("Patch: {}", patch.name);

    let before = fetch_all(store.conn(), patch.before_sql)?;
    println!("  before:");
    print_rows(&before, "    ");

    let args: Vec<&dyn ToSql> = patch.args.iter().map(|a| a as &dyn ToSql).collect();
    let changed = store
        .conn()
        .execute(patch.apply_sql, args.as_slice())
        .with_context(|| format!("Failed to apply patch: {}", patch.name))?;

    let after = fetch_all(store.conn(), patch.after_sql)?;
    println!("  after:");
    print_rows(&after, "    ");
    println!();

    Ok(changed)
}

/// Apply the full patch list in order. Returns total rows changed.
pub fn apply_all(store: &Store) -> Result<usize> {
    let mut total = 0;
    for patch in PATCHES {
        total += apply(store, patch)?;
    }
    Ok(total)
}
