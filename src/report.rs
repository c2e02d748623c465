//! The seven fixed reports, printed to stdout with a heading apiece. Every
//! query is a filtered projection over a single table; none of them joins,
//! even where the schema would allow it (the warhammer enchantment listing
//! filters Enchanting by the literal type name, not through Weapon).

use anyhow::{Context, Result};
use rusqlite::types::Value;
use rusqlite::Connection;

use crate::store::Store;

pub struct Report {
    pub title: &'static str,
    /// One or more statements whose rows print under a single heading
    pub queries: &'static [&'static str],
}

pub static REPORTS: &[Report] = &[
    Report {
        title: "List Of All Iron Weapons",
        queries: &["SELECT \"Name\" FROM \"Weapon\" WHERE \"Material\" = 'Iron'"],
    },
    // Filters Material rows, not bows; a material shows up here whether or
    // not any bow weapon uses it.
    Report {
        title: "Materials Of High-Speed Bows",
        queries: &["SELECT \"Name\" FROM \"Material\" WHERE \"Speed\" >= 0.75"],
    },
    Report {
        title: "All Enchanted Weapons",
        queries: &["SELECT * FROM \"EnchantedWith\""],
    },
    Report {
        title: "Smithing Perks Above Level 20",
        queries: &["SELECT \"Perk Name\" FROM \"Forgeability\" WHERE \"Level\" > 20"],
    },
    Report {
        title: "All Dwarven Axes",
        queries: &[
            "SELECT \"Name\" FROM \"Weapon\" \
             WHERE \"Material\" = 'Dwarven' AND \"Type\" = 'One-Handed Axe'",
            "SELECT \"Name\" FROM \"Weapon\" \
             WHERE \"Material\" = 'Dwarven' AND \"Type\" = 'Two-Handed Axe'",
        ],
    },
    Report {
        title: "Enchantments Available To Warhammers",
        queries: &[
            "SELECT \"Name\", \"Effect\" FROM \"Enchanting\" WHERE \"Weapon\" = 'Two-Handed Mace'",
        ],
    },
    Report {
        title: "Hard-Hitting Materials",
        queries: &[
            "SELECT \"Damage\", \"Weight\", \"Name\" FROM \"Material\" WHERE \"Damage\" > 13",
        ],
    },
];

/// Run a read-only statement and collect every row as SQLite values.
pub fn fetch_all(conn: &Connection, sql: &str) -> Result<Vec<Vec<Value>>> {
    let mut stmt = conn
        .prepare(sql)
        .with_context(|| format!("Failed to prepare query: {}", sql))?;
    let ncols = stmt.column_count();

    let rows = stmt
        .query_map([], |row| {
            (0..ncols)
                .map(|i| row.get::<_, Value>(i))
                .collect::<rusqlite::Result<Vec<Value>>>()
        })?
        .collect::<rusqlite::Result<Vec<Vec<Value>>>>()
        .with_context(|| format!("Failed to run query: {}", sql))?;

    Ok(rows)
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) => r.to_string(),
        Value::Text(t) => t.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Print rows as parenthesized tuples, one per line.
pub fn print_rows(rows: &[Vec<Value>], indent: &str) {
    if rows.is_empty() {
        println!("{}(no rows)", indent);
        return;
    }
    for row in rows {
        let fields: Vec<String> = row.iter().map(format_value).collect();
        println!("{}({})", indent, fields.join(", "));
    }
}

/// Run one report: every statement's rows under a single heading.
pub fn run(store: &Store, report: &Report) -> Result<Vec<Vec<Value>>> {
    let mut rows = Vec::new();
    for sql in report.queries {
        rows.extend(fetch_all(store.conn(), sql)?);
    }
    Ok(rows)
}

/// Run all seven reports and print each result set.
pub fn run_all(store: &Store) -> Result<()> {
    println!("QUERY RESULTS DISPLAYED BELOW");
    println!();

    for report in REPORTS {
        let rows = run(store, report)?;
        println!("{}", report.title);
        println!("{}", "=".repeat(report.title.len()));
        print_rows(&rows, "");
        println!();
    }

    Ok(())
}
