use crate::schema::{ColumnType, TableSchema};

/// Quote an identifier. Two column names ("Perk Name", "Enchantment Name")
/// contain spaces, so every identifier goes out double-quoted.
fn quote(ident: &str) -> String {
    format!("\"{}\"", ident)
}

/// Generate idempotent CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", quote(schema.name));
    let mut columns = Vec::new();

    for col in schema.columns {
        let sql_type = match col.col_type {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        };

        let null_constraint = if !col.nullable { " NOT NULL" } else { "" };
        let pk = if col.primary_key { " PRIMARY KEY" } else { "" };

        columns.push(format!(
            "    {} {}{}{}",
            quote(col.name),
            sql_type,
            null_constraint,
            pk
        ));
    }

    for fk in schema.foreign_keys {
        columns.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}({})",
            quote(fk.column),
            quote(fk.references_table),
            quote(fk.references_column)
        ));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate a parameterized INSERT statement covering every column
pub fn generate_insert(schema: &TableSchema) -> String {
    let columns: Vec<String> = schema.columns.iter().map(|c| quote(c.name)).collect();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(schema.name),
        columns.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{FORGEABILITY, MATERIAL, WEAPON};

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&WEAPON);
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"Weapon\""));
        assert!(sql.contains("\"ID\" TEXT NOT NULL PRIMARY KEY"));
        assert!(sql.contains("\"Material\" TEXT NOT NULL"));
        assert!(sql.contains("FOREIGN KEY (\"Type\") REFERENCES \"Type\"(\"Name\")"));
    }

    #[test]
    fn test_quotes_identifiers_with_spaces() {
        let sql = generate_create_table(&FORGEABILITY);
        assert!(sql.contains("\"Perk Name\" TEXT"));

        let insert = generate_insert(&FORGEABILITY);
        assert_eq!(
            insert,
            "INSERT INTO \"Forgeability\" (\"Level\", \"Perk Name\") VALUES (?, ?)"
        );
    }

    #[test]
    fn test_nullable_columns_omit_not_null() {
        let sql = generate_create_table(&MATERIAL);
        assert!(sql.contains("\"Speed\" REAL,"));
        assert!(sql.contains("\"Weight\" REAL NOT NULL"));
    }
}
