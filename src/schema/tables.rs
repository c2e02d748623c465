//! Table schema definitions for the Skyrim weapons database.
//!
//! Weapon is the main table; Type and Material carry the per-category and
//! per-material stats, Forgeability maps a smithing perk to the level that
//! unlocks it, and Enchanting/EnchantedWith describe the enchantment
//! catalog and which weapons carry one. Type.Name and Material.Name are
//! deliberately not UNIQUE: Material has one row per material-and-type
//! combination, keyed by name only.

use super::types::*;

pub static WEAPON: TableSchema = TableSchema {
    name: "Weapon",
    columns: &[
        Column::primary_key("ID", ColumnType::Text),
        Column::required("Name", ColumnType::Text),
        Column::required("Type", ColumnType::Text),
        Column::required("Material", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::new("Type", "Type", "Name"),
        ForeignKey::new("Material", "Material", "Name"),
    ],
};

/// Melee types populate Speed and Reach; archery leaves both NULL.
pub static TYPE: TableSchema = TableSchema {
    name: "Type",
    columns: &[
        Column::required("Name", ColumnType::Text),
        Column::new("Speed", ColumnType::Real),
        Column::required("Stagger", ColumnType::Real),
        Column::new("Reach", ColumnType::Real),
    ],
    foreign_keys: &[],
};

/// Material.Speed is the archery draw-speed modifier, distinct from
/// Type.Speed (melee swing speed). Only bow materials populate it.
pub static MATERIAL: TableSchema = TableSchema {
    name: "Material",
    columns: &[
        Column::required("Name", ColumnType::Text),
        Column::required("Weight", ColumnType::Real),
        Column::required("Damage", ColumnType::Integer),
        Column::required("Value", ColumnType::Integer),
        Column::new("Speed", ColumnType::Real),
        Column::new("Forgeability", ColumnType::Text),
    ],
    foreign_keys: &[ForeignKey::new("Forgeability", "Forgeability", "Perk Name")],
};

pub static FORGEABILITY: TableSchema = TableSchema {
    name: "Forgeability",
    columns: &[
        Column::new("Level", ColumnType::Integer),
        Column::new("Perk Name", ColumnType::Text),
    ],
    foreign_keys: &[],
};

/// One row per (enchantment, applicable weapon type) pair. The "Weapon"
/// column holds the Type name the enchantment is restricted to.
pub static ENCHANTING: TableSchema = TableSchema {
    name: "Enchanting",
    columns: &[
        Column::new("Name", ColumnType::Text),
        Column::new("Effect", ColumnType::Text),
        Column::new("Weapon", ColumnType::Text),
    ],
    foreign_keys: &[],
};

pub static ENCHANTED_WITH: TableSchema = TableSchema {
    name: "EnchantedWith",
    columns: &[
        Column::new("ID", ColumnType::Text),
        Column::new("Enchantment Name", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::new("ID", "Weapon", "ID"),
        ForeignKey::new("Enchantment Name", "Enchanting", "Name"),
    ],
};

/// All tables in creation order (FK parents before children, though the
/// references are never enforced).
pub static ALL_TABLES: &[&TableSchema] = &[
    &TYPE,
    &FORGEABILITY,
    &MATERIAL,
    &WEAPON,
    &ENCHANTING,
    &ENCHANTED_WITH,
];
