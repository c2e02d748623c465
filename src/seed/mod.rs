//! Seed loader: pushes the literal dataset into the store, one generic
//! loop per entity kind. No surrounding transaction; every insert commits
//! on its own, so running the loader against an already-populated store
//! fails at the first repeated Weapon.ID.

pub mod data;
pub mod dlc;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::schema::{ENCHANTED_WITH, ENCHANTING, FORGEABILITY, MATERIAL, TYPE, WEAPON};
use crate::store::{generate_insert, Store};
use data::{EnchantedWithRow, EnchantingRow, ForgeabilityRow, MaterialRow, TypeRow, WeaponRow};
use dlc::DlcBatch;

pub fn insert_type(store: &Store, row: &TypeRow) -> Result<i64> {
    let mut stmt = store.conn().prepare_cached(&generate_insert(&TYPE))?;
    stmt.execute(params![row.name, row.speed, row.stagger, row.reach])
        .with_context(|| format!("Failed to insert type {}", row.name))?;
    Ok(store.conn().last_insert_rowid())
}

pub fn insert_material(store: &Store, row: &MaterialRow) -> Result<i64> {
    let mut stmt = store.conn().prepare_cached(&generate_insert(&MATERIAL))?;
    stmt.execute(params![
        row.name,
        row.weight,
        row.damage,
        row.value,
        row.speed,
        row.forgeability,
    ])
    .with_context(|| format!("Failed to insert material {}", row.name))?;
    Ok(store.conn().last_insert_rowid())
}

pub fn insert_weapon(store: &Store, row: &WeaponRow) -> Result<i64> {
    let mut stmt = store.conn().prepare_cached(&generate_insert(&WEAPON))?;
    stmt.execute(params![row.id, row.name, row.kind, row.material])
        .with_context(|| format!("Failed to insert weapon {} ({})", row.name, row.id))?;
    Ok(store.conn().last_insert_rowid())
}

pub fn insert_forgeability(store: &Store, row: &ForgeabilityRow) -> Result<i64> {
    let mut stmt = store
        .conn()
        .prepare_cached(&generate_insert(&FORGEABILITY))?;
    stmt.execute(params![row.level, row.perk])
        .with_context(|| format!("Failed to insert forgeability perk {}", row.perk))?;
    Ok(store.conn().last_insert_rowid())
}

pub fn insert_enchanting(store: &Store, row: &EnchantingRow) -> Result<i64> {
    let mut stmt = store.conn().prepare_cached(&generate_insert(&ENCHANTING))?;
    stmt.execute(params![row.name, row.effect, row.weapon_type])
        .with_context(|| format!("Failed to insert enchantment {}", row.name))?;
    Ok(store.conn().last_insert_rowid())
}

pub fn insert_enchanted_with(store: &Store, row: &EnchantedWithRow) -> Result<i64> {
    let mut stmt = store
        .conn()
        .prepare_cached(&generate_insert(&ENCHANTED_WITH))?;
    stmt.execute(params![row.weapon_id, row.enchantment])
        .with_context(|| {
            format!(
                "Failed to enchant weapon {} with {}",
                row.weapon_id, row.enchantment
            )
        })?;
    Ok(store.conn().last_insert_rowid())
}

/// Seed the base dataset. Returns the number of rows inserted.
pub fn seed_base(store: &Store) -> Result<u64> {
    let mut count: u64 = 0;

    for row in data::TYPES {
        insert_type(store, row)?;
        count += 1;
    }
    for row in data::MATERIALS {
        insert_material(store, row)?;
        count += 1;
    }
    for row in data::WEAPONS {
        insert_weapon(store, row)?;
        count += 1;
    }
    for row in data::FORGEABILITY_ROWS {
        insert_forgeability(store, row)?;
        count += 1;
    }
    for row in data::ENCHANTMENTS {
        insert_enchanting(store, row)?;
        count += 1;
    }
    for row in data::ENCHANTED_WEAPONS {
        insert_enchanted_with(store, row)?;
        count += 1;
    }

    Ok(count)
}

/// Seed one DLC batch: its materials, weapons, and forgeability row.
pub fn seed_dlc(store: &Store, batch: &DlcBatch) -> Result<u64> {
    let mut count: u64 = 0;

    for row in batch.materials {
        insert_material(store, row)?;
        count += 1;
    }
    for row in batch.weapons {
        insert_weapon(store, row)?;
        count += 1;
    }
    insert_forgeability(store, &batch.forgeability)?;
    count += 1;

    Ok(count)
}

/// Seed everything: the base dataset followed by both DLC batches.
pub fn load_all(store: &Store) -> Result<u64> {
    let mut total = seed_base(store)?;
    println!("Seeded base dataset ({} records)", total);

    for batch in dlc::DLC_BATCHES {
        let count = seed_dlc(store, batch)?;
        println!("Seeded {} batch ({} records)", batch.name, count);
        total += count;
    }

    Ok(total)
}
