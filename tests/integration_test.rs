//! End-to-end tests over the full initialize -> seed -> patch -> report
//! pipeline, each against its own private in-memory store.

use std::collections::HashSet;

use skyrim_weapons_db::patch;
use skyrim_weapons_db::report::{self, REPORTS};
use skyrim_weapons_db::seed::{self, data, dlc};
use skyrim_weapons_db::store::{is_duplicate_key, Store};

// =============================================================================
// Fixtures
// =============================================================================

fn seeded_store() -> Store {
    let store = Store::open_in_memory().expect("Failed to open in-memory store");
    store.create_tables().expect("Failed to create tables");
    seed::load_all(&store).expect("Failed to seed");
    store
}

fn patched_store() -> Store {
    let store = seeded_store();
    patch::apply_all(&store).expect("Failed to apply patches");
    store
}

fn names(store: &Store, sql: &str) -> Vec<String> {
    let mut stmt = store.conn().prepare(sql).unwrap();
    stmt.query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<rusqlite::Result<Vec<String>>>()
        .unwrap()
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn weapon_ids_are_unique_across_base_and_dlc() {
    let mut ids: Vec<&str> = data::WEAPONS.iter().map(|w| w.id).collect();
    for batch in dlc::DLC_BATCHES {
        ids.extend(batch.weapons.iter().map(|w| w.id));
    }

    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len(), "duplicate weapon ID in seed data");
}

#[test]
fn seeding_populates_every_table() {
    let store = seeded_store();

    let count = |table: &str| -> i64 {
        store
            .conn()
            .query_row(&format!("SELECT COUNT(*) FROM \"{}\"", table), [], |row| {
                row.get(0)
            })
            .unwrap()
    };

    assert_eq!(count("Type"), 8);
    // 64 base material rows plus 8 per DLC batch
    assert_eq!(count("Material"), 80);
    // 66 base weapons (including the two erroneous bows) plus 8 per batch
    assert_eq!(count("Weapon"), 82);
    // 7 base perks plus one per batch
    assert_eq!(count("Forgeability"), 9);
    assert_eq!(count("Enchanting"), 14);
    assert_eq!(count("EnchantedWith"), 2);
}

#[test]
fn reseeding_a_populated_store_fails_on_duplicate_weapon_id() {
    let store = seeded_store();

    let err = seed::load_all(&store).expect_err("re-seeding must fail");
    assert!(
        is_duplicate_key(&err),
        "expected a duplicate-key fault, got: {:#}",
        err
    );
}

#[test]
fn schema_creation_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("weapons.db");

    {
        let store = Store::open(&db_path).unwrap();
        store.create_tables().unwrap();
        seed::load_all(&store).unwrap();
    }

    // Reopen and re-run the DDL against the populated file.
    let store = Store::open(&db_path).unwrap();
    store.create_tables().unwrap();

    let tables: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 6);
}

// =============================================================================
// Patching
// =============================================================================

#[test]
fn patches_each_touch_exactly_one_row() {
    let store = seeded_store();
    let changed = patch::apply_all(&store).unwrap();
    // 1 type speed + 2 ebony damage rows + 2 deleted bows
    assert_eq!(changed, 5);
}

#[test]
fn two_handed_sword_speed_is_corrected() {
    let store = patched_store();
    let speed: f64 = store
        .conn()
        .query_row(
            "SELECT \"Speed\" FROM \"Type\" WHERE \"Name\" = 'Two-Handed Sword'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(speed, 0.75);
}

#[test]
fn ebony_damage_values_are_remapped_once_each() {
    let store = patched_store();

    let mut stmt = store
        .conn()
        .prepare("SELECT \"Damage\" FROM \"Material\" WHERE \"Name\" = 'Ebony'")
        .unwrap();
    let damages: Vec<i64> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert!(!damages.contains(&16), "no Ebony row may keep Damage 16");
    // One-handed sword/axe/mace land on 13/14/15; each value held once.
    for expected in [13, 14, 15] {
        assert_eq!(
            damages.iter().filter(|&&d| d == expected).count(),
            1,
            "exactly one Ebony row with Damage {}",
            expected
        );
    }
}

#[test]
fn erroneous_bows_are_deleted() {
    let store = patched_store();
    let count: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM \"Weapon\" WHERE \"Name\" IN ('Iron Bow', 'Steel Bow')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn patching_is_order_independent_for_distinct_predicates() {
    // The 16-to-15 correction's predicate is untouched by 15-to-14, so the
    // two updates land on distinct rows even run back to back.
    let store = seeded_store();

    let changed_15 = patch::apply(&store, &patch::PATCHES[1]).unwrap();
    let changed_16 = patch::apply(&store, &patch::PATCHES[2]).unwrap();
    assert_eq!(changed_15, 1);
    assert_eq!(changed_16, 1);
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn iron_weapons_report_lists_the_seven_survivors() {
    let store = patched_store();
    let rows = report::run(&store, &REPORTS[0]).unwrap();

    let got: HashSet<String> = rows
        .iter()
        .map(|row| match &row[0] {
            rusqlite::types::Value::Text(name) => name.clone(),
            other => panic!("expected text, got {:?}", other),
        })
        .collect();

    let expected: HashSet<String> = [
        "Iron Sword",
        "Iron War Axe",
        "Iron Mace",
        "Iron Dagger",
        "Iron Greatsword",
        "Iron Battleaxe",
        "Iron Warhammer",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(got, expected);
    assert_eq!(rows.len(), 7);
}

#[test]
fn high_speed_material_report_filters_materials_not_weapons() {
    let store = patched_store();
    let got: HashSet<String> = names(
        &store,
        "SELECT \"Name\" FROM \"Material\" WHERE \"Speed\" >= 0.75",
    )
    .into_iter()
    .collect();

    // "Long" and "Hunting" appear even though the matching bow weapons are
    // unremarkable; the filter is over Material rows only.
    let expected: HashSet<String> = ["Orcish", "Dwarven", "Long", "Hunting", "Dragonbone"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn forgeability_report_uses_strict_greater_than() {
    let store = patched_store();
    let rows = report::run(&store, &REPORTS[3]).unwrap();

    let got: HashSet<String> = rows
        .iter()
        .map(|row| match &row[0] {
            rusqlite::types::Value::Text(perk) => perk.clone(),
            other => panic!("expected text, got {:?}", other),
        })
        .collect();

    // Elven Smithing sits at level 19 and Advanced Armors at 20; both fall
    // outside the strict bound.
    let expected: HashSet<String> = [
        "Glass Smithing",
        "Ebony Smithing",
        "Daedric Smithing",
        "Dragon Armor",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(got, expected);
}

#[test]
fn dwarven_axe_report_combines_both_handedness_queries() {
    let store = patched_store();
    let rows = report::run(&store, &REPORTS[4]).unwrap();

    let got: Vec<String> = rows
        .iter()
        .map(|row| match &row[0] {
            rusqlite::types::Value::Text(name) => name.clone(),
            other => panic!("expected text, got {:?}", other),
        })
        .collect();
    assert_eq!(got, vec!["Dwarven War Axe", "Dwarven Battleaxe"]);
}

#[test]
fn warhammer_enchantment_report_filters_by_type_name() {
    let store = patched_store();
    let rows = report::run(&store, &REPORTS[5]).unwrap();

    let got: HashSet<String> = rows
        .iter()
        .map(|row| match &row[0] {
            rusqlite::types::Value::Text(name) => name.clone(),
            other => panic!("expected text, got {:?}", other),
        })
        .collect();

    let expected: HashSet<String> = ["Shock Damage", "Absorb Health", "Soul Trap"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn enchanted_with_report_scans_the_full_table() {
    let store = patched_store();
    let rows = report::run(&store, &REPORTS[2]).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn hard_hitting_material_report_projects_three_columns() {
    let store = patched_store();
    let rows = report::run(&store, &REPORTS[6]).unwrap();

    assert!(!rows.is_empty());
    for row in &rows {
        assert_eq!(row.len(), 3);
        match &row[0] {
            rusqlite::types::Value::Integer(damage) => assert!(*damage > 13),
            other => panic!("expected integer damage, got {:?}", other),
        }
    }
}

#[test]
fn all_reports_run_against_a_patched_store() {
    let store = patched_store();
    for rep in REPORTS {
        report::run(&store, rep)
            .unwrap_or_else(|e| panic!("report '{}' failed: {:#}", rep.title, e));
    }
}
