//! The two DLC batches. Each is self-contained: its material rows, its
//! weapon rows, and the one Forgeability row its smithing perk needs.
//! Both batches run unconditionally after the base dataset.

use super::data::{ForgeabilityRow, MaterialRow, WeaponRow};

pub struct DlcBatch {
    pub name: &'static str,
    pub materials: &'static [MaterialRow],
    pub weapons: &'static [WeaponRow],
    pub forgeability: ForgeabilityRow,
}

pub static DLC_BATCHES: &[DlcBatch] = &[DAWNGUARD, DRAGONBORN];

const DAWNGUARD: DlcBatch = DlcBatch {
    name: "Dawnguard",
    materials: &[
        MaterialRow::melee("Dragonbone", 19.0, 15, 1500, Some("Dragon Armor")),
        MaterialRow::melee("Dragonbone", 21.0, 16, 1700, Some("Dragon Armor")),
        MaterialRow::melee("Dragonbone", 22.0, 17, 2000, Some("Dragon Armor")),
        MaterialRow::melee("Dragonbone", 6.5, 12, 600, Some("Dragon Armor")),
        MaterialRow::melee("Dragonbone", 27.0, 25, 2725, Some("Dragon Armor")),
        MaterialRow::melee("Dragonbone", 30.0, 26, 3000, Some("Dragon Armor")),
        MaterialRow::melee("Dragonbone", 33.0, 28, 4275, Some("Dragon Armor")),
        MaterialRow::bow("Dragonbone", 20.0, 20, 2725, 0.75, Some("Dragon Armor")),
    ],
    weapons: &[
        WeaponRow::new("02014fce", "Dragonbone Sword", "One-Handed Sword", "Dragonbone"),
        WeaponRow::new("02014fcf", "Dragonbone War Axe", "One-Handed Axe", "Dragonbone"),
        WeaponRow::new("02014fcd", "Dragonbone Mace", "One-Handed Mace", "Dragonbone"),
        WeaponRow::new("02014fcb", "Dragonbone Dagger", "One-Handed Dagger", "Dragonbone"),
        WeaponRow::new("02014fcc", "Dragonbone Greatsword", "Two-Handed Sword", "Dragonbone"),
        WeaponRow::new("02014fca", "Dragonbone Battleaxe", "Two-Handed Axe", "Dragonbone"),
        WeaponRow::new("02014fd0", "Dragonbone Warhammer", "Two-Handed Mace", "Dragonbone"),
        WeaponRow::new("020176f1", "Dragonbone Bow", "Archery", "Dragonbone"),
    ],
    forgeability: ForgeabilityRow {
        level: 100,
        perk: "Dragon Armor",
    },
};

const DRAGONBORN: DlcBatch = DlcBatch {
    name: "Dragonborn",
    materials: &[
        MaterialRow::melee("Nordic", 12.0, 11, 290, Some("Advanced Armors")),
        MaterialRow::melee("Nordic", 14.0, 12, 350, Some("Advanced Armors")),
        MaterialRow::melee("Nordic", 16.0, 13, 410, Some("Advanced Armors")),
        MaterialRow::melee("Nordic", 3.5, 8, 115, Some("Advanced Armors")),
        MaterialRow::melee("Nordic", 19.0, 20, 585, Some("Advanced Armors")),
        MaterialRow::melee("Nordic", 23.0, 21, 650, Some("Advanced Armors")),
        MaterialRow::melee("Nordic", 27.0, 23, 700, Some("Advanced Armors")),
        MaterialRow::bow("Nordic", 11.0, 13, 580, 0.6875, Some("Advanced Armors")),
    ],
    weapons: &[
        WeaponRow::new("0401cdb1", "Nordic Sword", "One-Handed Sword", "Nordic"),
        WeaponRow::new("0401cdb2", "Nordic War Axe", "One-Handed Axe", "Nordic"),
        WeaponRow::new("0401cdb0", "Nordic Mace", "One-Handed Mace", "Nordic"),
        WeaponRow::new("0401cdae", "Nordic Dagger", "One-Handed Dagger", "Nordic"),
        WeaponRow::new("0401cdaf", "Nordic Greatsword", "Two-Handed Sword", "Nordic"),
        WeaponRow::new("0401cdad", "Nordic Battleaxe", "Two-Handed Axe", "Nordic"),
        WeaponRow::new("0401cdb3", "Nordic Warhammer", "Two-Handed Mace", "Nordic"),
        WeaponRow::new("04026232", "Nordic Bow", "Archery", "Nordic"),
    ],
    forgeability: ForgeabilityRow {
        level: 20,
        perk: "Advanced Armors",
    },
};
