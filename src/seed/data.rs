//! The base dataset: every hardcoded row seeded into the store before the
//! DLC batches run. Material stats have no recognizable pattern across
//! types, so each material carries one row per weapon type it appears as.
//!
//! Two rows here are known-bad on purpose and exist so the patch list has
//! something to correct: "Iron Bow" and "Steel Bow" are not real weapons
//! and are deleted again after seeding. The Ebony one-handed damage values
//! (15 and 16) are likewise off by one until patched.

/// Weapon category row. Melee types populate speed and reach; the bow
/// type populates neither.
pub struct TypeRow {
    pub name: &'static str,
    pub speed: Option<f64>,
    pub stagger: f64,
    pub reach: Option<f64>,
}

impl TypeRow {
    pub const fn melee(name: &'static str, speed: f64, stagger: f64, reach: f64) -> Self {
        Self {
            name,
            speed: Some(speed),
            stagger,
            reach: Some(reach),
        }
    }

    pub const fn archery(name: &'static str, stagger: f64) -> Self {
        Self {
            name,
            speed: None,
            stagger,
            reach: None,
        }
    }
}

/// One material-and-type combination: the stats a weapon of this material
/// gets for one weapon type. `speed` is the archery draw-speed modifier,
/// only present on bow rows.
pub struct MaterialRow {
    pub name: &'static str,
    pub weight: f64,
    pub damage: i64,
    pub value: i64,
    pub speed: Option<f64>,
    pub forgeability: Option<&'static str>,
}

impl MaterialRow {
    pub const fn melee(
        name: &'static str,
        weight: f64,
        damage: i64,
        value: i64,
        forgeability: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            weight,
            damage,
            value,
            speed: None,
            forgeability,
        }
    }

    pub const fn bow(
        name: &'static str,
        weight: f64,
        damage: i64,
        value: i64,
        speed: f64,
        forgeability: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            weight,
            damage,
            value,
            speed: Some(speed),
            forgeability,
        }
    }
}

pub struct WeaponRow {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub material: &'static str,
}

impl WeaponRow {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        kind: &'static str,
        material: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            material,
        }
    }
}

pub struct ForgeabilityRow {
    pub level: i64,
    pub perk: &'static str,
}

pub struct EnchantingRow {
    pub name: &'static str,
    pub effect: &'static str,
    /// The Type name this enchantment is restricted to
    pub weapon_type: &'static str,
}

pub struct EnchantedWithRow {
    pub weapon_id: &'static str,
    pub enchantment: &'static str,
}

// =============================================================================
// Types
// =============================================================================

// NOTE: the archery type row is named "Bow" while every bow weapon below
// references the type name "Archery". The mismatch is in the source data
// and survives because the references are never enforced.
pub static TYPES: &[TypeRow] = &[
    TypeRow::melee("One-Handed Sword", 1.0, 0.75, 1.0),
    TypeRow::melee("One-Handed Axe", 0.9, 0.85, 1.0),
    TypeRow::melee("One-Handed Mace", 0.8, 1.0, 1.0),
    TypeRow::melee("One-Handed Dagger", 1.3, 0.0, 0.7),
    TypeRow::melee("Two-Handed Sword", 0.7, 1.1, 1.3),
    TypeRow::melee("Two-Handed Axe", 0.7, 1.15, 1.3),
    TypeRow::melee("Two-Handed Mace", 0.6, 1.25, 1.3),
    TypeRow::archery("Bow", 0.0),
];

// =============================================================================
// Materials (one row per material-and-type combination)
// =============================================================================

pub static MATERIALS: &[MaterialRow] = &[
    // Iron
    MaterialRow::melee("Iron", 9.0, 7, 25, None),
    MaterialRow::melee("Iron", 11.0, 8, 30, None),
    MaterialRow::melee("Iron", 13.0, 9, 35, None),
    MaterialRow::melee("Iron", 2.0, 4, 10, None),
    MaterialRow::melee("Iron", 16.0, 15, 50, None),
    MaterialRow::melee("Iron", 20.0, 16, 55, None),
    MaterialRow::melee("Iron", 24.0, 18, 60, None),
    // Steel
    MaterialRow::melee("Steel", 10.0, 8, 45, Some("Steel Smithing")),
    MaterialRow::melee("Steel", 12.0, 9, 55, Some("Steel Smithing")),
    MaterialRow::melee("Steel", 14.0, 10, 65, Some("Steel Smithing")),
    MaterialRow::melee("Steel", 2.0, 4, 10, Some("Steel Smithing")),
    MaterialRow::melee("Steel", 17.0, 17, 90, Some("Steel Smithing")),
    MaterialRow::melee("Steel", 21.0, 18, 100, Some("Steel Smithing")),
    MaterialRow::melee("Steel", 25.0, 20, 110, Some("Steel Smithing")),
    // Orcish
    MaterialRow::melee("Orcish", 11.0, 9, 75, Some("Orcish Smithing")),
    MaterialRow::melee("Orcish", 13.0, 10, 90, Some("Orcish Smithing")),
    MaterialRow::melee("Orcish", 15.0, 11, 105, Some("Orcish Smithing")),
    MaterialRow::melee("Orcish", 3.0, 6, 30, Some("Orcish Smithing")),
    MaterialRow::melee("Orcish", 18.0, 18, 75, Some("Orcish Smithing")),
    MaterialRow::melee("Orcish", 25.0, 19, 165, Some("Orcish Smithing")),
    MaterialRow::melee("Orcish", 26.0, 21, 180, Some("Orcish Smithing")),
    MaterialRow::bow("Orcish", 9.0, 10, 150, 0.8125, Some("Orcish Smithing")),
    // Dwarven
    MaterialRow::melee("Dwarven", 12.0, 10, 150, Some("Dwarven Smithing")),
    MaterialRow::melee("Dwarven", 14.0, 11, 165, Some("Dwarven Smithing")),
    MaterialRow::melee("Dwarven", 16.0, 12, 190, Some("Dwarven Smithing")),
    MaterialRow::melee("Dwarven", 3.5, 7, 55, Some("Dwarven Smithing")),
    MaterialRow::melee("Dwarven", 19.0, 19, 270, Some("Dwarven Smithing")),
    MaterialRow::melee("Dwarven", 23.0, 20, 300, Some("Dwarven Smithing")),
    MaterialRow::melee("Dwarven", 27.0, 22, 325, Some("Dwarven Smithing")),
    MaterialRow::bow("Dwarven", 10.0, 12, 270, 0.75, Some("Dwarven Smithing")),
    // Elven
    MaterialRow::melee("Elven", 13.0, 11, 235, Some("Elven Smithing")),
    MaterialRow::melee("Elven", 15.0, 12, 280, Some("Elven Smithing")),
    MaterialRow::melee("Elven", 17.0, 13, 330, Some("Elven Smithing")),
    MaterialRow::melee("Elven", 4.0, 8, 95, Some("Elven Smithing")),
    MaterialRow::melee("Elven", 20.0, 20, 470, Some("Elven Smithing")),
    MaterialRow::melee("Elven", 24.0, 21, 520, Some("Elven Smithing")),
    MaterialRow::melee("Elven", 28.0, 23, 565, Some("Elven Smithing")),
    MaterialRow::bow("Elven", 12.0, 13, 470, 0.6875, Some("Elven Smithing")),
    // Glass
    MaterialRow::melee("Glass", 14.0, 12, 410, Some("Glass Smithing")),
    MaterialRow::melee("Glass", 16.0, 13, 490, Some("Glass Smithing")),
    MaterialRow::melee("Glass", 18.0, 14, 575, Some("Glass Smithing")),
    MaterialRow::melee("Glass", 4.5, 9, 165, Some("Glass Smithing")),
    MaterialRow::melee("Glass", 22.0, 21, 820, Some("Glass Smithing")),
    MaterialRow::melee("Glass", 25.0, 22, 900, Some("Glass Smithing")),
    MaterialRow::melee("Glass", 29.0, 24, 985, Some("Glass Smithing")),
    MaterialRow::bow("Glass", 14.0, 15, 820, 0.625, Some("Glass Smithing")),
    // Ebony (the 15 and 16 one-handed damage values are corrected later)
    MaterialRow::melee("Ebony", 15.0, 13, 720, Some("Ebony Smithing")),
    MaterialRow::melee("Ebony", 17.0, 15, 865, Some("Ebony Smithing")),
    MaterialRow::melee("Ebony", 19.0, 16, 1000, Some("Ebony Smithing")),
    MaterialRow::melee("Ebony", 5.0, 10, 290, Some("Ebony Smithing")),
    MaterialRow::melee("Ebony", 22.0, 22, 1440, Some("Ebony Smithing")),
    MaterialRow::melee("Ebony", 26.0, 23, 1585, Some("Ebony Smithing")),
    MaterialRow::melee("Ebony", 30.0, 25, 1725, Some("Ebony Smithing")),
    MaterialRow::bow("Ebony", 16.0, 17, 1800, 0.5625, Some("Ebony Smithing")),
    // Daedric
    MaterialRow::melee("Daedric", 16.0, 14, 1250, Some("Daedric Smithing")),
    MaterialRow::melee("Daedric", 18.0, 15, 1500, Some("Daedric Smithing")),
    MaterialRow::melee("Daedric", 20.0, 16, 1750, Some("Daedric Smithing")),
    MaterialRow::melee("Daedric", 6.0, 11, 500, Some("Daedric Smithing")),
    MaterialRow::melee("Daedric", 23.0, 24, 2500, Some("Daedric Smithing")),
    MaterialRow::melee("Daedric", 27.0, 25, 2750, Some("Daedric Smithing")),
    MaterialRow::melee("Daedric", 31.0, 27, 4000, Some("Daedric Smithing")),
    MaterialRow::bow("Daedric", 18.0, 19, 2500, 0.5, Some("Daedric Smithing")),
    // Archery-only materials
    MaterialRow::bow("Long", 5.0, 6, 30, 1.0, None),
    MaterialRow::bow("Hunting", 7.0, 7, 50, 0.9375, None),
];

// =============================================================================
// Weapons
// =============================================================================

pub static WEAPONS: &[WeaponRow] = &[
    // Iron melee
    WeaponRow::new("00012eb7", "Iron Sword", "One-Handed Sword", "Iron"),
    WeaponRow::new("00013790", "Iron War Axe", "One-Handed Axe", "Iron"),
    WeaponRow::new("00013982", "Iron Mace", "One-Handed Mace", "Iron"),
    WeaponRow::new("0001397e", "Iron Dagger", "One-Handed Dagger", "Iron"),
    WeaponRow::new("0001359d", "Iron Greatsword", "Two-Handed Sword", "Iron"),
    WeaponRow::new("00013980", "Iron Battleaxe", "Two-Handed Axe", "Iron"),
    WeaponRow::new("00013981", "Iron Warhammer", "Two-Handed Mace", "Iron"),
    // Steel melee
    WeaponRow::new("00013989", "Steel Sword", "One-Handed Sword", "Steel"),
    WeaponRow::new("00013983", "Steel War Axe", "One-Handed Axe", "Steel"),
    WeaponRow::new("00013988", "Steel Mace", "One-Handed Mace", "Steel"),
    WeaponRow::new("00013986", "Steel Dagger", "One-Handed Dagger", "Steel"),
    WeaponRow::new("00013987", "Steel Greatsword", "Two-Handed Sword", "Steel"),
    WeaponRow::new("00013984", "Steel Battleaxe", "Two-Handed Axe", "Steel"),
    WeaponRow::new("0001398a", "Steel Warhammer", "Two-Handed Mace", "Steel"),
    // Orcish melee
    WeaponRow::new("00013991", "Orcish Sword", "One-Handed Sword", "Orcish"),
    WeaponRow::new("0001398b", "Orcish War Axe", "One-Handed Axe", "Orcish"),
    WeaponRow::new("00013990", "Orcish Mace", "One-Handed Mace", "Orcish"),
    WeaponRow::new("0001398e", "Orcish Dagger", "One-Handed Dagger", "Orcish"),
    WeaponRow::new("0001398f", "Orcish Greatsword", "Two-Handed Sword", "Orcish"),
    WeaponRow::new("0001398c", "Orcish Battleaxe", "Two-Handed Axe", "Orcish"),
    WeaponRow::new("00013992", "Orcish Warhammer", "Two-Handed Mace", "Orcish"),
    // Dwarven melee
    WeaponRow::new("00013999", "Dwarven Sword", "One-Handed Sword", "Dwarven"),
    WeaponRow::new("00013993", "Dwarven War Axe", "One-Handed Axe", "Dwarven"),
    WeaponRow::new("00013998", "Dwarven Mace", "One-Handed Mace", "Dwarven"),
    WeaponRow::new("00013996", "Dwarven Dagger", "One-Handed Dagger", "Dwarven"),
    WeaponRow::new("00013997", "Dwarven Greatsword", "Two-Handed Sword", "Dwarven"),
    WeaponRow::new("00013994", "Dwarven Battleaxe", "Two-Handed Axe", "Dwarven"),
    WeaponRow::new("0001399a", "Dwarven Warhammer", "Two-Handed Mace", "Dwarven"),
    // Elven melee
    WeaponRow::new("000139a1", "Elven Sword", "One-Handed Sword", "Elven"),
    WeaponRow::new("0001399b", "Elven War Axe", "One-Handed Axe", "Elven"),
    WeaponRow::new("000139a0", "Elven Mace", "One-Handed Mace", "Elven"),
    WeaponRow::new("0001399e", "Elven Dagger", "One-Handed Dagger", "Elven"),
    WeaponRow::new("0001399f", "Elven Greatsword", "Two-Handed Sword", "Elven"),
    WeaponRow::new("0001399c", "Elven Battleaxe", "Two-Handed Axe", "Elven"),
    WeaponRow::new("000139a2", "Elven Warhammer", "Two-Handed Mace", "Elven"),
    // Glass melee
    WeaponRow::new("000139a9", "Glass Sword", "One-Handed Sword", "Glass"),
    WeaponRow::new("000139a3", "Glass War Axe", "One-Handed Axe", "Glass"),
    WeaponRow::new("000139a8", "Glass Mace", "One-Handed Mace", "Glass"),
    WeaponRow::new("000139a6", "Glass Dagger", "One-Handed Dagger", "Glass"),
    WeaponRow::new("000139a7", "Glass Greatsword", "Two-Handed Sword", "Glass"),
    WeaponRow::new("000139a4", "Glass Battleaxe", "Two-Handed Axe", "Glass"),
    WeaponRow::new("000139aa", "Glass Warhammer", "Two-Handed Mace", "Glass"),
    // Ebony melee
    WeaponRow::new("000139b1", "Ebony Sword", "One-Handed Sword", "Ebony"),
    WeaponRow::new("000139ab", "Ebony War Axe", "One-Handed Axe", "Ebony"),
    WeaponRow::new("000139b0", "Ebony Mace", "One-Handed Mace", "Ebony"),
    WeaponRow::new("000139ae", "Ebony Dagger", "One-Handed Dagger", "Ebony"),
    WeaponRow::new("000139af", "Ebony Greatsword", "Two-Handed Sword", "Ebony"),
    WeaponRow::new("000139ac", "Ebony Battleaxe", "Two-Handed Axe", "Ebony"),
    WeaponRow::new("000139b2", "Ebony Warhammer", "Two-Handed Mace", "Ebony"),
    // Daedric melee (the mace's type is wrong in the source data and is
    // kept that way)
    WeaponRow::new("000139b9", "Daedric Sword", "One-Handed Sword", "Daedric"),
    WeaponRow::new("000139b3", "Daedric War Axe", "One-Handed Axe", "Daedric"),
    WeaponRow::new("000139b8", "Daedric Mace", "One-Handed Axe", "Daedric"),
    WeaponRow::new("000139b6", "Daedric Dagger", "One-Handed Dagger", "Daedric"),
    WeaponRow::new("000139b7", "Daedric Greatsword", "Two-Handed Sword", "Daedric"),
    WeaponRow::new("000139b4", "Daedric Battleaxe", "Two-Handed Axe", "Daedric"),
    WeaponRow::new("000139ba", "Daedric Warhammer", "Two-Handed Mace", "Daedric"),
    // Bows
    WeaponRow::new("0003b562", "Long Bow", "Archery", "Long"),
    WeaponRow::new("00013985", "Hunting Bow", "Archery", "Hunting"),
    WeaponRow::new("0001398d", "Orcish Bow", "Archery", "Orcish"),
    WeaponRow::new("00013995", "Dwarven Bow", "Archery", "Dwarven"),
    WeaponRow::new("0001399d", "Elven Bow", "Archery", "Elven"),
    WeaponRow::new("000139a5", "Glass Bow", "Archery", "Glass"),
    WeaponRow::new("000139ad", "Ebony Bow", "Archery", "Ebony"),
    WeaponRow::new("000139b5", "Daedric Bow", "Archery", "Daedric"),
    // Erroneous rows: iron and steel bows do not exist. Deleted again by
    // the patch list.
    WeaponRow::new("0003b563", "Iron Bow", "Archery", "Iron"),
    WeaponRow::new("0003b564", "Steel Bow", "Archery", "Steel"),
];

// =============================================================================
// Forgeability
// =============================================================================

pub static FORGEABILITY_ROWS: &[ForgeabilityRow] = &[
    ForgeabilityRow { level: 2, perk: "Steel Smithing" },
    ForgeabilityRow { level: 6, perk: "Orcish Smithing" },
    ForgeabilityRow { level: 12, perk: "Dwarven Smithing" },
    ForgeabilityRow { level: 19, perk: "Elven Smithing" },
    ForgeabilityRow { level: 27, perk: "Glass Smithing" },
    ForgeabilityRow { level: 36, perk: "Ebony Smithing" },
    ForgeabilityRow { level: 46, perk: "Daedric Smithing" },
];

// =============================================================================
// Enchantments
// =============================================================================

pub static ENCHANTMENTS: &[EnchantingRow] = &[
    EnchantingRow {
        name: "Fire Damage",
        effect: "Burns the target for 10 points",
        weapon_type: "One-Handed Sword",
    },
    EnchantingRow {
        name: "Fire Damage",
        effect: "Burns the target for 10 points",
        weapon_type: "Two-Handed Sword",
    },
    EnchantingRow {
        name: "Fire Damage",
        effect: "Burns the target for 10 points",
        weapon_type: "Archery",
    },
    EnchantingRow {
        name: "Frost Damage",
        effect: "Target takes 10 points of frost damage to Health and Stamina",
        weapon_type: "One-Handed Axe",
    },
    EnchantingRow {
        name: "Frost Damage",
        effect: "Target takes 10 points of frost damage to Health and Stamina",
        weapon_type: "Two-Handed Axe",
    },
    EnchantingRow {
        name: "Shock Damage",
        effect: "Target takes 10 points of shock damage to Health and Magicka",
        weapon_type: "One-Handed Mace",
    },
    EnchantingRow {
        name: "Shock Damage",
        effect: "Target takes 10 points of shock damage to Health and Magicka",
        weapon_type: "Two-Handed Mace",
    },
    EnchantingRow {
        name: "Absorb Health",
        effect: "Absorb 10 points of Health",
        weapon_type: "One-Handed Dagger",
    },
    EnchantingRow {
        name: "Absorb Health",
        effect: "Absorb 10 points of Health",
        weapon_type: "Two-Handed Mace",
    },
    EnchantingRow {
        name: "Soul Trap",
        effect: "If target dies within 5 seconds, fills a soul gem",
        weapon_type: "Archery",
    },
    EnchantingRow {
        name: "Soul Trap",
        effect: "If target dies within 5 seconds, fills a soul gem",
        weapon_type: "Two-Handed Mace",
    },
    EnchantingRow {
        name: "Fear",
        effect: "Creatures and people up to level 9 flee from combat for 30 seconds",
        weapon_type: "One-Handed Sword",
    },
    EnchantingRow {
        name: "Paralyze",
        effect: "Target is paralyzed for 2 seconds",
        weapon_type: "Two-Handed Sword",
    },
    EnchantingRow {
        name: "Turn Undead",
        effect: "Undead up to level 13 flee for 30 seconds",
        weapon_type: "One-Handed Mace",
    },
];

pub static ENCHANTED_WEAPONS: &[EnchantedWithRow] = &[
    // Ebony Warhammer
    EnchantedWithRow {
        weapon_id: "000139b2",
        enchantment: "Shock Damage",
    },
    // Ebony Bow
    EnchantedWithRow {
        weapon_id: "000139ad",
        enchantment: "Soul Trap",
    },
];
