//! Prototype catalogs consumed by the placement engine and its instancers.

use serde::{Deserialize, Serialize};

pub mod keys {
    pub const FLOOR_FLAGSTONE: &str = "floor_flagstone";
    pub const WALL_GRANITE: &str = "wall_granite";
    pub const DOOR_TIMBER: &str = "door_timber";

    pub const ENEMY_GIANT_RAT: &str = "enemy_giant_rat";
    pub const ENEMY_SKELETON: &str = "enemy_skeleton";
    pub const ENEMY_CULTIST: &str = "enemy_cultist";
    pub const ENEMY_REVENANT: &str = "enemy_revenant";
    pub const ENEMY_OGRE: &str = "enemy_ogre";

    pub const LOOT_COIN_PURSE: &str = "loot_coin_purse";
    pub const LOOT_HEALING_DRAUGHT: &str = "loot_healing_draught";
    pub const LOOT_THROWING_KNIVES: &str = "loot_throwing_knives";
    pub const LOOT_TORCH_BUNDLE: &str = "loot_torch_bundle";
}

/// One enemy prototype the weighted sampler can pick from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyEntry {
    pub prototype: String,
    /// Where on the 0..=1 scale this prototype belongs.
    pub difficulty: f64,
    pub base_weight: f64,
}

impl EnemyEntry {
    pub fn new(prototype: &str, difficulty: f64, base_weight: f64) -> Self {
        Self { prototype: prototype.to_string(), difficulty, base_weight }
    }
}

/// Everything the generator can ask a renderer to instantiate. Floor and wall
/// prototypes are required; empty enemy/loot catalogs switch those placement
/// stages off, and an empty door prototype switches doors off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentCatalogs {
    pub floor_prototype: String,
    pub wall_prototype: String,
    pub door_prototype: String,
    pub loot: Vec<String>,
    pub enemies: Vec<EnemyEntry>,
}

impl ContentCatalogs {
    pub fn build_default() -> Self {
        Self {
            floor_prototype: keys::FLOOR_FLAGSTONE.to_string(),
            wall_prototype: keys::WALL_GRANITE.to_string(),
            door_prototype: keys::DOOR_TIMBER.to_string(),
            loot: vec![
                keys::LOOT_COIN_PURSE.to_string(),
                keys::LOOT_HEALING_DRAUGHT.to_string(),
                keys::LOOT_THROWING_KNIVES.to_string(),
                keys::LOOT_TORCH_BUNDLE.to_string(),
            ],
            enemies: vec![
                EnemyEntry::new(keys::ENEMY_GIANT_RAT, 0.0, 1.0),
                EnemyEntry::new(keys::ENEMY_SKELETON, 0.35, 1.0),
                EnemyEntry::new(keys::ENEMY_CULTIST, 0.6, 0.8),
                EnemyEntry::new(keys::ENEMY_REVENANT, 0.85, 0.6),
                EnemyEntry::new(keys::ENEMY_OGRE, 1.0, 0.4),
            ],
        }
    }
}

impl Default for ContentCatalogs {
    fn default() -> Self {
        Self::build_default()
    }
}
