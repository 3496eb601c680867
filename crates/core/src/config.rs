//! Generation parameters and their normalization rules.

use serde::{Deserialize, Serialize};

use crate::content::ContentCatalogs;
use crate::curve::{CurvePoint, DifficultyCurve};

/// Everything one `generate()` call needs. Identical configs with identical
/// seeds reproduce bit-identical output, so the whole struct is part of the
/// determinism contract (including catalog entry order).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u64,
    pub partition: PartitionParams,
    pub corridors: CorridorParams,
    pub placement: PlacementParams,
    pub difficulty_curve: DifficultyCurve,
    pub catalog: ContentCatalogs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionParams {
    pub max_depth: u32,
    pub min_room_width: i32,
    pub min_room_height: i32,
    /// Empty cells kept between a room and its leaf boundary.
    pub padding: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorParams {
    /// Extra edges carved on top of the spanning tree to introduce cycles.
    pub extra_loops: u32,
    /// Thicken corridors by also flooring each carved cell's +x/+y neighbor.
    pub wide: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Maximum blocked 8-neighbors an eligible spawn cell may have.
    pub wall_clearance: i32,
    pub enemy_prob_near_start: f64,
    pub enemy_prob_far: f64,
    pub enemy_min_spacing: i32,
    /// Width of the Gaussian kernel matching enemies to the target difficulty.
    pub difficulty_sigma: f64,
    pub loot_prob_near_start: f64,
    pub loot_prob_far: f64,
    pub loot_min_spacing: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 80,
            seed: 12_345,
            partition: PartitionParams::default(),
            corridors: CorridorParams::default(),
            placement: PlacementParams::default(),
            difficulty_curve: DifficultyCurve::from_points(vec![
                CurvePoint { t: 0.0, value: 0.0 },
                CurvePoint { t: 0.6, value: 0.35 },
                CurvePoint { t: 1.0, value: 1.0 },
            ]),
            catalog: ContentCatalogs::build_default(),
        }
    }
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self { max_depth: 4, min_room_width: 6, min_room_height: 6, padding: 1 }
    }
}

impl Default for CorridorParams {
    fn default() -> Self {
        Self { extra_loops: 2, wide: true }
    }
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            wall_clearance: 1,
            enemy_prob_near_start: 0.05,
            enemy_prob_far: 0.25,
            enemy_min_spacing: 4,
            difficulty_sigma: 0.25,
            loot_prob_near_start: 0.15,
            loot_prob_far: 0.08,
            loot_min_spacing: 5,
        }
    }
}

impl GenerationConfig {
    /// Clamps out-of-range values instead of rejecting them, so hand-edited
    /// configs degrade gracefully. Catalog problems are still hard errors at
    /// generation time.
    pub fn normalized(mut self) -> Self {
        self.width = self.width.max(8);
        self.height = self.height.max(8);
        self.partition.max_depth = self.partition.max_depth.clamp(1, 10);
        self.partition.min_room_width = self.partition.min_room_width.max(3);
        self.partition.min_room_height = self.partition.min_room_height.max(3);
        self.partition.padding = self.partition.padding.max(0);
        self.placement.wall_clearance = self.placement.wall_clearance.clamp(0, 5);
        self.placement.enemy_min_spacing = self.placement.enemy_min_spacing.max(0);
        self.placement.loot_min_spacing = self.placement.loot_min_spacing.max(0);
        self.placement.difficulty_sigma = self.placement.difficulty_sigma.clamp(0.05, 0.6);
        self.placement.enemy_prob_near_start = self.placement.enemy_prob_near_start.clamp(0.0, 1.0);
        self.placement.enemy_prob_far = self.placement.enemy_prob_far.clamp(0.0, 1.0);
        self.placement.loot_prob_near_start = self.placement.loot_prob_near_start.clamp(0.0, 1.0);
        self.placement.loot_prob_far = self.placement.loot_prob_far.clamp(0.0, 1.0);
        self
    }
}
