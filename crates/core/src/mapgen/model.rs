//! Output models handed to renderers, nav-mesh builders, and bootstrap code.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{DoorAxis, Pos};

use super::rooms::Room;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    Floor,
    Wall,
    Door,
    Enemy,
    Loot,
    Start,
    Exit,
}

/// One thing to instantiate at one grid cell — the generator's sole unit of
/// output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementDescriptor {
    pub kind: PlacementKind,
    pub pos: Pos,
    /// Passage axis; doors only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<DoorAxis>,
    /// Catalog prototype key; doors, enemies, and loot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype: Option<String>,
}

impl PlacementDescriptor {
    pub(super) fn bare(kind: PlacementKind, pos: Pos) -> Self {
        Self { kind, pos, orientation: None, prototype: None }
    }
}

/// Placement origin for a controllable entity, consumed by level bootstrap.
pub trait SpawnPointProvider {
    fn spawn_cell(&self) -> Pos;
    /// Unit direction from start toward exit; +y when the two coincide.
    fn spawn_forward(&self) -> (f32, f32);
}

/// The finished, immutable result of one generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLevel {
    pub width: i32,
    pub height: i32,
    /// Row-major floor occupancy.
    pub floor: Vec<bool>,
    /// Row-major room ids; `-1` for corridors and unfloored cells.
    pub room_id: Vec<i32>,
    pub rooms: Vec<Room>,
    pub start: Pos,
    pub exit: Pos,
    /// Row-major hop distances from `start`; `-1` for unreachable cells.
    pub distance_from_start: Vec<i32>,
    pub max_start_distance: i32,
    /// The ordered hand-off artifact: floors, walls, start, exit, doors,
    /// enemies, loot.
    pub placements: Vec<PlacementDescriptor>,
}

impl GeneratedLevel {
    fn cell_index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn is_floor(&self, pos: Pos) -> bool {
        self.cell_index(pos).is_some_and(|index| self.floor[index])
    }

    /// `-1` for corridors, unfloored cells, and out-of-bounds cells.
    pub fn room_at(&self, pos: Pos) -> i32 {
        self.cell_index(pos).map_or(-1, |index| self.room_id[index])
    }

    /// Hop distance from the start cell; `-1` when unreachable.
    pub fn distance_at(&self, pos: Pos) -> i32 {
        self.cell_index(pos).map_or(-1, |index| self.distance_from_start[index])
    }

    /// Canonical byte encoding of the full output. Two levels are equal
    /// exactly when their canonical bytes are equal.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.width.to_le_bytes());
        bytes.extend(self.height.to_le_bytes());
        for &cell in &self.floor {
            bytes.push(u8::from(cell));
        }
        for &id in &self.room_id {
            bytes.extend(id.to_le_bytes());
        }
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());
        bytes.extend(self.max_start_distance.to_le_bytes());
        for &distance in &self.distance_from_start {
            bytes.extend(distance.to_le_bytes());
        }

        bytes.extend((self.placements.len() as u32).to_le_bytes());
        for placement in &self.placements {
            bytes.push(match placement.kind {
                PlacementKind::Floor => 0,
                PlacementKind::Wall => 1,
                PlacementKind::Door => 2,
                PlacementKind::Enemy => 3,
                PlacementKind::Loot => 4,
                PlacementKind::Start => 5,
                PlacementKind::Exit => 6,
            });
            bytes.extend(placement.pos.y.to_le_bytes());
            bytes.extend(placement.pos.x.to_le_bytes());
            bytes.push(match placement.orientation {
                None => 0,
                Some(DoorAxis::NorthSouth) => 1,
                Some(DoorAxis::EastWest) => 2,
            });
            let prototype = placement.prototype.as_deref().unwrap_or("");
            bytes.extend((prototype.len() as u32).to_le_bytes());
            bytes.extend(prototype.as_bytes());
        }
        bytes
    }

    /// Stable 64-bit digest of the canonical bytes.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

impl SpawnPointProvider for GeneratedLevel {
    fn spawn_cell(&self) -> Pos {
        self.start
    }

    fn spawn_forward(&self) -> (f32, f32) {
        let dx = (self.exit.x - self.start.x) as f32;
        let dy = (self.exit.y - self.start.y) as f32;
        let length_sq = dx * dx + dy * dy;
        if length_sq < 1e-4 {
            return (0.0, 1.0);
        }
        let length = length_sq.sqrt();
        (dx / length, dy / length)
    }
}
