//! Per-leaf room sizing, placement, and grid stamping.

use serde::{Deserialize, Serialize};

use crate::config::PartitionParams;
use crate::rng::GenerationRng;
use crate::types::{Pos, Rect};

use super::grid::LevelGrid;

/// A placed room. Indices are sequential in placement order and double as the
/// grid's room ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub index: usize,
    pub bounds: Rect,
    pub center: Pos,
}

/// Places at most one room per leaf. Leaves whose padded interior cannot hold
/// the minimum room size are skipped; a sparser layout is acceptable. Each
/// placed room draws its size first, then its offset within the leftover
/// slack, and is stamped into the grid under the next sequential id.
pub(super) fn allocate_rooms(
    grid: &mut LevelGrid,
    leaves: &[Rect],
    params: &PartitionParams,
    rng: &mut GenerationRng,
) -> Vec<Room> {
    let mut rooms = Vec::new();
    for leaf in leaves {
        let max_width = leaf.width - params.padding * 2;
        let max_height = leaf.height - params.padding * 2;
        if max_width < params.min_room_width || max_height < params.min_room_height {
            continue;
        }

        let room_width = rng.range_i32(params.min_room_width, max_width + 1);
        let room_height = rng.range_i32(params.min_room_height, max_height + 1);

        let min_x = leaf.x + params.padding;
        let max_x = (leaf.max_x() - params.padding - room_width).max(min_x);
        let min_y = leaf.y + params.padding;
        let max_y = (leaf.max_y() - params.padding - room_height).max(min_y);

        let bounds = Rect {
            x: rng.range_i32(min_x, max_x + 1),
            y: rng.range_i32(min_y, max_y + 1),
            width: room_width,
            height: room_height,
        };

        let index = rooms.len();
        grid.stamp_room(bounds, index as i32);
        rooms.push(Room { index, bounds, center: bounds.center() });
    }
    rooms
}
