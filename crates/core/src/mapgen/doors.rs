//! Door detection on corridor cells that cross a room boundary.

use crate::types::{DoorAxis, Pos};

use super::grid::LevelGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct DoorPlacement {
    pub(super) pos: Pos,
    pub(super) axis: DoorAxis,
}

/// Interior row-major scan for corridor cells sitting exactly on a room
/// boundary: the passage runs floor-to-floor along one axis only, and of the
/// two cells along that axis exactly one belongs to a room.
pub(super) fn detect_doors(grid: &LevelGrid) -> Vec<DoorPlacement> {
    let mut doors = Vec::new();
    for y in 1..grid.height() - 1 {
        for x in 1..grid.width() - 1 {
            let pos = Pos { y, x };
            if !grid.is_floor(pos) || grid.room_at(pos) >= 0 {
                continue;
            }

            let north = Pos { y: y + 1, x };
            let south = Pos { y: y - 1, x };
            let east = Pos { y, x: x + 1 };
            let west = Pos { y, x: x - 1 };

            let ns_open = grid.is_floor(north) && grid.is_floor(south);
            let ew_open = grid.is_floor(east) && grid.is_floor(west);

            let ns_door =
                ns_open && !ew_open && ((grid.room_at(north) >= 0) ^ (grid.room_at(south) >= 0));
            let ew_door =
                ew_open && !ns_open && ((grid.room_at(east) >= 0) ^ (grid.room_at(west) >= 0));

            if ns_door {
                doors.push(DoorPlacement { pos, axis: DoorAxis::NorthSouth });
            } else if ew_door {
                doors.push(DoorPlacement { pos, axis: DoorAxis::EastWest });
            }
        }
    }
    doors
}
