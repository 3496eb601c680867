//! Wall synthesis from floor adjacency.

use crate::types::Pos;

use super::grid::LevelGrid;

/// Non-floor cells with at least one floor cell among their 8 neighbors, in
/// row-major order. Cells deep outside the layout stay unmarked, so walls
/// form a shell around traversable space rather than solid infill.
pub(super) fn collect_walls(grid: &LevelGrid) -> Vec<Pos> {
    let mut walls = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos { y, x };
            if grid.is_floor(pos) {
                continue;
            }
            if grid.has_floor_neighbor(pos) {
                walls.push(pos);
            }
        }
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn a_lone_floor_cell_grows_a_full_ring_of_walls() {
        let mut grid = LevelGrid::new(5, 5);
        grid.carve_floor(Pos { y: 2, x: 2 });
        let walls = collect_walls(&grid);
        assert_eq!(walls.len(), 8);
        assert!(walls.contains(&Pos { y: 1, x: 1 }));
        assert!(walls.contains(&Pos { y: 3, x: 3 }));
        assert!(!walls.contains(&Pos { y: 0, x: 0 }), "cells two steps out are not walls");
    }

    #[test]
    fn an_empty_grid_has_no_walls() {
        let grid = LevelGrid::new(6, 6);
        assert!(collect_walls(&grid).is_empty());
    }

    #[test]
    fn room_interiors_are_never_walls() {
        let mut grid = LevelGrid::new(10, 10);
        grid.stamp_room(Rect { x: 2, y: 2, width: 5, height: 5 }, 0);
        let walls = collect_walls(&grid);
        for wall in &walls {
            assert!(!grid.is_floor(*wall), "wall stamped on a floor cell: {wall:?}");
        }
        // The shell around a 5x5 room is a 7x7 ring.
        assert_eq!(walls.len(), 7 * 7 - 5 * 5);
    }
}
