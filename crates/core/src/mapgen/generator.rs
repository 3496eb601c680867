//! Pipeline orchestration from configuration to `GeneratedLevel`.

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::rng::GenerationRng;
use crate::types::{Pos, Rect};

use super::analysis::{bfs_distances, choose_start_and_exit};
use super::corridors::{carve_corridor, complete_graph, minimum_spanning_tree};
use super::doors::detect_doors;
use super::grid::LevelGrid;
use super::model::{GeneratedLevel, PlacementDescriptor, PlacementKind};
use super::partition::PartitionNode;
use super::rooms::allocate_rooms;
use super::spawns::{GridNavigation, NavigationSampler, PlacementContext, place_enemies, place_loot};
use super::walls::collect_walls;

pub struct LevelGenerator {
    config: GenerationConfig,
}

impl LevelGenerator {
    /// The configuration is normalized up front so one generator always works
    /// from the same clamped parameter set.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config: config.normalized() }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Runs the full pipeline with grid-snapped navigation.
    pub fn generate(&self) -> Result<GeneratedLevel, GenerateError> {
        self.generate_with_navigation(&GridNavigation)
    }

    /// Runs the full pipeline. Every call starts from a fresh grid and a
    /// fresh draw stream, so regenerating with one seed is idempotent and
    /// nothing accumulates across runs.
    pub fn generate_with_navigation(
        &self,
        navigation: &dyn NavigationSampler,
    ) -> Result<GeneratedLevel, GenerateError> {
        let config = &self.config;
        validate_catalogs(config)?;
        let mut rng = GenerationRng::from_seed(config.seed);

        let mut tree = PartitionNode::new(Rect {
            x: 0,
            y: 0,
            width: config.width,
            height: config.height,
        });
        tree.split_recursive(config.partition.max_depth, &config.partition, &mut rng);
        let leaves = tree.leaves();
        log::debug!("partitioned {}x{} into {} leaves", config.width, config.height, leaves.len());

        let mut grid = LevelGrid::new(config.width, config.height);
        let rooms = allocate_rooms(&mut grid, &leaves, &config.partition, &mut rng);
        if rooms.len() < 2 {
            return Err(GenerateError::InsufficientRooms { placed: rooms.len() });
        }

        let centers: Vec<Pos> = rooms.iter().map(|room| room.center).collect();
        let edges = complete_graph(&centers);
        let tree_edges = minimum_spanning_tree(centers.len(), &edges);
        for edge in &tree_edges {
            carve_corridor(&mut grid, centers[edge.a], centers[edge.b], config.corridors.wide, &mut rng);
        }
        for _ in 0..config.corridors.extra_loops {
            if edges.is_empty() {
                break;
            }
            let edge = edges[rng.index(edges.len())];
            carve_corridor(&mut grid, centers[edge.a], centers[edge.b], config.corridors.wide, &mut rng);
        }
        log::debug!(
            "carved {} spanning corridors plus {} loop edges for {} rooms",
            tree_edges.len(),
            config.corridors.extra_loops,
            rooms.len()
        );

        let walls = collect_walls(&grid);
        let (start, exit) = choose_start_and_exit(&grid, &centers);
        let field = bfs_distances(&grid, start);
        let doors =
            if config.catalog.door_prototype.is_empty() { Vec::new() } else { detect_doors(&grid) };

        let context = PlacementContext {
            grid: &grid,
            field: &field,
            params: &config.placement,
            curve: &config.difficulty_curve,
        };
        let enemies = place_enemies(&context, &config.catalog.enemies, navigation, &mut rng);
        let loot = place_loot(&context, &config.catalog.loot, &mut rng);

        log::info!(
            "generated level: rooms={} walls={} doors={} enemies={} loot={}",
            rooms.len(),
            walls.len(),
            doors.len(),
            enemies.len(),
            loot.len()
        );

        let mut placements = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Pos { y, x };
                if grid.is_floor(pos) {
                    placements.push(PlacementDescriptor::bare(PlacementKind::Floor, pos));
                }
            }
        }
        for &pos in &walls {
            placements.push(PlacementDescriptor::bare(PlacementKind::Wall, pos));
        }
        placements.push(PlacementDescriptor::bare(PlacementKind::Start, start));
        placements.push(PlacementDescriptor::bare(PlacementKind::Exit, exit));
        for door in &doors {
            placements.push(PlacementDescriptor {
                kind: PlacementKind::Door,
                pos: door.pos,
                orientation: Some(door.axis),
                prototype: Some(config.catalog.door_prototype.clone()),
            });
        }
        for spawn in enemies {
            placements.push(PlacementDescriptor {
                kind: PlacementKind::Enemy,
                pos: spawn.pos,
                orientation: None,
                prototype: Some(spawn.prototype),
            });
        }
        for spawn in loot {
            placements.push(PlacementDescriptor {
                kind: PlacementKind::Loot,
                pos: spawn.pos,
                orientation: None,
                prototype: Some(spawn.prototype),
            });
        }

        let (distance_from_start, max_start_distance) = field.into_cells();
        let (floor, room_id) = grid.into_arrays();

        Ok(GeneratedLevel {
            width: config.width,
            height: config.height,
            floor,
            room_id,
            rooms,
            start,
            exit,
            distance_from_start,
            max_start_distance,
            placements,
        })
    }
}

fn validate_catalogs(config: &GenerationConfig) -> Result<(), GenerateError> {
    if config.catalog.floor_prototype.is_empty() {
        return Err(GenerateError::Configuration { slot: "floor" });
    }
    if config.catalog.wall_prototype.is_empty() {
        return Err(GenerateError::Configuration { slot: "wall" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorridorParams, PartitionParams};

    fn small_config(seed: u64) -> GenerationConfig {
        GenerationConfig {
            width: 48,
            height: 36,
            seed,
            partition: PartitionParams {
                max_depth: 3,
                min_room_width: 4,
                min_room_height: 4,
                padding: 1,
            },
            corridors: CorridorParams { extra_loops: 2, wide: false },
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn missing_floor_prototype_is_a_configuration_error() {
        let mut config = small_config(1);
        config.catalog.floor_prototype.clear();
        let error = LevelGenerator::new(config).generate().expect_err("must fail");
        assert_eq!(error, GenerateError::Configuration { slot: "floor" });
    }

    #[test]
    fn missing_wall_prototype_is_a_configuration_error() {
        let mut config = small_config(1);
        config.catalog.wall_prototype.clear();
        let error = LevelGenerator::new(config).generate().expect_err("must fail");
        assert_eq!(error, GenerateError::Configuration { slot: "wall" });
    }

    #[test]
    fn grids_too_tight_for_two_rooms_abort_with_insufficient_rooms() {
        let config = GenerationConfig {
            width: 10,
            height: 10,
            partition: PartitionParams {
                max_depth: 2,
                min_room_width: 9,
                min_room_height: 9,
                padding: 1,
            },
            ..GenerationConfig::default()
        };
        let error = LevelGenerator::new(config).generate().expect_err("must fail");
        assert!(matches!(error, GenerateError::InsufficientRooms { placed } if placed < 2));
    }

    #[test]
    fn empty_door_prototype_suppresses_door_placements() {
        let mut config = small_config(42);
        config.catalog.door_prototype.clear();
        let level = LevelGenerator::new(config).generate().expect("generation should succeed");
        assert!(
            level.placements.iter().all(|placement| placement.kind != PlacementKind::Door),
            "doors must be skipped when no prototype is configured"
        );
    }

    #[test]
    fn placements_keep_the_stage_order() {
        let level =
            LevelGenerator::new(small_config(7)).generate().expect("generation should succeed");
        let order: Vec<PlacementKind> = level
            .placements
            .iter()
            .map(|placement| placement.kind)
            .collect();

        let rank = |kind: PlacementKind| match kind {
            PlacementKind::Floor => 0,
            PlacementKind::Wall => 1,
            PlacementKind::Start => 2,
            PlacementKind::Exit => 3,
            PlacementKind::Door => 4,
            PlacementKind::Enemy => 5,
            PlacementKind::Loot => 6,
        };
        for pair in order.windows(2) {
            assert!(rank(pair[0]) <= rank(pair[1]), "placement groups out of order: {pair:?}");
        }
    }

    #[test]
    fn start_and_exit_markers_appear_exactly_once() {
        let level =
            LevelGenerator::new(small_config(9)).generate().expect("generation should succeed");
        let starts = level
            .placements
            .iter()
            .filter(|placement| placement.kind == PlacementKind::Start)
            .count();
        let exits = level
            .placements
            .iter()
            .filter(|placement| placement.kind == PlacementKind::Exit)
            .count();
        assert_eq!((starts, exits), (1, 1));
    }
}
