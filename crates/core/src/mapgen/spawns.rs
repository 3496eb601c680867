//! Difficulty-scaled enemy and loot placement over the carved layout.

use crate::config::PlacementParams;
use crate::content::EnemyEntry;
use crate::curve::DifficultyCurve;
use crate::rng::GenerationRng;
use crate::types::Pos;

use super::analysis::DistanceField;
use super::grid::LevelGrid;

/// Boundary to an external navigation authority. Enemy candidates are snapped
/// through it before placement; `None` means the cell has no usable
/// navigation sample and that one candidate is dropped. The probe runs after
/// the candidate's own draws, which happen either way.
pub trait NavigationSampler {
    fn sample(&self, pos: Pos) -> Option<Pos>;
}

/// Default sampler: every cell navigates to itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridNavigation;

impl NavigationSampler for GridNavigation {
    fn sample(&self, pos: Pos) -> Option<Pos> {
        Some(pos)
    }
}

/// One accepted spawn: a cell plus the catalog prototype chosen for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ContentSpawn {
    pub(super) pos: Pos,
    pub(super) prototype: String,
}

pub(super) struct PlacementContext<'a> {
    pub(super) grid: &'a LevelGrid,
    pub(super) field: &'a DistanceField,
    pub(super) params: &'a PlacementParams,
    pub(super) curve: &'a DifficultyCurve,
}

/// Per-category record of accepted cells, probed with a Manhattan radius.
struct OccupancyGrid {
    width: i32,
    height: i32,
    taken: Vec<bool>,
}

impl OccupancyGrid {
    fn new(width: i32, height: i32) -> Self {
        Self { width, height, taken: vec![false; (width as usize) * (height as usize)] }
    }

    fn mark(&mut self, pos: Pos) {
        self.taken[(pos.y * self.width + pos.x) as usize] = true;
    }

    fn too_close(&self, pos: Pos, spacing: i32) -> bool {
        for dy in -spacing..=spacing {
            for dx in -spacing..=spacing {
                if dx.abs() + dy.abs() > spacing {
                    continue;
                }
                let probe = Pos { y: pos.y + dy, x: pos.x + dx };
                if probe.x < 0 || probe.y < 0 || probe.x >= self.width || probe.y >= self.height {
                    continue;
                }
                if self.taken[(probe.y * self.width + probe.x) as usize] {
                    return true;
                }
            }
        }
        false
    }
}

/// Reachable floor with enough clearance from surrounding walls.
fn eligible(context: &PlacementContext<'_>, pos: Pos) -> bool {
    context.grid.is_floor(pos)
        && context.field.distance_at(pos) >= 0
        && context.grid.blocked_neighbor_count(pos) <= context.params.wall_clearance
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Row-major sweep placing enemies. The scan order is fixed: together with
/// the spacing grid it decides which of two equally-distant candidates wins,
/// and that tie-break is part of the reproducible output.
pub(super) fn place_enemies(
    context: &PlacementContext<'_>,
    entries: &[EnemyEntry],
    navigation: &dyn NavigationSampler,
    rng: &mut GenerationRng,
) -> Vec<ContentSpawn> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut spawns = Vec::new();
    let mut occupancy = OccupancyGrid::new(context.grid.width(), context.grid.height());
    for y in 0..context.grid.height() {
        for x in 0..context.grid.width() {
            let pos = Pos { y, x };
            if !eligible(context, pos) {
                continue;
            }

            let t = context.field.normalized_distance(pos);
            let target = context.curve.evaluate(t).clamp(0.0, 1.0);

            let probability =
                lerp(context.params.enemy_prob_near_start, context.params.enemy_prob_far, t);
            if rng.next_unit() > probability {
                continue;
            }
            if occupancy.too_close(pos, context.params.enemy_min_spacing) {
                continue;
            }

            let Some(prototype) =
                choose_enemy_prototype(entries, target, context.params.difficulty_sigma, rng)
            else {
                continue;
            };
            let Some(snapped) = navigation.sample(pos) else {
                continue;
            };

            occupancy.mark(pos);
            spawns.push(ContentSpawn { pos: snapped, prototype: prototype.to_string() });
        }
    }
    spawns
}

/// Row-major sweep placing loot. Density follows the distance signal but the
/// prototype pick is uniform.
pub(super) fn place_loot(
    context: &PlacementContext<'_>,
    prototypes: &[String],
    rng: &mut GenerationRng,
) -> Vec<ContentSpawn> {
    if prototypes.is_empty() {
        return Vec::new();
    }

    let mut spawns = Vec::new();
    let mut occupancy = OccupancyGrid::new(context.grid.width(), context.grid.height());
    for y in 0..context.grid.height() {
        for x in 0..context.grid.width() {
            let pos = Pos { y, x };
            if !eligible(context, pos) {
                continue;
            }

            let t = context.field.normalized_distance(pos);
            let probability =
                lerp(context.params.loot_prob_near_start, context.params.loot_prob_far, t);
            if rng.next_unit() > probability {
                continue;
            }
            if occupancy.too_close(pos, context.params.loot_min_spacing) {
                continue;
            }

            let prototype = prototypes[rng.index(prototypes.len())].clone();
            occupancy.mark(pos);
            spawns.push(ContentSpawn { pos, prototype });
        }
    }
    spawns
}

/// Gaussian-kernel weighted pick: entries near the target difficulty
/// dominate. A zero total weight falls back to the closest-difficulty entry
/// without consuming a draw.
fn choose_enemy_prototype<'a>(
    entries: &'a [EnemyEntry],
    target_difficulty: f64,
    sigma: f64,
    rng: &mut GenerationRng,
) -> Option<&'a str> {
    if entries.is_empty() {
        return None;
    }

    let sigma2 = sigma * sigma * 2.0;
    let mut weights = Vec::with_capacity(entries.len());
    let mut total = 0.0;
    for entry in entries {
        let delta = entry.difficulty - target_difficulty;
        let weight = entry.base_weight * (-(delta * delta) / sigma2).exp();
        weights.push(weight);
        total += weight;
    }

    if total <= 0.0 {
        return entries
            .iter()
            .min_by(|left, right| {
                (left.difficulty - target_difficulty)
                    .abs()
                    .total_cmp(&(right.difficulty - target_difficulty).abs())
            })
            .map(|entry| entry.prototype.as_str());
    }

    let mut roll = rng.next_unit() * total;
    for (entry, weight) in entries.iter().zip(&weights) {
        roll -= weight;
        if roll <= 0.0 {
            return Some(&entry.prototype);
        }
    }
    entries.last().map(|entry| entry.prototype.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlacementParams;
    use crate::mapgen::analysis::bfs_distances;
    use crate::types::Rect;

    struct NoNavigation;

    impl NavigationSampler for NoNavigation {
        fn sample(&self, _pos: Pos) -> Option<Pos> {
            None
        }
    }

    fn entry(prototype: &str, difficulty: f64, base_weight: f64) -> EnemyEntry {
        EnemyEntry::new(prototype, difficulty, base_weight)
    }

    /// One big open room so nearly every cell is an eligible candidate.
    fn open_room() -> (LevelGrid, Pos) {
        let mut grid = LevelGrid::new(24, 24);
        grid.stamp_room(Rect { x: 1, y: 1, width: 22, height: 22 }, 0);
        (grid, Pos { y: 11, x: 11 })
    }

    fn eager_params() -> PlacementParams {
        PlacementParams {
            wall_clearance: 1,
            enemy_prob_near_start: 1.0,
            enemy_prob_far: 1.0,
            enemy_min_spacing: 3,
            difficulty_sigma: 0.25,
            loot_prob_near_start: 1.0,
            loot_prob_far: 1.0,
            loot_min_spacing: 4,
        }
    }

    #[test]
    fn equal_weights_at_the_midpoint_split_evenly() {
        let entries = [entry("soft", 0.0, 1.0), entry("hard", 1.0, 1.0)];
        let mut rng = GenerationRng::from_seed(77);
        let mut soft_picks = 0_u32;
        let trials = 10_000;
        for _ in 0..trials {
            if choose_enemy_prototype(&entries, 0.5, 0.1, &mut rng) == Some("soft") {
                soft_picks += 1;
            }
        }
        let share = f64::from(soft_picks) / f64::from(trials);
        assert!((0.45..=0.55).contains(&share), "expected ~50/50 split, got {share}");
    }

    #[test]
    fn small_sigma_concentrates_picks_on_the_nearest_difficulty() {
        let entries = [entry("soft", 0.0, 1.0), entry("hard", 1.0, 1.0)];
        let mut rng = GenerationRng::from_seed(5);
        for _ in 0..500 {
            assert_eq!(choose_enemy_prototype(&entries, 0.05, 0.05, &mut rng), Some("soft"));
        }
    }

    #[test]
    fn zero_total_weight_falls_back_to_the_closest_entry_without_a_draw() {
        let entries = [entry("near", 0.4, 0.0), entry("far", 0.9, 0.0)];
        let mut rng = GenerationRng::from_seed(13);
        assert_eq!(choose_enemy_prototype(&entries, 0.5, 0.25, &mut rng), Some("near"));

        let mut fresh = GenerationRng::from_seed(13);
        assert_eq!(rng.range_i32(0, 1_000), fresh.range_i32(0, 1_000), "fallback must not draw");
    }

    #[test]
    fn accepted_enemies_respect_the_manhattan_spacing() {
        let (grid, start) = open_room();
        let field = bfs_distances(&grid, start);
        let params = eager_params();
        let context = PlacementContext {
            grid: &grid,
            field: &field,
            params: &params,
            curve: &DifficultyCurve::identity(),
        };
        let entries = [entry("anything", 0.5, 1.0)];
        let mut rng = GenerationRng::from_seed(41);
        let spawns = place_enemies(&context, &entries, &GridNavigation, &mut rng);

        assert!(spawns.len() > 4, "an always-spawn sweep should accept plenty of cells");
        for (index, a) in spawns.iter().enumerate() {
            for b in spawns.iter().skip(index + 1) {
                assert!(
                    a.pos.manhattan(b.pos) > 3,
                    "spawns {:?} and {:?} violate spacing",
                    a.pos,
                    b.pos
                );
            }
        }
    }

    #[test]
    fn candidates_near_walls_are_filtered_by_clearance() {
        let (grid, start) = open_room();
        let field = bfs_distances(&grid, start);
        let params = PlacementParams { wall_clearance: 0, ..eager_params() };
        let context = PlacementContext {
            grid: &grid,
            field: &field,
            params: &params,
            curve: &DifficultyCurve::identity(),
        };
        let entries = [entry("anything", 0.5, 1.0)];
        let mut rng = GenerationRng::from_seed(8);
        for spawn in place_enemies(&context, &entries, &GridNavigation, &mut rng) {
            assert_eq!(
                grid.blocked_neighbor_count(spawn.pos),
                0,
                "cell {:?} touches a wall",
                spawn.pos
            );
        }
    }

    #[test]
    fn a_dry_navigation_sampler_suppresses_every_enemy() {
        let (grid, start) = open_room();
        let field = bfs_distances(&grid, start);
        let params = eager_params();
        let context = PlacementContext {
            grid: &grid,
            field: &field,
            params: &params,
            curve: &DifficultyCurve::identity(),
        };
        let entries = [entry("anything", 0.5, 1.0)];
        let mut rng = GenerationRng::from_seed(21);
        let spawns = place_enemies(&context, &entries, &NoNavigation, &mut rng);
        assert!(spawns.is_empty());
    }

    #[test]
    fn loot_draws_prototypes_uniformly_from_the_catalog() {
        let (grid, start) = open_room();
        let field = bfs_distances(&grid, start);
        let params = eager_params();
        let context = PlacementContext {
            grid: &grid,
            field: &field,
            params: &params,
            curve: &DifficultyCurve::identity(),
        };
        let prototypes = vec!["a".to_string(), "b".to_string()];
        let mut rng = GenerationRng::from_seed(33);
        let spawns = place_loot(&context, &prototypes, &mut rng);
        assert!(!spawns.is_empty());
        for spawn in &spawns {
            assert!(prototypes.contains(&spawn.prototype));
        }
    }

    #[test]
    fn empty_catalogs_disable_their_stage() {
        let (grid, start) = open_room();
        let field = bfs_distances(&grid, start);
        let params = eager_params();
        let context = PlacementContext {
            grid: &grid,
            field: &field,
            params: &params,
            curve: &DifficultyCurve::identity(),
        };
        let mut rng = GenerationRng::from_seed(1);
        assert!(place_enemies(&context, &[], &GridNavigation, &mut rng).is_empty());
        assert!(place_loot(&context, &[], &mut rng).is_empty());

        let mut fresh = GenerationRng::from_seed(1);
        assert_eq!(rng.range_i32(0, 100), fresh.range_i32(0, 100), "no draws when disabled");
    }
}
