use anyhow::Result;
use clap::Parser;
use delve_core::{GenerateError, GeneratedLevel, GenerationConfig, LevelGenerator, PlacementKind};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed of the sweep
    #[arg(short, long, default_value_t = 0)]
    start_seed: u64,
    /// Number of consecutive seeds to generate and check
    #[arg(short, long, default_value_t = 1_000)]
    count: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Sweeping {} seeds starting at {}...", args.count, args.start_seed);
    let mut aborted = 0_u64;
    for seed in args.start_seed..args.start_seed.saturating_add(args.count) {
        let config = GenerationConfig { seed, ..GenerationConfig::default() };
        let spacing = config.placement.enemy_min_spacing as u32;
        match LevelGenerator::new(config).generate() {
            Ok(level) => assert_level_invariants(&level, spacing, seed),
            Err(GenerateError::InsufficientRooms { .. }) => aborted += 1,
            Err(error) => anyhow::bail!("seed {seed}: unexpected error: {error}"),
        }
    }

    println!("Sweep completed successfully ({aborted} seeds aborted for insufficient rooms).");
    Ok(())
}

fn assert_level_invariants(level: &GeneratedLevel, enemy_spacing: u32, seed: u64) {
    assert!(level.is_floor(level.start), "seed {seed}: start off the floor");
    assert!(level.is_floor(level.exit), "seed {seed}: exit off the floor");
    assert_eq!(level.distance_at(level.start), 0, "seed {seed}: start distance must be zero");
    assert!(level.distance_at(level.exit) > 0, "seed {seed}: exit must be reachable and distinct");

    for room in &level.rooms {
        assert!(
            level.distance_at(room.center) >= 0,
            "seed {seed}: room {} center unreachable from start",
            room.index
        );
    }

    let mut enemies = Vec::new();
    for placement in &level.placements {
        match placement.kind {
            PlacementKind::Enemy | PlacementKind::Loot => {
                assert!(
                    level.is_floor(placement.pos),
                    "seed {seed}: {:?} off the floor at {:?}",
                    placement.kind,
                    placement.pos
                );
                assert!(
                    level.distance_at(placement.pos) >= 0,
                    "seed {seed}: {:?} unreachable at {:?}",
                    placement.kind,
                    placement.pos
                );
                if placement.kind == PlacementKind::Enemy {
                    enemies.push(placement.pos);
                }
            }
            PlacementKind::Door => {
                assert!(
                    level.room_at(placement.pos) < 0,
                    "seed {seed}: door inside a room at {:?}",
                    placement.pos
                );
            }
            _ => {}
        }
    }

    for (index, a) in enemies.iter().enumerate() {
        for b in enemies.iter().skip(index + 1) {
            assert!(
                a.manhattan(*b) > enemy_spacing,
                "seed {seed}: enemies at {a:?} and {b:?} violate spacing"
            );
        }
    }
}
