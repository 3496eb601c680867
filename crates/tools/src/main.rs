use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use delve_core::{GeneratedLevel, GenerationConfig, LevelGenerator, PlacementKind, SpawnPointProvider};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed override; the config file's seed is used when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Path to a TOML generation config; defaults are used when absent
    #[arg(short, long)]
    config: Option<String>,
    /// Emit the placement list as JSON instead of an ASCII preview
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {path}"))?;
            toml::from_str(&text).with_context(|| format!("failed to parse config file: {path}"))?
        }
        None => GenerationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let level = LevelGenerator::new(config).generate().context("generation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&level.placements)?);
        return Ok(());
    }

    print_preview(&level);
    let (dx, dy) = level.spawn_forward();
    println!();
    println!(
        "rooms: {}  start: ({}, {})  exit: ({}, {})  forward: ({dx:.2}, {dy:.2})",
        level.rooms.len(),
        level.start.x,
        level.start.y,
        level.exit.x,
        level.exit.y
    );
    println!("max distance from start: {}", level.max_start_distance);
    println!("placements: {}", level.placements.len());
    println!("fingerprint: {:016x}", level.fingerprint());
    Ok(())
}

fn print_preview(level: &GeneratedLevel) {
    let width = level.width as usize;
    let height = level.height as usize;
    let mut glyphs = vec![' '; width * height];

    // Later groups overwrite earlier ones, so markers and content stay
    // visible on top of floor tiles.
    for placement in &level.placements {
        let glyph = match placement.kind {
            PlacementKind::Floor => {
                if level.room_at(placement.pos) >= 0 {
                    '.'
                } else {
                    ','
                }
            }
            PlacementKind::Wall => '#',
            PlacementKind::Door => '+',
            PlacementKind::Enemy => 'e',
            PlacementKind::Loot => '$',
            PlacementKind::Start => '@',
            PlacementKind::Exit => '>',
        };
        glyphs[(placement.pos.y as usize) * width + (placement.pos.x as usize)] = glyph;
    }

    for y in 0..height {
        let row: String = glyphs[y * width..(y + 1) * width].iter().collect();
        println!("{row}");
    }
}
