//! Procedural level generation domain split into coherent submodules.

pub mod model;

mod analysis;
mod corridors;
mod doors;
mod generator;
mod grid;
mod partition;
mod rooms;
mod spawns;
mod walls;

pub use generator::LevelGenerator;
pub use model::{GeneratedLevel, PlacementDescriptor, PlacementKind, SpawnPointProvider};
pub use rooms::Room;
pub use spawns::{GridNavigation, NavigationSampler};

use crate::config::GenerationConfig;
use crate::error::GenerateError;

pub fn generate_level(config: GenerationConfig) -> Result<GeneratedLevel, GenerateError> {
    LevelGenerator::new(config).generate()
}
