pub mod config;
pub mod content;
pub mod curve;
pub mod error;
pub mod mapgen;
pub mod rng;
pub mod types;

pub use config::{CorridorParams, GenerationConfig, PartitionParams, PlacementParams};
pub use content::{ContentCatalogs, EnemyEntry};
pub use curve::{CurvePoint, DifficultyCurve};
pub use error::GenerateError;
pub use mapgen::{
    GeneratedLevel, GridNavigation, LevelGenerator, NavigationSampler, PlacementDescriptor,
    PlacementKind, Room, SpawnPointProvider, generate_level,
};
pub use types::{DoorAxis, Pos, Rect};
