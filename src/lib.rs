//! # chroma-2048
//!
//! A 2048 variant where every tile carries a value and a color.
//!
//! ## Rules
//!
//! - Tiles step one cell per move toward the chosen edge.
//! - Equal values merge into `value + 1`, and their colors blend by
//!   component-wise mean.
//! - New tiles are 1 or 2, black or white.
//! - After a merging move, tiles reaching the special value (6) are
//!   cleared. A gray one is worth 5 points; any other color just earns a
//!   hint.
//!
//! ## Architecture
//!
//! - **One owner**: `BoardEngine` holds the only mutable board. Hosts get
//!   O(1) snapshots (`im`-backed) and never write back.
//! - **Injectable randomness**: spawns draw through `TileRng`, so tests pin
//!   every branch with `ScriptedRng` and games replay from a seed.
//! - **Events, not text**: score changes and hints are queued as
//!   `Notification`s; wording is the host's concern.
//!
//! ## Modules
//!
//! - `core`: colors, tiles, boards, directions, configuration, RNG, errors
//! - `engine`: `BoardEngine`, the slide pass, spawn and scoring policies

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Board, Color, ColorMatch, Direction, EngineConfig, EngineError, GameRng, GameRngState,
    Position, ScriptedRng, Tile, TileRng,
};

pub use crate::engine::{
    BoardEngine, MoveOutcome, Notification, Scoreboard, SlideResult, SpecialResolution, Spawned,
};
