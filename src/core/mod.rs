//! Core value types: colors, tiles, boards, directions, configuration, RNG.
//!
//! Nothing here holds game state. `BoardEngine` in `engine` owns the one
//! mutable board and builds on these types.

pub mod board;
pub mod color;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod tile;

pub use board::{Board, CellList, Position};
pub use color::{Color, ColorMatch};
pub use config::{EngineConfig, DEFAULT_BOARD_SIZE};
pub use direction::Direction;
pub use error::EngineError;
pub use rng::{GameRng, GameRngState, ScriptedRng, TileRng};
pub use tile::Tile;
