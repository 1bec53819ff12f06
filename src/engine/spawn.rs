//! Spawn policy: where, whether, and what new tiles appear.
//!
//! Draw order for one spawn attempt:
//!
//! 1. nothing is drawn when the board is full
//! 2. without a forced spawn, a coin; tails (draw 0) skips the spawn
//! 3. an index into the empty cells (storage order)
//! 4. a two-way draw into `spawn_colors`
//! 5. a two-way draw into `spawn_values`

use serde::Serialize;
use tracing::trace;

use crate::core::{Board, EngineConfig, Position, Tile, TileRng};

/// A tile the spawn step placed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Spawned {
    pub position: Position,
    pub tile: Tile,
}

/// Try to place one new tile.
///
/// `forced` is set after a merging move and while seeding a new game; the
/// spawn then always happens if there is room. Otherwise it happens with
/// probability one half.
pub fn spawn<R: TileRng + ?Sized>(
    board: &mut Board,
    config: &EngineConfig,
    forced: bool,
    rng: &mut R,
) -> Option<Spawned> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        trace!("board full, nothing spawned");
        return None;
    }

    if !forced && !rng.coin() {
        trace!("spawn skipped");
        return None;
    }

    let position = empty[rng.pick(empty.len())];
    let color = config.spawn_colors[rng.pick(2)];
    let value = config.spawn_values[rng.pick(2)];
    let tile = Tile::new(value, color);

    board.set(position, tile);
    trace!(%position, value, "spawned tile");
    Some(Spawned { position, tile })
}
