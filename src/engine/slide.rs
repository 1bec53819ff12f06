//! The slide-and-merge pass.
//!
//! Every tile takes at most one step. Cells are swept so that the cell
//! nearest the target edge is settled first, and each source tile looks
//! only at the *working* board:
//!
//! - destination off the board: the tile stays put
//! - destination empty: the tile steps into it
//! - destination holds an equal value: the two merge into `value + 1`
//!   with the blended color
//! - destination holds a different value: the tile stays put
//!
//! There is no slide-to-the-far-wall and no fixed-point iteration; one
//! sweep is one move.

use crate::core::{Board, Direction, Position, Tile};

/// Result of one sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideResult {
    /// The working board after the sweep.
    pub board: Board,
    /// At least one merge happened.
    pub merged: bool,
    /// Number of merges.
    pub merges: usize,
    /// The board differs from the input.
    pub moved: bool,
}

/// Positions in the order they are swept for `direction`.
pub fn sweep_order(board: &Board, direction: Direction) -> Vec<Position> {
    let positions = board.positions();
    if direction.toward_origin() {
        positions.collect()
    } else {
        positions.rev().collect()
    }
}

/// Run one slide-and-merge sweep. Pure: `board` is not modified and no
/// randomness is drawn.
#[must_use]
pub fn slide(board: &Board, direction: Direction, empty: Tile) -> SlideResult {
    let mut working = board.clone();
    for pos in board.positions() {
        working.set(pos, empty);
    }

    let mut merges = 0;
    for source in sweep_order(board, direction) {
        let tile = board.get(source);
        if tile.is_empty() {
            continue;
        }

        let Some(dest) = board.neighbor(source, direction) else {
            working.set(source, tile);
            continue;
        };

        let resident = working.get(dest);
        if resident.is_empty() {
            working.set(dest, tile);
        } else if resident.value == tile.value {
            working.set(dest, tile.merged_with(resident));
            merges += 1;
        } else {
            working.set(source, tile);
        }
    }

    let moved = !working.same_tiles(board);
    SlideResult {
        board: working,
        merged: merges > 0,
        merges,
        moved,
    }
}
