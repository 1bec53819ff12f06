//! Engine configuration.
//!
//! `EngineConfig::default()` is the classic ruleset: a 4x4 board, tiles
//! reaching 6 are cleared, and a gray 6 is worth 5 points. Hosts adjust it
//! with the `with_*` builder methods before creating an engine.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use super::color::{Color, ColorMatch};
use super::tile::Tile;

/// Side length of the classic board.
pub const DEFAULT_BOARD_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(size) => size,
    None => unreachable!(),
};

/// Rule parameters for a `BoardEngine`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cells per side for `new_game`.
    pub board_size: NonZeroUsize,

    /// Tiles reaching this value are cleared after a merging move.
    pub special_value: u32,

    /// Points awarded when a special-value tile carries the neutral color.
    pub special_award: u64,

    /// Scores above this (that are not a new high score) earn a flavor message.
    pub flavor_threshold: u64,

    /// The neutral marker color.
    pub neutral_color: Color,

    /// How tile colors are compared against `neutral_color`.
    pub neutral_match: ColorMatch,

    /// Filler color for empty cells.
    pub empty_color: Color,

    /// Spawn values, indexed by a two-way draw.
    pub spawn_values: [u32; 2],

    /// Spawn colors, indexed by a two-way draw.
    pub spawn_colors: [Color; 2],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            special_value: 6,
            special_award: 5,
            flavor_threshold: 20,
            neutral_color: Color::GRAY,
            neutral_match: ColorMatch::Exact,
            empty_color: Color::BLUE,
            spawn_values: [2, 1],
            spawn_colors: [Color::BLACK, Color::WHITE],
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size used by `new_game`.
    #[must_use]
    pub fn with_board_size(mut self, size: NonZeroUsize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_special_value(mut self, value: u32) -> Self {
        self.special_value = value;
        self
    }

    #[must_use]
    pub fn with_special_award(mut self, points: u64) -> Self {
        self.special_award = points;
        self
    }

    #[must_use]
    pub fn with_flavor_threshold(mut self, threshold: u64) -> Self {
        self.flavor_threshold = threshold;
        self
    }

    /// Set the neutral marker and how it is matched.
    #[must_use]
    pub fn with_neutral(mut self, color: Color, matching: ColorMatch) -> Self {
        self.neutral_color = color;
        self.neutral_match = matching;
        self
    }

    #[must_use]
    pub fn with_empty_color(mut self, color: Color) -> Self {
        self.empty_color = color;
        self
    }

    #[must_use]
    pub fn with_spawn_values(mut self, values: [u32; 2]) -> Self {
        self.spawn_values = values;
        self
    }

    #[must_use]
    pub fn with_spawn_colors(mut self, colors: [Color; 2]) -> Self {
        self.spawn_colors = colors;
        self
    }

    /// The tile written into cleared and vacated cells.
    #[must_use]
    pub fn empty_tile(&self) -> Tile {
        Tile::empty_with(self.empty_color)
    }

    /// Is `color` the neutral marker under the configured match rule?
    #[must_use]
    pub fn is_neutral(&self, color: Color) -> bool {
        self.neutral_match.matches(color, self.neutral_color)
    }
}
