//! Tile payload: a value and a color.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A single cell's payload. `value == 0` marks an empty cell; the color of
/// an empty cell carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub value: u32,
    pub color: Color,
}

impl Tile {
    /// The empty cell as the engine writes it.
    pub const EMPTY: Tile = Tile::new(0, Color::BLUE);

    #[must_use]
    pub const fn new(value: u32, color: Color) -> Self {
        Self { value, color }
    }

    /// Empty cell with a specific filler color.
    #[must_use]
    pub const fn empty_with(color: Color) -> Self {
        Self::new(0, color)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// The tile two equal-valued tiles merge into.
    ///
    /// `self` is the tile sliding in, `resident` the one already at the
    /// destination. Callers check the values match. The value saturates at
    /// `u32::MAX` so a merged tile never wraps around to empty.
    #[must_use]
    pub fn merged_with(self, resident: Tile) -> Tile {
        Tile::new(self.value.saturating_add(1), self.color.blend(resident.color))
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::EMPTY
    }
}
