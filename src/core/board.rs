//! Square grid of tiles.
//!
//! ## Layout
//!
//! Cells are addressed by `Position { x, y }` with both coordinates in
//! `0..size`. Storage is x-major (`index = x * size + y`), and every sweep
//! over the board (empty-cell scans, special-rule scans) walks it in that
//! order. `y = 0` is the bottom row.
//!
//! ## Snapshots
//!
//! Cells live in an `im::Vector`, so cloning a board is O(1). The engine
//! hands clones to the rendering side; a clone never aliases engine state.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;
use std::num::NonZeroUsize;

use super::color::Color;
use super::direction::Direction;
use super::error::EngineError;
use super::tile::Tile;

/// Coordinates of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Empty-cell lists fit inline for the standard 4x4 board.
pub type CellList = SmallVec<[Position; 16]>;

/// An `size x size` grid of tiles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    size: NonZeroUsize,
    cells: Vector<Tile>,
}

impl Board {
    /// A board of empty cells, each filled with `filler`.
    #[must_use]
    pub fn filled(size: NonZeroUsize, filler: Tile) -> Self {
        let n = size.get();
        Self {
            size,
            cells: std::iter::repeat(filler).take(n * n).collect(),
        }
    }

    /// A board of empty cells using the default empty color.
    #[must_use]
    pub fn empty(size: NonZeroUsize) -> Self {
        Self::filled(size, Tile::EMPTY)
    }

    /// Like `empty`, for a size that has not been checked yet.
    ///
    /// Returns `InvalidBoardSize` for `size == 0`.
    pub fn square(size: usize) -> Result<Self, EngineError> {
        NonZeroUsize::new(size)
            .map(Self::empty)
            .ok_or(EngineError::InvalidBoardSize { size })
    }

    /// Build a board from rows listed bottom-up: `rows[y][x]`.
    ///
    /// ```
    /// use chroma_2048::core::{Board, Color, Position, Tile};
    ///
    /// let t = |v| Tile::new(v, Color::WHITE);
    /// let board = Board::from_rows(vec![
    ///     vec![t(1), t(0)],
    ///     vec![t(0), t(2)],
    /// ]).unwrap();
    ///
    /// assert_eq!(board.get(Position::new(0, 0)).value, 1);
    /// assert_eq!(board.get(Position::new(1, 1)).value, 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, EngineError> {
        let size = rows.len();
        let mut board = Self::square(size)?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::RaggedRows {
                    expected: size,
                    found: row.len(),
                });
            }
            for (x, &tile) in row.iter().enumerate() {
                board.set(Position::new(x, y), tile);
            }
        }
        Ok(board)
    }

    /// Build a board from bare values, all in one color. Zero values become
    /// the default empty tile.
    pub fn from_values(rows: &[Vec<u32>], color: Color) -> Result<Self, EngineError> {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v == 0 { Tile::EMPTY } else { Tile::new(v, color) })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Cells per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Cells per side, as the non-zero type configs use.
    #[must_use]
    pub fn side(&self) -> NonZeroUsize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size() && pos.y < self.size()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.contains(pos), "position {pos} outside {0}x{0} board", self.size());
        pos.x * self.size() + pos.y
    }

    /// Tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Tile {
        self.cells[self.index(pos)]
    }

    /// Overwrite the tile at `pos`.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        let idx = self.index(pos);
        self.cells.set(idx, tile);
    }

    /// The cell one step from `pos` in `direction`, if it is on the board.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let next = Position::new(x, y);
        self.contains(next).then_some(next)
    }

    /// All positions in storage (x-major) order.
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Position> {
        let size = self.size();
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Positions holding an empty tile, in storage order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        self.positions().filter(|&p| self.get(p).is_empty()).collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_empty()).count()
    }

    /// Largest tile value on the board (0 when empty).
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.cells.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Tiles of row `y`, left to right.
    #[must_use]
    pub fn row(&self, y: usize) -> Vec<Tile> {
        (0..self.size()).map(|x| self.get(Position::new(x, y))).collect()
    }

    /// Values of row `y`, left to right.
    #[must_use]
    pub fn values_row(&self, y: usize) -> Vec<u32> {
        self.row(y).iter().map(|t| t.value).collect()
    }

    /// Cell-by-cell equality where every empty cell matches every other
    /// empty cell, whatever its filler color.
    #[must_use]
    pub fn same_tiles(&self, other: &Board) -> bool {
        self.size == other.size
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (a.is_empty() && b.is_empty()) || a == b)
    }

    /// Iterate over `(position, tile)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.positions().map(move |p| (p, self.get(p)))
    }
}

impl std::fmt::Display for Board {
    /// Top row first, values only.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.size()).rev() {
            let line: Vec<String> = self.values_row(y).iter().map(u32::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::square(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_cells().len(), 16);
        assert_eq!(board.max_value(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::square(0), Err(EngineError::InvalidBoardSize { size: 0 }));
        assert_eq!(Board::from_rows(vec![]), Err(EngineError::InvalidBoardSize { size: 0 }));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows = vec![vec![Tile::EMPTY; 2], vec![Tile::EMPTY; 3]];
        assert_eq!(
            Board::from_rows(rows),
            Err(EngineError::RaggedRows { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_storage_order_is_x_major() {
        let board = Board::square(3).unwrap();
        let positions: Vec<_> = board.positions().take(4).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_neighbor_bounds() {
        let board = Board::square(4).unwrap();
        let corner = Position::new(0, 0);

        assert_eq!(board.neighbor(corner, Direction::Left), None);
        assert_eq!(board.neighbor(corner, Direction::Down), None);
        assert_eq!(board.neighbor(corner, Direction::Right), Some(Position::new(1, 0)));
        assert_eq!(board.neighbor(corner, Direction::Up), Some(Position::new(0, 1)));

        let far = Position::new(3, 3);
        assert_eq!(board.neighbor(far, Direction::Right), None);
        assert_eq!(board.neighbor(far, Direction::Up), None);
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let mut board = Board::square(2).unwrap();
        let snapshot = board.clone();
        board.set(Position::new(1, 1), Tile::new(2, Color::BLACK));

        assert_eq!(snapshot.occupied_count(), 0);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_from_values_and_rows() {
        let board = Board::from_values(&[vec![1, 0, 2], vec![0, 0, 0], vec![0, 3, 0]], Color::WHITE)
            .unwrap();
        assert_eq!(board.values_row(0), vec![1, 0, 2]);
        assert_eq!(board.values_row(2), vec![0, 3, 0]);
        assert_eq!(board.get(Position::new(1, 2)), Tile::new(3, Color::WHITE));
        assert_eq!(board.get(Position::new(1, 0)), Tile::EMPTY);
        assert_eq!(board.max_value(), 3);
        assert_eq!(board.empty_cells().len(), 6);
    }

    #[test]
    fn test_same_tiles_ignores_empty_color() {
        let blue = Board::square(3).unwrap();
        let black = Board::filled(NonZeroUsize::new(3).unwrap(), Tile::empty_with(Color::BLACK));
        assert_ne!(blue, black);
        assert!(blue.same_tiles(&black));

        let mut other = blue.clone();
        other.set(Position::new(2, 2), Tile::new(1, Color::BLACK));
        assert!(!blue.same_tiles(&other));
        assert!(!blue.same_tiles(&Board::square(2).unwrap()));
    }

    #[test]
    fn test_display_top_row_first() {
        let board = Board::from_values(&[vec![1, 2], vec![3, 0]], Color::WHITE).unwrap();
        assert_eq!(board.to_string(), "3 0\n1 2\n");
    }
}
