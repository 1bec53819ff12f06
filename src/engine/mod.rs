//! The board engine: the one stateful component.
//!
//! `BoardEngine` owns the board, the scoreboard, and the random source.
//! The host calls `new_game` and then one `apply` per key press, rendering
//! from the returned snapshot and draining notifications after each call.
//!
//! ## One move
//!
//! 1. slide-and-merge sweep (`slide`)
//! 2. one spawn attempt, forced if the sweep merged (`spawn`)
//! 3. if the sweep merged, clear special-value tiles (`scoring`)
//!
//! Each call runs to completion before returning.

mod notification;
mod scoring;
mod slide;
mod spawn;

pub use notification::Notification;
pub use scoring::{resolve_specials, Scoreboard, SpecialResolution};
pub use slide::{slide, sweep_order, SlideResult};
pub use spawn::{spawn, Spawned};

use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::{debug, instrument, warn};

use crate::core::{Board, Direction, EngineConfig, EngineError, GameRng, TileRng};

/// What one `apply` call did.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoveOutcome {
    /// Snapshot of the board after the whole move.
    pub board: Board,
    pub direction: Direction,
    /// The sweep changed the board.
    pub moved: bool,
    /// The sweep merged at least one pair.
    pub merged: bool,
    pub merges: usize,
    /// The tile the spawn step placed, if any.
    pub spawned: Option<Spawned>,
    /// Special-value tiles cleared by this move.
    pub specials: Vec<SpecialResolution>,
    /// Points gained by this move.
    pub score_delta: u64,
}

/// Game state and rules for one session.
///
/// ```
/// use chroma_2048::{BoardEngine, Direction};
///
/// let mut engine = BoardEngine::seeded(7);
/// assert_eq!(engine.board().occupied_count(), 2);
///
/// let outcome = engine.apply(Direction::Left);
/// assert!(outcome.board.occupied_count() <= 3);
///
/// for note in engine.drain_notifications() {
///     println!("{note}");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine<R: TileRng = GameRng> {
    config: EngineConfig,
    board: Board,
    scoreboard: Scoreboard,
    /// Set by a merging sweep, cleared once the special rule has run.
    merge_happened: bool,
    rng: R,
    notifications: Vec<Notification>,
}

impl BoardEngine<GameRng> {
    /// Classic rules with a seeded ChaCha8 source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(EngineConfig::default(), GameRng::new(seed))
    }
}

impl Default for BoardEngine<GameRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default(), GameRng::from_entropy())
    }
}

impl<R: TileRng> BoardEngine<R> {
    /// Create an engine and start the first game.
    ///
    /// Queues the instructions, then the opening score line.
    pub fn new(config: EngineConfig, rng: R) -> Self {
        let board = Board::filled(config.board_size, config.empty_tile());
        let mut engine = Self {
            config,
            board,
            scoreboard: Scoreboard::new(),
            merge_happened: false,
            rng,
            notifications: vec![Notification::Instructions],
        };
        engine.new_game();
        engine
    }

    /// Create an engine positioned at `board` with a zero score.
    ///
    /// Nothing is spawned and no notifications are queued. The configured
    /// board size follows `board`.
    pub fn with_board(config: EngineConfig, board: Board, rng: R) -> Self {
        let config = config.with_board_size(board.side());
        Self {
            config,
            board,
            scoreboard: Scoreboard::new(),
            merge_happened: false,
            rng,
            notifications: Vec::new(),
        }
    }

    // === Game Lifecycle ===

    /// Start a new game on the configured board size.
    ///
    /// Resets the score (not the high score), empties the board and seeds
    /// it with two tiles.
    #[instrument(skip(self), fields(size = self.config.board_size.get()))]
    pub fn new_game(&mut self) -> Board {
        self.scoreboard
            .reset(self.config.flavor_threshold, &mut self.notifications);
        self.merge_happened = false;
        self.board = Board::filled(self.config.board_size, self.config.empty_tile());

        for _ in 0..2 {
            spawn(&mut self.board, &self.config, true, &mut self.rng);
        }

        debug!(high_score = self.scoreboard.high_score(), "new game");
        self.board.clone()
    }

    /// Start a new game on a board of a different size.
    ///
    /// A zero size is rejected before any state changes.
    pub fn new_game_sized(&mut self, size: usize) -> Result<Board, EngineError> {
        let side = NonZeroUsize::new(size)
            .ok_or(EngineError::InvalidBoardSize { size })
            .map_err(rejected)?;
        self.config.board_size = side;
        Ok(self.new_game())
    }

    // === Moves ===

    /// Play one move.
    #[instrument(skip(self))]
    pub fn apply(&mut self, direction: Direction) -> MoveOutcome {
        let score_before = self.scoreboard.score();

        let slid = slide(&self.board, direction, self.config.empty_tile());
        debug!(moved = slid.moved, merges = slid.merges, "slide pass");
        self.board = slid.board;
        self.merge_happened = slid.merged;

        let spawned = spawn(&mut self.board, &self.config, self.merge_happened, &mut self.rng);

        let specials = if self.merge_happened {
            self.merge_happened = false;
            resolve_specials(
                &mut self.board,
                &self.config,
                &mut self.scoreboard,
                &mut self.notifications,
            )
        } else {
            Vec::new()
        };

        MoveOutcome {
            board: self.board.clone(),
            direction,
            moved: slid.moved,
            merged: slid.merged,
            merges: slid.merges,
            spawned,
            specials,
            score_delta: self.scoreboard.score() - score_before,
        }
    }

    /// Play one move given as a numeric code (0=Up, 1=Down, 2=Left, 3=Right).
    ///
    /// An unknown code fails with `InvalidDirection` and changes nothing.
    pub fn apply_code(&mut self, code: u8) -> Result<MoveOutcome, EngineError> {
        let direction = Direction::try_from(code).map_err(rejected)?;
        Ok(self.apply(direction))
    }

    /// Play one move given by name (`"up"`, `"down"`, `"left"`, `"right"`).
    ///
    /// An unknown name fails with `InvalidDirection` and changes nothing.
    pub fn apply_named(&mut self, name: &str) -> Result<MoveOutcome, EngineError> {
        let direction = name.parse::<Direction>().map_err(rejected)?;
        Ok(self.apply(direction))
    }

    // === Queries ===

    /// The board a sweep in `direction` would produce, before spawning.
    #[must_use]
    pub fn preview(&self, direction: Direction) -> Board {
        slide(&self.board, direction, self.config.empty_tile()).board
    }

    /// Would a sweep in `direction` change the board?
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        slide(&self.board, direction, self.config.empty_tile()).moved
    }

    /// Directions in which a sweep changes the board.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    /// No direction changes the board.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.legal_directions().is_empty()
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the board for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.scoreboard.score()
    }

    #[must_use]
    pub fn high_score(&self) -> u64 {
        self.scoreboard.high_score()
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Notifications queued since the last drain.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

fn rejected(err: EngineError) -> EngineError {
    warn!(%err, "input rejected");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Position, ScriptedRng, Tile};

    fn scripted(board: Board, draws: impl IntoIterator<Item = usize>) -> BoardEngine<ScriptedRng> {
        BoardEngine::with_board(EngineConfig::default(), board, ScriptedRng::new(draws))
    }

    #[test]
    fn test_new_queues_instructions_then_score() {
        let mut engine = BoardEngine::seeded(1);
        assert_eq!(
            engine.drain_notifications(),
            vec![
                Notification::Instructions,
                Notification::Scoreboard {
                    score: 0,
                    high_score: 0
                },
            ]
        );
        assert!(engine.notifications().is_empty());
    }

    #[test]
    fn test_new_game_seeds_two_tiles() {
        for seed in 0..20 {
            let engine = BoardEngine::seeded(seed);
            assert_eq!(engine.board().occupied_count(), 2, "seed {seed}");
        }
    }

    #[test]
    fn test_new_game_with_scripted_draws() {
        // first: cell 0, black, value 2; second: cell 14 of 15 left, white, value 1
        let rng = ScriptedRng::new([0, 0, 0, 14, 1, 1]);
        let engine = BoardEngine::new(EngineConfig::default(), rng);

        assert_eq!(engine.board().get(Position::new(0, 0)), Tile::new(2, Color::BLACK));
        assert_eq!(engine.board().get(Position::new(3, 3)), Tile::new(1, Color::WHITE));
    }

    #[test]
    fn test_move_without_merge_may_skip_spawn() {
        let board = Board::from_values(
            &[vec![0, 1, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            Color::WHITE,
        )
        .unwrap();
        let mut engine = scripted(board, [0]);

        let outcome = engine.apply(Direction::Left);

        assert!(outcome.moved);
        assert!(!outcome.merged);
        assert_eq!(outcome.spawned, None);
        assert_eq!(outcome.board.values_row(0), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_merge_forces_spawn() {
        let board = Board::from_values(
            &[vec![1, 1, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            Color::WHITE,
        )
        .unwrap();
        // no coin after a merge: cell index, color, value
        let mut engine = scripted(board, [0, 1, 1]);

        let outcome = engine.apply(Direction::Left);

        assert!(outcome.merged);
        let spawned = outcome.spawned.unwrap();
        assert_eq!(spawned.position, Position::new(0, 1));
        assert_eq!(spawned.tile, Tile::new(1, Color::WHITE));
        assert_eq!(outcome.board.values_row(0), vec![2, 0, 0, 0]);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let board = Board::from_values(
            &[vec![1, 1, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]],
            Color::WHITE,
        )
        .unwrap();
        let engine = scripted(board.clone(), []);

        let preview = engine.preview(Direction::Left);
        assert_eq!(preview.values_row(0), vec![2, 0, 0, 0]);
        assert_eq!(engine.board(), &board);
    }

    #[test]
    fn test_legal_directions() {
        // a single tile in the bottom-left corner can only go up or right
        let mut board = Board::square(4).unwrap();
        board.set(Position::new(0, 0), Tile::new(1, Color::BLACK));
        let engine = scripted(board, []);

        assert_eq!(engine.legal_directions(), vec![Direction::Up, Direction::Right]);
        assert!(!engine.is_stuck());
    }

    #[test]
    fn test_stuck_board() {
        let board = Board::from_values(&[vec![1, 2], vec![2, 1]], Color::WHITE).unwrap();
        let engine = scripted(board, []);
        assert!(engine.is_stuck());
    }

    #[test]
    fn test_new_game_sized() {
        let mut engine = BoardEngine::seeded(3);
        let board = engine.new_game_sized(6).unwrap();
        assert_eq!(board.size(), 6);
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(engine.config().board_size.get(), 6);

        let before = engine.snapshot();
        assert_eq!(
            engine.new_game_sized(0),
            Err(EngineError::InvalidBoardSize { size: 0 })
        );
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_with_board_adopts_size() {
        let engine = scripted(Board::square(5).unwrap(), []);
        assert_eq!(engine.config().board_size.get(), 5);
        assert_eq!(engine.score(), 0);
        assert!(engine.notifications().is_empty());
    }
}
