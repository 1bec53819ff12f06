//! Score tracking and the special-value rule.
//!
//! After a move that merged anything, every tile at the special value is
//! cleared. Only tiles in the neutral color score; any other color gets a
//! hint instead. Either way the chain stops there.

use serde::Serialize;
use tracing::{debug, warn};

use super::notification::Notification;
use crate::core::{Board, EngineConfig, Position, Tile};

/// Current and best score for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    score: u64,
    high_score: u64,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    /// Store a new score and queue what the player should see.
    ///
    /// A new high score takes precedence over the flavor message; the
    /// standing score line is always queued last.
    pub fn set(&mut self, score: u64, flavor_threshold: u64, out: &mut Vec<Notification>) {
        if score > self.high_score {
            self.high_score = score;
            out.push(Notification::NewHighScore {
                high_score: self.high_score,
            });
        } else if score > flavor_threshold {
            out.push(Notification::Flavor { score });
        }

        self.score = score;
        out.push(Notification::Scoreboard {
            score: self.score,
            high_score: self.high_score,
        });
    }

    /// Add points to the current score.
    pub fn award(&mut self, points: u64, flavor_threshold: u64, out: &mut Vec<Notification>) {
        self.set(self.score.saturating_add(points), flavor_threshold, out);
    }

    /// Back to zero for a new game. The high score survives.
    pub fn reset(&mut self, flavor_threshold: u64, out: &mut Vec<Notification>) {
        self.set(0, flavor_threshold, out);
    }
}

/// One special-value tile that was cleared.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpecialResolution {
    pub position: Position,
    /// The tile as it was before clearing.
    pub tile: Tile,
    /// True if the tile was neutral and earned points.
    pub scored: bool,
}

/// Clear every special-value tile, scoring the neutral ones.
///
/// Cells are scanned in storage order and each one is settled (score and
/// notifications included) before the next.
pub fn resolve_specials(
    board: &mut Board,
    config: &EngineConfig,
    scoreboard: &mut Scoreboard,
    out: &mut Vec<Notification>,
) -> Vec<SpecialResolution> {
    let special: Vec<(Position, Tile)> = board
        .iter()
        .filter(|(_, tile)| tile.value == config.special_value)
        .collect();

    let mut resolved = Vec::with_capacity(special.len());
    for (position, tile) in special {
        let scored = config.is_neutral(tile.color);
        if scored {
            debug!(%position, points = config.special_award, "neutral special tile scored");
            scoreboard.award(config.special_award, config.flavor_threshold, out);
        } else {
            warn!(%position, red = tile.color.r, "special tile is not neutral");
            out.push(Notification::MergeAnomaly {
                position,
                red: tile.color.r,
            });
        }

        board.set(position, config.empty_tile());
        resolved.push(SpecialResolution {
            position,
            tile,
            scored,
        });
    }
    resolved
}
