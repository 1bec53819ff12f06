//! Notifications for the presentation side.
//!
//! The engine records what happened as structured events; turning them
//! into on-screen text is the host's job. `Display` gives the stock
//! wording for hosts that have no wording of their own.

use serde::Serialize;

use crate::core::Position;

/// Something the player should be told about.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Notification {
    /// Controls reminder, queued once when the engine starts.
    Instructions,

    /// The score just passed the previous high score.
    NewHighScore { high_score: u64 },

    /// The score passed the flavor threshold without setting a new high.
    Flavor { score: u64 },

    /// A tile reached the special value in a non-neutral color and was
    /// cleared without scoring.
    MergeAnomaly { position: Position, red: f32 },

    /// Standing score line; queued on every score change and reset.
    Scoreboard { score: u64, high_score: u64 },
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Instructions => {
                f.write_str("Use W, A, S, D to move, R to restart, Esc to quit.")
            }
            Notification::NewHighScore { high_score } => write!(f, "New High Score: {high_score}"),
            Notification::Flavor { .. } => f.write_str("You are 灰五 大師"),
            Notification::MergeAnomaly { red, .. } => {
                write!(f, "You have merged 5!, but the gray is {red}")
            }
            Notification::Scoreboard { score, high_score } => {
                write!(f, "Score: {score}, High Score: {high_score}")
            }
        }
    }
}
