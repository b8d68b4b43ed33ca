//! Grim-trigger sustainability analysis for infinitely repeated 2x2 games.
//!
//! Cell (0, 0) of the stage game is the designated cooperative profile.
//! Under grim trigger, any deviation switches play to (1, 1) forever, so a
//! player weighs the one-shot deviation gain against the discounted stream
//! of punishment payoffs.

use crate::types::BimatrixGame;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// Minimum discount factor at which perpetual cooperation is
    /// subgame-perfect, clamped to [0, 1].
    pub delta_min: f64,
    /// Whether some discount factor strictly below full patience sustains
    /// cooperation.
    pub sustainable: bool,
}

/// One player's patience threshold: `coop` on the cooperative path, `dev`
/// from deviating alone for one period, `pun` per period thereafter.
///
/// Solves `coop/(1-d) = dev + d*pun/(1-d)`. A non-finite ratio (deviation
/// and punishment payoffs equal) means cooperation is never strictly
/// sustainable below full patience, reported as 1.
pub(crate) fn patience_threshold(coop: f64, dev: f64, pun: f64) -> f64 {
    if dev <= coop {
        return 0.0;
    }
    let delta = (dev - coop) / (dev - pun);
    if !delta.is_finite() {
        return 1.0;
    }
    delta.clamp(0.0, 1.0)
}

/// Minimum discount factor sustaining cooperation at (0, 0) under grim
/// trigger, taken as the binding (maximum) of the two players' thresholds.
pub fn repeated_delta_min(game: &BimatrixGame) -> ThresholdResult {
    let t1 = patience_threshold(
        game.player1.get(0, 0),
        game.player1.get(1, 0),
        game.player1.get(1, 1),
    );
    let t2 = patience_threshold(
        game.player2.get(0, 0),
        game.player2.get(0, 1),
        game.player2.get(1, 1),
    );
    let delta_min = t1.max(t2);
    ThresholdResult {
        delta_min,
        sustainable: delta_min < 1.0,
    }
}
