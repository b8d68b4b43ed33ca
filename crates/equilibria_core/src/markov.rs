//! Two-state Markov-perfect sustainability.
//!
//! State 0 is the cooperative phase; state 1 is absorbing and plays its
//! one-shot Nash forever once entered. The deviation calculus mirrors the
//! grim-trigger analysis, except the continuation payoff after a deviation
//! is the absorbing state's Nash payoff rather than the stage-game
//! punishment cell.

use crate::nash::find_pure_nash;
use crate::repeated::patience_threshold;
use crate::types::{BimatrixGame, StrategyProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkovThreshold {
    /// Minimum discount factor making cooperation at (0, 0) in state 0
    /// Markov-perfect, clamped to [0, 1].
    pub delta_min: f64,
    /// Player 1's per-period payoff in the absorbing state.
    pub v1: f64,
    /// Player 2's per-period payoff in the absorbing state.
    pub v2: f64,
}

/// Minimum discount factor for Markov-perfect cooperation in state 0,
/// reported with both players' absorbing-state continuation values.
pub fn mpe_delta_min(state0: &BimatrixGame, state1: &BimatrixGame) -> MarkovThreshold {
    // First pure Nash of the absorbing state in scan order; (Down, Right)
    // when it has none.
    let cell = find_pure_nash(state1)
        .into_iter()
        .next()
        .unwrap_or(StrategyProfile { row: 1, col: 1 });
    let v1 = state1.player1.get(cell.row, cell.col);
    let v2 = state1.player2.get(cell.row, cell.col);

    let t1 = patience_threshold(state0.player1.get(0, 0), state0.player1.get(1, 0), v1);
    let t2 = patience_threshold(state0.player2.get(0, 0), state0.player2.get(0, 1), v2);
    MarkovThreshold {
        delta_min: t1.max(t2),
        v1,
        v2,
    }
}
