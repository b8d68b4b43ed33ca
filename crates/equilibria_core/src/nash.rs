//! Pure- and mixed-strategy Nash solvers for static 2x2 games.

use crate::types::{BimatrixGame, PayoffMatrix, StrategyProfile};
use serde::{Deserialize, Serialize};

/// Indifference denominators smaller than this magnitude are treated as
/// degenerate: no unique mixed solution exists, so the solver reports
/// absence rather than dividing by near-zero.
pub const DEGENERACY_EPS: f64 = 1e-10;

/// A mixed-strategy equilibrium: `p` is the probability player 1 plays Up,
/// `q` the probability player 2 plays Left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixedNash {
    pub p: f64,
    pub q: f64,
}

/// A weakly dominant strategy for one player. `index` is 0 for Up/Left and
/// 1 for Down/Right; `strict` marks strict dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantStrategy {
    pub index: usize,
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominanceReport {
    pub player1: Option<DominantStrategy>,
    pub player2: Option<DominantStrategy>,
}

/// Finds every cell where both players are weakly best-responding.
///
/// Ties count: a cell can be an equilibrium without being a strict best
/// response. Results come back in row-major scan order and may be empty.
pub fn find_pure_nash(game: &BimatrixGame) -> Vec<StrategyProfile> {
    let mut equilibria = Vec::new();
    for row in 0..2 {
        for col in 0..2 {
            let p1_best = game.player1.get(row, col) >= game.player1.get(1 - row, col);
            let p2_best = game.player2.get(row, col) >= game.player2.get(row, 1 - col);
            if p1_best && p2_best {
                equilibria.push(StrategyProfile { row, col });
            }
        }
    }
    equilibria
}

/// Solves the indifference conditions for a mixed equilibrium.
///
/// Returns `None` when either indifference denominator is degenerate or the
/// solved probabilities leave `[0, 1]`; only interior-or-boundary solutions
/// are reported, never a clamped approximation and never NaN.
pub fn find_mixed_nash(game: &BimatrixGame) -> Option<MixedNash> {
    let a = &game.player1;
    let b = &game.player2;

    let q_den = a.get(0, 0) - a.get(0, 1) - a.get(1, 0) + a.get(1, 1);
    let p_den = b.get(0, 0) - b.get(1, 0) - b.get(0, 1) + b.get(1, 1);
    if q_den.abs() < DEGENERACY_EPS || p_den.abs() < DEGENERACY_EPS {
        return None;
    }

    let q = (a.get(0, 0) - a.get(0, 1)) / q_den;
    let p = (b.get(0, 0) - b.get(1, 0)) / p_den;
    if !(0.0..=1.0).contains(&p) || !(0.0..=1.0).contains(&q) {
        return None;
    }

    Some(MixedNash { p, q })
}

/// Reports each player's dominant strategy, if one exists.
pub fn dominant_strategies(game: &BimatrixGame) -> DominanceReport {
    DominanceReport {
        player1: dominant_index(&game.player1, true),
        player2: dominant_index(&game.player2, false),
    }
}

fn dominant_index(payoffs: &PayoffMatrix, by_row: bool) -> Option<DominantStrategy> {
    let pick = |own: usize, other: usize| {
        if by_row {
            payoffs.get(own, other)
        } else {
            payoffs.get(other, own)
        }
    };
    for index in 0..2 {
        let rival = 1 - index;
        let edge0 = pick(index, 0) - pick(rival, 0);
        let edge1 = pick(index, 1) - pick(rival, 1);
        if edge0 > 0.0 && edge1 > 0.0 {
            return Some(DominantStrategy {
                index,
                strict: true,
            });
        }
        if edge0 >= 0.0 && edge1 >= 0.0 && (edge0 > 0.0 || edge1 > 0.0) {
            return Some(DominantStrategy {
                index,
                strict: false,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{dominant_strategies, find_mixed_nash, find_pure_nash};
    use crate::types::{BimatrixGame, PayoffMatrix, StrategyProfile};

    fn symmetric(cells: [[f64; 2]; 2]) -> BimatrixGame {
        let matrix = PayoffMatrix::new(cells);
        BimatrixGame::new(matrix, matrix)
    }

    fn game(p1: [[f64; 2]; 2], p2: [[f64; 2]; 2]) -> BimatrixGame {
        BimatrixGame::new(PayoffMatrix::new(p1), PayoffMatrix::new(p2))
    }

    #[test]
    fn prisoners_dilemma_has_mutual_defection_only() {
        let pd = symmetric([[3.0, 0.0], [5.0, 1.0]]);
        assert_eq!(
            find_pure_nash(&pd),
            vec![StrategyProfile { row: 1, col: 1 }]
        );
    }

    #[test]
    fn matching_pennies_has_no_pure_equilibrium() {
        let pennies = game(
            [[1.0, -1.0], [-1.0, 1.0]],
            [[-1.0, 1.0], [1.0, -1.0]],
        );
        assert!(find_pure_nash(&pennies).is_empty());
    }

    #[test]
    fn ties_are_included_as_equilibria() {
        let flat = symmetric([[1.0, 1.0], [1.0, 1.0]]);
        assert_eq!(find_pure_nash(&flat).len(), 4);
    }

    #[test]
    fn every_reported_cell_is_a_weak_best_response() {
        let g = game([[2.0, -1.0], [0.0, 3.0]], [[1.0, 4.0], [-2.0, 0.0]]);
        for cell in find_pure_nash(&g) {
            assert!(
                g.player1.get(cell.row, cell.col) >= g.player1.get(1 - cell.row, cell.col)
            );
            assert!(
                g.player2.get(cell.row, cell.col) >= g.player2.get(cell.row, 1 - cell.col)
            );
        }
    }

    #[test]
    fn matching_pennies_mixes_at_one_half() {
        let pennies = game(
            [[1.0, -1.0], [-1.0, 1.0]],
            [[-1.0, 1.0], [1.0, -1.0]],
        );
        let mixed = find_mixed_nash(&pennies).expect("expected a mixed equilibrium");
        assert!((mixed.p - 0.5).abs() < 1e-12);
        assert!((mixed.q - 0.5).abs() < 1e-12);
    }

    #[test]
    fn probabilities_outside_unit_interval_yield_none() {
        // q = (5 - 0) / (5 - 0 - 3 + 1) = 5/3 > 1.
        let g = game([[5.0, 0.0], [3.0, 1.0]], [[1.0, 0.0], [0.0, 1.0]]);
        assert!(find_mixed_nash(&g).is_none());
    }

    #[test]
    fn degenerate_denominator_yields_none_not_nan() {
        // Player 1's indifference denominator collapses to zero.
        let g = game([[1.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [0.0, 1.0]]);
        assert!(find_mixed_nash(&g).is_none());
    }

    #[test]
    fn prisoners_dilemma_dominance_is_strict_defection() {
        let pd = symmetric([[3.0, 0.0], [5.0, 1.0]]);
        let report = dominant_strategies(&pd);
        let d1 = report.player1.expect("player 1 should have a dominant strategy");
        let d2 = report.player2.expect("player 2 should have a dominant strategy");
        assert!(d1.strict && d1.index == 1);
        assert!(d2.strict && d2.index == 1);
    }

    #[test]
    fn weak_dominance_is_distinguished_from_strict() {
        // Up ties Down in the left column and beats it in the right one.
        let g = game([[2.0, 3.0], [2.0, 1.0]], [[0.0, 0.0], [0.0, 0.0]]);
        let report = dominant_strategies(&g);
        let d1 = report.player1.expect("player 1 should weakly dominate with Up");
        assert!(d1.index == 0 && !d1.strict);
        assert!(report.player2.is_none());
    }
}
