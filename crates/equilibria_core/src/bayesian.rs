//! Common-prior Bayesian games reduced to an expected bimatrix.
//!
//! Named restriction: this handles the symmetric-information structure only
//! (a common prior over two payoff types, no private signals conditioning
//! strategy choice), under which Bayesian equilibrium coincides with the
//! pure Nash of the expected game. Signaling games are out of scope.

use crate::nash::find_pure_nash;
use crate::types::{BimatrixGame, InputError, PayoffMatrix, StrategyProfile};
use anyhow::Result;

/// Expected game under a common prior: `E_i = prior*A_i + (1-prior)*B_i`.
pub fn expected_game(type_a: &BimatrixGame, type_b: &BimatrixGame, prior: f64) -> BimatrixGame {
    let mix = |a: &PayoffMatrix, b: &PayoffMatrix| {
        let expected = a.as_matrix() * prior + b.as_matrix() * (1.0 - prior);
        PayoffMatrix::from_matrix(&expected)
    };
    BimatrixGame::new(
        mix(&type_a.player1, &type_b.player1),
        mix(&type_a.player2, &type_b.player2),
    )
}

/// Pure Nash equilibria of the expected game under a common prior on
/// nature drawing type A.
///
/// Fails only on malformed input: non-finite payoffs or a prior outside
/// `[0, 1]`. An empty result means no equilibrium, not an error.
pub fn bayesian_nash(
    type_a: &BimatrixGame,
    type_b: &BimatrixGame,
    prior: f64,
) -> Result<Vec<StrategyProfile>> {
    type_a.validate()?;
    type_b.validate()?;
    if !prior.is_finite() || !(0.0..=1.0).contains(&prior) {
        return Err(InputError::PriorOutOfRange(prior).into());
    }
    Ok(find_pure_nash(&expected_game(type_a, type_b, prior)))
}

#[cfg(test)]
mod tests {
    use super::{bayesian_nash, expected_game};
    use crate::nash::find_pure_nash;
    use crate::types::{BimatrixGame, PayoffMatrix, StrategyProfile};

    fn symmetric(cells: [[f64; 2]; 2]) -> BimatrixGame {
        let matrix = PayoffMatrix::new(cells);
        BimatrixGame::new(matrix, matrix)
    }

    #[test]
    fn degenerate_prior_recovers_the_certain_type() {
        let pd = symmetric([[3.0, 0.0], [5.0, 1.0]]);
        let coordination = symmetric([[5.0, 0.0], [0.0, 1.0]]);
        assert_eq!(
            bayesian_nash(&pd, &coordination, 1.0).unwrap(),
            find_pure_nash(&pd)
        );
        assert_eq!(
            bayesian_nash(&pd, &coordination, 0.0).unwrap(),
            find_pure_nash(&coordination)
        );
    }

    #[test]
    fn interior_prior_mixes_the_stage_games() {
        let pd = symmetric([[3.0, 0.0], [5.0, 1.0]]);
        let coordination = symmetric([[5.0, 0.0], [0.0, 1.0]]);
        let expected = expected_game(&pd, &coordination, 0.5);
        assert!((expected.player1.get(0, 0) - 4.0).abs() < 1e-12);
        assert!((expected.player1.get(1, 0) - 2.5).abs() < 1e-12);

        // At even odds the cooperative cell becomes self-enforcing.
        assert_eq!(
            bayesian_nash(&pd, &coordination, 0.5).unwrap(),
            vec![StrategyProfile { row: 0, col: 0 }]
        );
    }

    #[test]
    fn prior_outside_unit_interval_is_an_input_error() {
        let g = symmetric([[1.0, 0.0], [0.0, 1.0]]);
        assert!(bayesian_nash(&g, &g, 1.5).is_err());
        assert!(bayesian_nash(&g, &g, -0.1).is_err());
        assert!(bayesian_nash(&g, &g, f64::NAN).is_err());
    }

    #[test]
    fn non_finite_payoffs_are_rejected() {
        let good = symmetric([[1.0, 0.0], [0.0, 1.0]]);
        let bad = symmetric([[f64::INFINITY, 0.0], [0.0, 1.0]]);
        assert!(bayesian_nash(&good, &bad, 0.5).is_err());
    }
}
