//! Shared data types for the 2x2 game solvers.

use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("payoff entry ({row}, {col}) is not finite")]
    NonFinitePayoff { row: usize, col: usize },
    #[error("prior probability must lie in [0, 1], got {0}")]
    PriorOutOfRange(f64),
}

/// One player's payoffs over the shared 2x2 decision grid.
///
/// Rows index player 1's strategy (Up = 0, Down = 1); columns index
/// player 2's strategy (Left = 0, Right = 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    pub cells: [[f64; 2]; 2],
}

impl PayoffMatrix {
    pub fn new(cells: [[f64; 2]; 2]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    pub fn as_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(
            self.cells[0][0],
            self.cells[0][1],
            self.cells[1][0],
            self.cells[1][1],
        )
    }

    pub fn from_matrix(m: &Matrix2<f64>) -> Self {
        Self {
            cells: [[m[(0, 0)], m[(0, 1)]], [m[(1, 0)], m[(1, 1)]]],
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for row in 0..2 {
            for col in 0..2 {
                if !self.cells[row][col].is_finite() {
                    return Err(InputError::NonFinitePayoff { row, col });
                }
            }
        }
        Ok(())
    }
}

/// The full parameter set for a static 2x2 game: both players' payoff
/// matrices over the shared decision grid. The presentation layer owns all
/// mutation; solvers only ever read this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BimatrixGame {
    pub player1: PayoffMatrix,
    pub player2: PayoffMatrix,
}

impl BimatrixGame {
    pub fn new(player1: PayoffMatrix, player2: PayoffMatrix) -> Self {
        Self { player1, player2 }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        self.player1.validate()?;
        self.player2.validate()
    }
}

/// A pure-strategy cell on the decision grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyProfile {
    pub row: usize,
    pub col: usize,
}
