//! Bimatrix state container for the static-game and repeated-game pages.

use crate::matrix_from_slice;
use equilibria_core::nash::{dominant_strategies, find_mixed_nash, find_pure_nash};
use equilibria_core::repeated::repeated_delta_min;
use equilibria_core::types::BimatrixGame;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// The presentation layer's handle on the game being edited. Setters own
/// all mutation; every solve method recomputes purely from current state.
#[wasm_bindgen]
pub struct WasmGame {
    game: BimatrixGame,
}

#[wasm_bindgen]
impl WasmGame {
    /// Builds a game from both players' payoff matrices in row-major order.
    #[wasm_bindgen(constructor)]
    pub fn new(player1: &[f64], player2: &[f64]) -> Result<WasmGame, JsValue> {
        console_error_panic_hook::set_once();

        let game = BimatrixGame::new(matrix_from_slice(player1)?, matrix_from_slice(player2)?);
        game.validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid game: {e}")))?;
        Ok(WasmGame { game })
    }

    /// Overwrites a single payoff entry. `player` is 1 or 2; `row` and
    /// `col` index the 2x2 grid.
    pub fn set_payoff(
        &mut self,
        player: u32,
        row: u32,
        col: u32,
        value: f64,
    ) -> Result<(), JsValue> {
        if row > 1 || col > 1 {
            return Err(JsValue::from_str("Row and column indices must be 0 or 1."));
        }
        if !value.is_finite() {
            return Err(JsValue::from_str("Payoff entries must be finite."));
        }
        let matrix = match player {
            1 => &mut self.game.player1,
            2 => &mut self.game.player2,
            _ => return Err(JsValue::from_str("Player must be 1 or 2.")),
        };
        matrix.cells[row as usize][col as usize] = value;
        Ok(())
    }

    /// Replaces one player's whole matrix, row-major.
    pub fn set_matrix(&mut self, player: u32, cells: &[f64]) -> Result<(), JsValue> {
        let replacement = matrix_from_slice(cells)?;
        replacement
            .validate()
            .map_err(|e| JsValue::from_str(&format!("Invalid matrix: {e}")))?;
        match player {
            1 => self.game.player1 = replacement,
            2 => self.game.player2 = replacement,
            _ => return Err(JsValue::from_str("Player must be 1 or 2.")),
        }
        Ok(())
    }

    /// All pure-strategy Nash cells, as an array of `{row, col}`.
    pub fn solve_pure_nash(&self) -> Result<JsValue, JsValue> {
        serialize(&find_pure_nash(&self.game))
    }

    /// The mixed equilibrium `{p, q}`, or `null` when none exists in the
    /// unit square.
    pub fn solve_mixed_nash(&self) -> Result<JsValue, JsValue> {
        serialize(&find_mixed_nash(&self.game))
    }

    /// Each player's dominant strategy, when one exists.
    pub fn solve_dominance(&self) -> Result<JsValue, JsValue> {
        serialize(&dominant_strategies(&self.game))
    }

    /// Grim-trigger sustainability threshold `{delta_min, sustainable}` for
    /// the infinitely repeated stage game.
    pub fn solve_repeated_delta_min(&self) -> Result<JsValue, JsValue> {
        serialize(&repeated_delta_min(&self.game))
    }
}

fn serialize<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
