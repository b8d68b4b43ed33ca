//! WASM bridge exposing the Equilibria solvers to the browser UI.
//!
//! The `WasmGame` state container holds the bimatrix the user is editing;
//! the parameterized models (oligopoly, Bayesian, Markov) are exposed as
//! free functions taking flat numeric arguments. All results cross the
//! boundary as serde-serialized JS values.

pub mod game;
pub mod models;

pub use game::WasmGame;

use equilibria_core::types::PayoffMatrix;
use wasm_bindgen::prelude::*;

pub(crate) fn matrix_from_slice(cells: &[f64]) -> Result<PayoffMatrix, JsValue> {
    if cells.len() != 4 {
        return Err(JsValue::from_str(&format!(
            "Payoff matrix must have exactly 4 entries (row-major), got {}.",
            cells.len()
        )));
    }
    Ok(PayoffMatrix::new([
        [cells[0], cells[1]],
        [cells[2], cells[3]],
    ]))
}
