//! Free-function bindings for the parameterized models.
//!
//! These take flat numeric arguments straight from form inputs; matrices
//! arrive row-major as 4-element arrays. Parametrically undefined outcomes
//! serialize as `null`, matching how the pages render "no valid
//! equilibrium".

use crate::matrix_from_slice;
use equilibria_core::bayesian;
use equilibria_core::markov;
use equilibria_core::oligopoly::{self, MarketParams};
use equilibria_core::types::BimatrixGame;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

fn serialize<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn game_from_slices(player1: &[f64], player2: &[f64]) -> Result<BimatrixGame, JsValue> {
    Ok(BimatrixGame::new(
        matrix_from_slice(player1)?,
        matrix_from_slice(player2)?,
    ))
}

#[wasm_bindgen]
pub fn cournot(a: f64, b: f64, c: f64) -> Result<JsValue, JsValue> {
    serialize(&oligopoly::cournot(&MarketParams::new(a, b, c)))
}

#[wasm_bindgen]
pub fn bertrand(c: f64) -> Result<JsValue, JsValue> {
    serialize(&oligopoly::bertrand(c))
}

#[wasm_bindgen]
pub fn stackelberg(a: f64, b: f64, c: f64) -> Result<JsValue, JsValue> {
    serialize(&oligopoly::stackelberg(&MarketParams::new(a, b, c)))
}

#[wasm_bindgen]
pub fn monopoly(a: f64, b: f64, c: f64) -> Result<JsValue, JsValue> {
    serialize(&oligopoly::monopoly(&MarketParams::new(a, b, c)))
}

#[wasm_bindgen]
pub fn perfect_competition(a: f64, b: f64, c: f64) -> Result<JsValue, JsValue> {
    serialize(&oligopoly::perfect_competition(&MarketParams::new(a, b, c)))
}

/// Pure Nash of the expected game under a common prior on type A.
#[wasm_bindgen]
pub fn bayesian_nash(
    player1_type_a: &[f64],
    player2_type_a: &[f64],
    player1_type_b: &[f64],
    player2_type_b: &[f64],
    prior: f64,
) -> Result<JsValue, JsValue> {
    let type_a = game_from_slices(player1_type_a, player2_type_a)?;
    let type_b = game_from_slices(player1_type_b, player2_type_b)?;
    let equilibria = bayesian::bayesian_nash(&type_a, &type_b, prior)
        .map_err(|e| JsValue::from_str(&format!("Bayesian solve failed: {e}")))?;
    serialize(&equilibria)
}

/// Markov-perfect cooperation threshold for the two-state game; state 1 is
/// absorbing.
#[wasm_bindgen]
pub fn mpe_delta_min(
    player1_state0: &[f64],
    player2_state0: &[f64],
    player1_state1: &[f64],
    player2_state1: &[f64],
) -> Result<JsValue, JsValue> {
    let state0 = game_from_slices(player1_state0, player2_state0)?;
    let state1 = game_from_slices(player1_state1, player2_state1)?;
    serialize(&markov::mpe_delta_min(&state0, &state1))
}
