//! Closed-form duopoly models under linear inverse demand `P = a - b*Q`
//! with constant marginal cost `c`.
//!
//! Cournot, Stackelberg, and the monopoly / perfect-competition benchmarks
//! all require downward-sloping demand with the intercept above marginal
//! cost (`b > 0` and `a > c`); outside that region they return `None`
//! rather than a nonsensical negative-quantity "solution". Bertrand is
//! defined for any cost level.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParams {
    /// Demand intercept.
    pub a: f64,
    /// Demand slope.
    pub b: f64,
    /// Constant marginal cost.
    pub c: f64,
}

impl MarketParams {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    fn has_interior_equilibrium(&self) -> bool {
        self.b > 0.0 && self.a > self.c
    }
}

/// Quantity-competition outcome for a two-firm market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OligopolyEquilibrium {
    pub q1: f64,
    pub q2: f64,
    pub total_quantity: f64,
    pub price: f64,
    pub profit1: f64,
    pub profit2: f64,
}

/// Price-competition outcome: both firms price at marginal cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BertrandEquilibrium {
    pub p1: f64,
    pub p2: f64,
    pub price: f64,
    pub profit1: f64,
    pub profit2: f64,
}

/// Single-quantity benchmark used for classroom comparison against the
/// duopoly outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OligopolyBenchmark {
    pub quantity: f64,
    pub price: f64,
    pub profit: f64,
}

/// Symmetric simultaneous quantity competition.
pub fn cournot(params: &MarketParams) -> Option<OligopolyEquilibrium> {
    if !params.has_interior_equilibrium() {
        return None;
    }
    let q = (params.a - params.c) / (3.0 * params.b);
    let price = params.a - 2.0 * params.b * q;
    let profit = (price - params.c) * q;
    Some(OligopolyEquilibrium {
        q1: q,
        q2: q,
        total_quantity: 2.0 * q,
        price,
        profit1: profit,
        profit2: profit,
    })
}

/// Homogeneous-good price competition: marginal-cost pricing, zero profit.
pub fn bertrand(c: f64) -> BertrandEquilibrium {
    BertrandEquilibrium {
        p1: c,
        p2: c,
        price: c,
        profit1: 0.0,
        profit2: 0.0,
    }
}

/// Sequential quantity competition with firm 1 as the leader.
pub fn stackelberg(params: &MarketParams) -> Option<OligopolyEquilibrium> {
    if !params.has_interior_equilibrium() {
        return None;
    }
    let q1 = (params.a - params.c) / (2.0 * params.b);
    let q2 = (params.a - params.c) / (4.0 * params.b);
    let total_quantity = q1 + q2;
    let price = params.a - params.b * total_quantity;
    Some(OligopolyEquilibrium {
        q1,
        q2,
        total_quantity,
        price,
        profit1: (price - params.c) * q1,
        profit2: (price - params.c) * q2,
    })
}

/// Single-firm profit maximization benchmark.
pub fn monopoly(params: &MarketParams) -> Option<OligopolyBenchmark> {
    if !params.has_interior_equilibrium() {
        return None;
    }
    let quantity = (params.a - params.c) / (2.0 * params.b);
    let price = params.a - params.b * quantity;
    Some(OligopolyBenchmark {
        quantity,
        price,
        profit: (price - params.c) * quantity,
    })
}

/// Price-taking benchmark: price at marginal cost, zero profit.
pub fn perfect_competition(params: &MarketParams) -> Option<OligopolyBenchmark> {
    if !params.has_interior_equilibrium() {
        return None;
    }
    Some(OligopolyBenchmark {
        quantity: (params.a - params.c) / params.b,
        price: params.c,
        profit: 0.0,
    })
}
