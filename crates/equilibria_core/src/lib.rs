//! The `equilibria_core` crate is the mathematical engine behind the
//! Equilibria coursework tools. It computes equilibrium predictions for the
//! classic 2x2 and duopoly models covered in an intermediate micro sequence:
//! pure and mixed Nash, Cournot/Bertrand/Stackelberg, grim-trigger repeated
//! games, common-prior Bayesian games, and a two-state Markov-perfect setup.
//!
//! Every solver is a stateless pure function over an immutable parameter
//! struct. "No equilibrium under these parameters" is a typed absence
//! (`Option::None` or an empty `Vec`), never an error; `Err` is reserved for
//! malformed input such as non-finite payoffs or a prior outside `[0, 1]`.

pub mod bayesian;
pub mod markov;
pub mod nash;
pub mod oligopoly;
pub mod repeated;
pub mod types;
