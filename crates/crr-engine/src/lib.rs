//! # crr-engine
//!
//! Binomial-tree pricing engine for crrlib.
//!
//! # Overview
//!
//! * [`PricingEngine`] — derives the Cox-Ross-Rubinstein tree parameters
//!   from a contract and market data, builds the underlying-price lattice,
//!   and runs backward induction
//! * [`PricedTree`] — the option-value lattice produced by a pricing run;
//!   its root node is the fair price
//! * [`BreachMask`] — the set of lattice coordinates where the underlying
//!   has crossed a barrier
//!
//! The engine has exactly three algorithmic paths: vanilla induction,
//! knock-out induction, and the two-pass knock-in induction.  Exercise
//! style (European/American) is an orthogonal axis applied uniformly inside
//! whichever path runs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Barrier breach classification.
pub mod breach;

/// The pricing engine and its backward-induction routines.
pub mod engine;

pub use breach::BreachMask;
pub use engine::{PricedTree, PricingEngine};
