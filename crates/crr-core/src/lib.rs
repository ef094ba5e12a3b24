//! # crr-core
//!
//! Core types, limits, and error definitions for crrlib.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – primitive type aliases, the global size
//! limits, the error type, and the `ensure!` precondition macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Global limits ─────────────────────────────────────────────────────────────

/// Maximum number of time steps accepted by the pricing engine.
pub const MAX_STEPS: Size = 1000;

/// Maximum lattice depth: `MAX_STEPS` intervals plus the root level.
pub const MAX_DEPTH: Size = MAX_STEPS + 1;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
