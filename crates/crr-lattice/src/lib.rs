//! # crr-lattice
//!
//! Triangular binomial lattices for crrlib.
//!
//! # Overview
//!
//! * [`Lattice`] — the generic triangular container: `depth` levels, level
//!   `i` holding `i + 1` values, with a diagnostic [`Display`] dump
//! * [`StockLattice`] — a [`Lattice`] filled with underlying-asset prices
//!   from the multiplicative recombining-tree formula
//!
//! [`Display`]: std::fmt::Display

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The generic triangular lattice container.
pub mod lattice;

/// The underlying-price lattice.
pub mod stock;

pub use lattice::Lattice;
pub use stock::StockLattice;
