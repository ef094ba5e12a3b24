//! # crrlib
//!
//! A Cox-Ross-Rubinstein binomial-lattice pricer for vanilla and barrier
//! options with European or American exercise.
//!
//! This crate is a **facade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `crr-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use crrlib::engine::PricingEngine;
//! use crrlib::instruments::{ExerciseStyle, OptionContract, OptionType};
//!
//! let contract =
//!     OptionContract::vanilla(OptionType::Put, 110.0, 1.0, ExerciseStyle::American)?;
//! let engine = PricingEngine::new(contract, 0.2, 100.0, 0.05, 3)?;
//! let tree = engine.build_tree()?;
//! assert!(tree.root_price() > 0.0);
//! # Ok::<(), crrlib::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, limits, and error definitions.
pub use crr_core as core;

/// Triangular lattices: the generic container and the underlying-price tree.
pub use crr_lattice as lattice;

/// Option contract definitions.
pub use crr_instruments as instruments;

/// The pricing engine and breach classification.
pub use crr_engine as engine;
