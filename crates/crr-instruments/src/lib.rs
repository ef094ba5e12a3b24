//! # crr-instruments
//!
//! Option contract definitions for crrlib.
//!
//! # Overview
//!
//! * [`OptionType`] / [`PlainVanillaPayoff`] — call/put terminal payoffs
//! * [`ExerciseStyle`] — European or American exercise
//! * [`OptionContract`] — the tagged contract record consumed by the pricing
//!   engine, either [`Vanilla`](OptionContract::Vanilla) or
//!   [`Barrier`](OptionContract::Barrier)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Call/put payoffs.
pub mod payoff;

/// Contract records and their validation.
pub mod contract;

pub use contract::{BarrierDirection, BarrierSpec, ContractTerms, ExerciseStyle, KnockType,
    OptionContract};
pub use payoff::{OptionType, PlainVanillaPayoff};
