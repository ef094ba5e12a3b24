//! Option contract records.
//!
//! A contract is an immutable record validated at construction; the pricing
//! engine consumes it read-only.  Vanilla and barrier contracts differ only
//! in the extra geometric parameters carried by [`BarrierSpec`], not in the
//! payoff itself, and the engine dispatches on the [`OptionContract`] tag.

use crate::payoff::{OptionType, PlainVanillaPayoff};
use crr_core::{ensure, errors::Result, Price, Real, Time};
use std::fmt;

/// When an option may be exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseStyle {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time up to expiry.
    American,
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}

/// Which side of the spot the barrier sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarrierDirection {
    /// Barrier above the spot; breached when the underlying rises to it.
    Up,
    /// Barrier below the spot; breached when the underlying falls to it.
    Down,
}

impl fmt::Display for BarrierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierDirection::Up => write!(f, "up"),
            BarrierDirection::Down => write!(f, "down"),
        }
    }
}

/// Whether touching the barrier activates or extinguishes the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnockType {
    /// The option only comes alive once the barrier is touched.
    In,
    /// The option dies permanently once the barrier is touched.
    Out,
}

impl fmt::Display for KnockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnockType::In => write!(f, "in"),
            KnockType::Out => write!(f, "out"),
        }
    }
}

/// Barrier parameters attached to a barrier contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarrierSpec {
    /// The barrier level (non-negative).
    pub level: Price,
    /// Which side of the spot the barrier sits on.
    pub direction: BarrierDirection,
    /// Knock-in or knock-out.
    pub knock: KnockType,
}

/// Terms common to every contract: payoff, maturity, and exercise style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractTerms {
    payoff: PlainVanillaPayoff,
    maturity: Time,
    style: ExerciseStyle,
}

impl ContractTerms {
    fn new(
        option_type: OptionType,
        strike: Price,
        maturity: Time,
        style: ExerciseStyle,
    ) -> Result<Self> {
        ensure!(strike >= 0.0, "strike must be non-negative, got {strike}");
        ensure!(
            maturity >= 0.0,
            "maturity must be non-negative, got {maturity}"
        );
        Ok(Self {
            payoff: PlainVanillaPayoff::new(option_type, strike),
            maturity,
            style,
        })
    }

    /// The payoff function.
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// Time to maturity, in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// The exercise style.
    pub fn style(&self) -> ExerciseStyle {
        self.style
    }
}

/// An option contract: plain vanilla, or vanilla plus a single barrier.
///
/// The tag is what the pricing engine's dispatch switches on.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionContract {
    /// A plain vanilla option.
    Vanilla(ContractTerms),
    /// A single-barrier option.
    Barrier {
        /// The vanilla terms the barrier is attached to.
        terms: ContractTerms,
        /// The barrier parameters.
        barrier: BarrierSpec,
    },
}

impl OptionContract {
    /// Create a vanilla contract.
    ///
    /// Fails with `InvalidParameter` if `strike < 0` or `maturity < 0`.
    pub fn vanilla(
        option_type: OptionType,
        strike: Price,
        maturity: Time,
        style: ExerciseStyle,
    ) -> Result<Self> {
        Ok(OptionContract::Vanilla(ContractTerms::new(
            option_type,
            strike,
            maturity,
            style,
        )?))
    }

    /// Create a single-barrier contract.
    ///
    /// Fails with `InvalidParameter` if `strike < 0`, `maturity < 0`, or
    /// `level < 0`.  Consistency of the barrier with the spot price is
    /// checked by the pricing engine, which knows the spot.
    pub fn barrier(
        option_type: OptionType,
        strike: Price,
        maturity: Time,
        style: ExerciseStyle,
        level: Price,
        direction: BarrierDirection,
        knock: KnockType,
    ) -> Result<Self> {
        ensure!(level >= 0.0, "barrier must be non-negative, got {level}");
        Ok(OptionContract::Barrier {
            terms: ContractTerms::new(option_type, strike, maturity, style)?,
            barrier: BarrierSpec {
                level,
                direction,
                knock,
            },
        })
    }

    /// The terms shared by both variants.
    pub fn terms(&self) -> &ContractTerms {
        match self {
            OptionContract::Vanilla(terms) => terms,
            OptionContract::Barrier { terms, .. } => terms,
        }
    }

    /// The barrier parameters, if any.
    pub fn barrier_spec(&self) -> Option<&BarrierSpec> {
        match self {
            OptionContract::Vanilla(_) => None,
            OptionContract::Barrier { barrier, .. } => Some(barrier),
        }
    }

    /// Terminal payoff for the given underlying price.
    pub fn payoff(&self, price: Price) -> Real {
        self.terms().payoff.value(price)
    }

    /// The strike price.
    pub fn strike(&self) -> Price {
        self.terms().payoff.strike
    }

    /// Time to maturity, in years.
    pub fn maturity(&self) -> Time {
        self.terms().maturity()
    }

    /// The exercise style.
    pub fn style(&self) -> ExerciseStyle {
        self.terms().style()
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.terms().payoff.option_type
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionContract::Vanilla(terms) => {
                write!(f, "{} {}", terms.style, terms.payoff)
            }
            OptionContract::Barrier { terms, barrier } => {
                write!(
                    f,
                    "{} {}-and-{} {}, barrier {}",
                    terms.style, barrier.direction, barrier.knock, terms.payoff, barrier.level
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vanilla_construction_and_accessors() {
        let contract = OptionContract::vanilla(
            OptionType::Put,
            110.0,
            1.0,
            ExerciseStyle::American,
        )
        .unwrap();
        assert_eq!(contract.strike(), 110.0);
        assert_eq!(contract.maturity(), 1.0);
        assert_eq!(contract.style(), ExerciseStyle::American);
        assert_eq!(contract.option_type(), OptionType::Put);
        assert!(contract.barrier_spec().is_none());
        assert!((contract.payoff(95.0) - 15.0).abs() < 1e-15);
    }

    #[test]
    fn negative_strike_or_maturity_is_rejected() {
        assert!(
            OptionContract::vanilla(OptionType::Call, -1.0, 1.0, ExerciseStyle::European)
                .is_err()
        );
        assert!(
            OptionContract::vanilla(OptionType::Call, 100.0, -0.5, ExerciseStyle::European)
                .is_err()
        );
    }

    #[test]
    fn barrier_construction() {
        let contract = OptionContract::barrier(
            OptionType::Call,
            100.0,
            1.0,
            ExerciseStyle::European,
            130.0,
            BarrierDirection::Up,
            KnockType::Out,
        )
        .unwrap();
        let spec = contract.barrier_spec().unwrap();
        assert_eq!(spec.level, 130.0);
        assert_eq!(spec.direction, BarrierDirection::Up);
        assert_eq!(spec.knock, KnockType::Out);
    }

    #[test]
    fn negative_barrier_is_rejected() {
        assert!(OptionContract::barrier(
            OptionType::Call,
            100.0,
            1.0,
            ExerciseStyle::European,
            -10.0,
            BarrierDirection::Up,
            KnockType::Out,
        )
        .is_err());
    }

    #[test]
    fn display_descriptions() {
        let vanilla =
            OptionContract::vanilla(OptionType::Put, 110.0, 1.0, ExerciseStyle::American)
                .unwrap();
        assert_eq!(vanilla.to_string(), "American Put @ 110");

        let barrier = OptionContract::barrier(
            OptionType::Call,
            100.0,
            1.0,
            ExerciseStyle::European,
            130.0,
            BarrierDirection::Up,
            KnockType::Out,
        )
        .unwrap();
        assert_eq!(
            barrier.to_string(),
            "European up-and-out Call @ 100, barrier 130"
        );
    }
}
