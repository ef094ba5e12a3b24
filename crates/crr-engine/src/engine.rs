//! The Cox-Ross-Rubinstein pricing engine.
//!
//! The engine derives the tree parameters once at construction:
//!
//! ```text
//! Δt   = maturity / steps
//! up   = exp(σ √Δt)          down = 1 / up
//! q    = (exp(r Δt) − down) / (up − down)
//! ```
//!
//! builds the underlying-price lattice with depth `steps + 1`, and on
//! [`build_tree`](PricingEngine::build_tree) dispatches on the contract
//! tag to one of three backward-induction routines: vanilla, knock-out, or
//! the two-pass knock-in.

use crate::breach::BreachMask;
use crr_core::{ensure, errors::Result, DiscountFactor, Price, Rate, Real, Size, Time,
    Volatility, MAX_STEPS};
use crr_instruments::{BarrierDirection, ExerciseStyle, KnockType, OptionContract};
use crr_lattice::{Lattice, StockLattice};

/// The result of a pricing run.
///
/// The root of [`values`](PricedTree::values) is the option's fair price.
/// Knock-in pricing additionally retains the unconstrained "after" lattice
/// (the value the option would have as a plain vanilla contract), which the
/// constrained lattice borrows from at breached coordinates; it is kept as
/// a diagnostic artifact, not as the answer.
#[derive(Debug, Clone)]
pub struct PricedTree {
    values: Lattice,
    after: Option<Lattice>,
}

impl PricedTree {
    /// The option-value lattice.
    pub fn values(&self) -> &Lattice {
        &self.values
    }

    /// The unconstrained companion lattice from knock-in pricing, if any.
    pub fn after(&self) -> Option<&Lattice> {
        self.after.as_ref()
    }

    /// The option's fair price: the value at the root node.
    pub fn root_price(&self) -> Real {
        self.values.root()
    }
}

/// Prices a single option contract on a CRR binomial tree.
///
/// Each engine instance owns its lattices exclusively; a pricing run is a
/// pure `O(steps²)` computation with no I/O and no shared state.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    contract: OptionContract,
    r: Rate,
    steps: Size,
    dt: Time,
    up: Real,
    down: Real,
    q: Real,
    discount: DiscountFactor,
    stock: StockLattice,
}

impl PricingEngine {
    /// Create an engine for the given contract and market parameters.
    ///
    /// Fails with `InvalidParameter` when:
    /// * `steps` is outside `[1, MAX_STEPS]`;
    /// * the derived factors are degenerate (`s0 <= 0`, or `up <= 1`
    ///   because `sigma <= 0` or `maturity == 0`);
    /// * the risk-neutral probability falls outside `[0, 1]`, which signals
    ///   an arbitrage inconsistency between rate, volatility, and step size;
    /// * a barrier does not lie strictly beyond the spot on its own side
    ///   (above for an up barrier, below for a down barrier) — otherwise
    ///   the option is trivially already knocked.
    pub fn new(
        contract: OptionContract,
        sigma: Volatility,
        s0: Price,
        r: Rate,
        steps: Size,
    ) -> Result<Self> {
        ensure!(
            (1..=MAX_STEPS).contains(&steps),
            "steps must be in [1, {MAX_STEPS}], got {steps}"
        );

        let dt = contract.maturity() / steps as Real;
        let up = (sigma * dt.sqrt()).exp();
        let down = 1.0 / up;
        let stock = StockLattice::new(steps + 1, s0, up, down)?;

        let q = ((r * dt).exp() - down) / (up - down);
        ensure!(
            (0.0..=1.0).contains(&q),
            "risk-neutral probability {q} outside [0, 1]; \
             rate, volatility, and step size are arbitrage-inconsistent"
        );

        if let Some(spec) = contract.barrier_spec() {
            match spec.direction {
                BarrierDirection::Up => ensure!(
                    spec.level > s0,
                    "up barrier {} must be above the initial price {s0}",
                    spec.level
                ),
                BarrierDirection::Down => ensure!(
                    spec.level < s0,
                    "down barrier {} must be below the initial price {s0}",
                    spec.level
                ),
            }
        }

        Ok(Self {
            contract,
            r,
            steps,
            dt,
            up,
            down,
            q,
            discount: (-r * dt).exp(),
            stock,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The contract being priced.
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Risk-free rate.
    pub fn rate(&self) -> Rate {
        self.r
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Up factor.
    pub fn up_factor(&self) -> Real {
        self.up
    }

    /// Down factor.
    pub fn down_factor(&self) -> Real {
        self.down
    }

    /// Risk-neutral up-move probability.
    pub fn risk_neutral_probability(&self) -> Real {
        self.q
    }

    /// The underlying-price lattice (depth `steps + 1`).
    pub fn stock_lattice(&self) -> &StockLattice {
        &self.stock
    }

    // ── Pricing ──────────────────────────────────────────────────────────

    /// Build the option-value lattice.
    ///
    /// Dispatches on the contract tag: vanilla contracts run plain backward
    /// induction, knock-out contracts zero out breached coordinates, and
    /// knock-in contracts run the two-pass induction.  Deterministic given
    /// the engine state.
    pub fn build_tree(&self) -> Result<PricedTree> {
        match self.contract.barrier_spec() {
            None => Ok(PricedTree {
                values: self.vanilla_tree()?,
                after: None,
            }),
            Some(spec) => {
                let mask = BreachMask::classify(&self.stock, spec.level, spec.direction);
                match spec.knock {
                    KnockType::Out => Ok(PricedTree {
                        values: self.knock_out_tree(&mask)?,
                        after: None,
                    }),
                    KnockType::In => {
                        let (values, after) = self.knock_in_trees(&mask)?;
                        Ok(PricedTree {
                            values,
                            after: Some(after),
                        })
                    }
                }
            }
        }
    }

    /// Vanilla induction: terminal payoffs, then discounted expectation
    /// (with the early-exercise max for American style) down to the root.
    fn vanilla_tree(&self) -> Result<Lattice> {
        let mut tree = Lattice::new(self.steps + 1)?;
        self.set_terminal_payoffs(&mut tree);
        self.roll_back(&mut tree);
        Ok(tree)
    }

    /// Knock-out induction: a breached coordinate is an absorbing zero.
    fn knock_out_tree(&self, mask: &BreachMask) -> Result<Lattice> {
        let mut tree = Lattice::new(self.steps + 1)?;
        self.set_terminal_payoffs(&mut tree);

        let last = tree.depth() - 1;
        for h in 0..=last {
            if mask.is_breached(last, h) {
                tree.set_node(last, h, 0.0);
            }
        }
        self.roll_back_with_barrier(&mut tree, mask, None);
        Ok(tree)
    }

    /// Two-pass knock-in induction.
    ///
    /// Pass one builds the unconstrained "after" lattice by vanilla
    /// induction.  Pass two builds the constrained "before" lattice: every
    /// breached coordinate (terminal level included) takes the after value
    /// — beyond the barrier the option is already alive, so its value is
    /// the unconstrained one — while non-breached terminal nodes stay at
    /// zero, since a path that reaches maturity without touching the
    /// barrier never activates.  Returns `(before, after)`.
    fn knock_in_trees(&self, mask: &BreachMask) -> Result<(Lattice, Lattice)> {
        let after = self.vanilla_tree()?;
        let mut before = Lattice::new(self.steps + 1)?;

        for d in 0..before.depth() {
            for h in 0..=d {
                if mask.is_breached(d, h) {
                    before.set_node(d, h, after.node(d, h));
                }
            }
        }
        self.roll_back_with_barrier(&mut before, mask, Some(&after));
        Ok((before, after))
    }

    /// Fill the target lattice's terminal level with the contract payoff
    /// applied elementwise to the terminal underlying prices.
    fn set_terminal_payoffs(&self, tree: &mut Lattice) {
        let last = tree.depth() - 1;
        for (h, &s) in self.stock.terminal().iter().enumerate() {
            tree.set_node(last, h, self.contract.payoff(s));
        }
    }

    /// Discounted risk-neutral expectation over the two children of
    /// `(depth, height)`.
    fn hold_value(&self, tree: &Lattice, depth: Size, height: Size) -> Real {
        self.discount
            * (self.q * tree.node(depth + 1, height + 1)
                + (1.0 - self.q) * tree.node(depth + 1, height))
    }

    /// Hold value, or the better of hold and immediate exercise for
    /// American style.  The max is evaluated at every node.
    fn node_value(&self, tree: &Lattice, depth: Size, height: Size) -> Real {
        let hold = self.hold_value(tree, depth, height);
        match self.contract.style() {
            ExerciseStyle::European => hold,
            ExerciseStyle::American => {
                hold.max(self.contract.payoff(self.stock.node(depth, height)))
            }
        }
    }

    /// Roll back from the second-to-last level to the root.
    fn roll_back(&self, tree: &mut Lattice) {
        for d in (0..tree.depth() - 1).rev() {
            for h in 0..=d {
                let value = self.node_value(tree, d, h);
                tree.set_node(d, h, value);
            }
        }
    }

    /// Same roll-back, but breached coordinates are fixed: zero for
    /// knock-out, the after-lattice value for knock-in.
    fn roll_back_with_barrier(
        &self,
        tree: &mut Lattice,
        mask: &BreachMask,
        after: Option<&Lattice>,
    ) {
        for d in (0..tree.depth() - 1).rev() {
            for h in 0..=d {
                let value = if mask.is_breached(d, h) {
                    after.map_or(0.0, |a| a.node(d, h))
                } else {
                    self.node_value(tree, d, h)
                };
                tree.set_node(d, h, value);
            }
        }
    }
}
