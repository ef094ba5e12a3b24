//! The underlying-price lattice.
//!
//! Fills a [`Lattice`] with the multiplicative recombining-tree formula
//! `S(d, h) = S0 · up^h · down^(d−h)`.  The result is a pure function of
//! the inputs and is never mutated after construction.

use crate::Lattice;
use crr_core::{ensure, errors::Result, Real, Size, MAX_DEPTH};

/// A lattice of underlying-asset prices.
///
/// Node `(d, h)` holds the price after `h` up-moves and `d − h` down-moves.
/// At any fixed depth the prices are strictly increasing in height, which
/// downstream barrier classification relies on.
///
/// Conventionally `down = 1 / up`; this type only enforces the individual
/// bounds (`up > 1`, `down < 1`) — the relationship between the two factors
/// is the pricing engine's responsibility.
#[derive(Debug, Clone)]
pub struct StockLattice {
    s0: Real,
    up: Real,
    down: Real,
    lattice: Lattice,
}

impl StockLattice {
    /// Build the price lattice.
    ///
    /// Fails with `InvalidParameter` unless `1 <= depth <= MAX_DEPTH`,
    /// `s0 > 0`, `up > 1`, and `down < 1`.
    pub fn new(depth: Size, s0: Real, up: Real, down: Real) -> Result<Self> {
        ensure!(
            (1..=MAX_DEPTH).contains(&depth),
            "depth must be in [1, {MAX_DEPTH}], got {depth}"
        );
        ensure!(s0 > 0.0, "initial price must be positive, got {s0}");
        ensure!(up > 1.0, "up factor must be greater than 1, got {up}");
        ensure!(down < 1.0, "down factor must be less than 1, got {down}");

        let mut lattice = Lattice::new(depth)?;
        for d in 0..depth {
            for h in 0..=d {
                lattice.set_node(d, h, s0 * up.powi(h as i32) * down.powi((d - h) as i32));
            }
        }
        Ok(Self {
            s0,
            up,
            down,
            lattice,
        })
    }

    /// Initial price (the root node value).
    pub fn s0(&self) -> Real {
        self.s0
    }

    /// Up factor.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Number of levels.
    pub fn depth(&self) -> Size {
        self.lattice.depth()
    }

    /// Price at node `(depth, height)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the triangle.
    pub fn node(&self, depth: Size, height: Size) -> Real {
        self.lattice.node(depth, height)
    }

    /// All prices at the given level, ordered by height.
    pub fn level(&self, depth: Size) -> &[Real] {
        self.lattice.level(depth)
    }

    /// The terminal (maturity) prices.
    pub fn terminal(&self) -> &[Real] {
        self.lattice.terminal()
    }

    /// Read-only view of the underlying lattice, e.g. for display.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn node_formula_round_trip() {
        let stock = StockLattice::new(3, 100.0, 1.1, 0.9).unwrap();
        assert_relative_eq!(stock.node(0, 0), 100.0);
        assert_relative_eq!(stock.node(1, 0), 90.0, max_relative = 1e-12);
        assert_relative_eq!(stock.node(1, 1), 110.0, max_relative = 1e-12);
        // Pinned from the formula: [100·0.9², 100·1.1·0.9, 100·1.1²]
        let level2 = stock.level(2);
        assert_relative_eq!(level2[0], 81.0, max_relative = 1e-12);
        assert_relative_eq!(level2[1], 99.0, max_relative = 1e-12);
        assert_relative_eq!(level2[2], 121.0, max_relative = 1e-12);
    }

    #[test]
    fn identical_parameters_build_identical_lattices() {
        let a = StockLattice::new(5, 50.0, 1.2, 0.8).unwrap();
        let b = StockLattice::new(5, 50.0, 1.2, 0.8).unwrap();
        assert_eq!(a.lattice(), b.lattice());
    }

    #[test]
    fn depth_one_holds_only_the_spot() {
        let stock = StockLattice::new(1, 73.5, 1.05, 0.95).unwrap();
        assert_eq!(stock.terminal(), &[73.5]);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(StockLattice::new(3, 0.0, 1.1, 0.9).is_err());
        assert!(StockLattice::new(3, -5.0, 1.1, 0.9).is_err());
        assert!(StockLattice::new(3, 100.0, 1.0, 0.9).is_err());
        assert!(StockLattice::new(3, 100.0, 1.1, 1.0).is_err());
        assert!(StockLattice::new(0, 100.0, 1.1, 0.9).is_err());
    }

    proptest! {
        /// At any fixed depth, prices are strictly increasing in height.
        #[test]
        fn prices_increase_with_height(
            s0 in 1.0..500.0_f64,
            up in 1.01..2.0_f64,
            depth in 2..30_usize,
        ) {
            let stock = StockLattice::new(depth, s0, up, 1.0 / up).unwrap();
            for d in 1..depth {
                let level = stock.level(d);
                for h in 1..level.len() {
                    prop_assert!(level[h] > level[h - 1]);
                }
            }
        }
    }
}
