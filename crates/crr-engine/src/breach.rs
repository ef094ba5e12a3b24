//! Barrier breach classification.
//!
//! A node is breached when the underlying price has crossed the barrier:
//! `S >= level` for an up barrier, `S <= level` for a down barrier.  Because
//! prices are strictly increasing in height at any fixed depth, the breached
//! heights at each level form a contiguous suffix (up) or prefix (down), so
//! the whole set is represented by one boundary index per level and
//! membership is O(1).

use crr_instruments::BarrierDirection;
use crr_lattice::StockLattice;
use crr_core::{Price, Size};

/// The set of lattice coordinates where the underlying has crossed the
/// barrier, computed once per pricing run.
#[derive(Debug, Clone)]
pub struct BreachMask {
    direction: BarrierDirection,
    /// Per level: the first breached height (up barrier) or the last
    /// breached height (down barrier); `None` when nothing at that level
    /// is breached.
    boundary: Vec<Option<Size>>,
}

impl BreachMask {
    /// Classify every node of the price lattice against the barrier.
    pub fn classify(stock: &StockLattice, level: Price, direction: BarrierDirection) -> Self {
        let boundary = (0..stock.depth())
            .map(|d| {
                let prices = stock.level(d);
                match direction {
                    BarrierDirection::Up => prices.iter().position(|&s| s >= level),
                    BarrierDirection::Down => prices.iter().rposition(|&s| s <= level),
                }
            })
            .collect();
        Self {
            direction,
            boundary,
        }
    }

    /// Whether node `(depth, height)` has crossed the barrier.
    pub fn is_breached(&self, depth: Size, height: Size) -> bool {
        match (self.direction, self.boundary[depth]) {
            (BarrierDirection::Up, Some(first)) => height >= first,
            (BarrierDirection::Down, Some(last)) => height <= last,
            (_, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn brute_force(
        stock: &StockLattice,
        level: f64,
        direction: BarrierDirection,
        d: usize,
        h: usize,
    ) -> bool {
        match direction {
            BarrierDirection::Up => stock.node(d, h) >= level,
            BarrierDirection::Down => stock.node(d, h) <= level,
        }
    }

    #[test]
    fn up_barrier_marks_a_suffix_of_heights() {
        let stock = StockLattice::new(4, 100.0, 1.1, 1.0 / 1.1).unwrap();
        let mask = BreachMask::classify(&stock, 115.0, BarrierDirection::Up);
        // Level 2 prices: [82.6, 100, 121]; only the top node crosses 115.
        assert!(!mask.is_breached(2, 0));
        assert!(!mask.is_breached(2, 1));
        assert!(mask.is_breached(2, 2));
        // Root never crosses an up barrier above the spot.
        assert!(!mask.is_breached(0, 0));
    }

    #[test]
    fn down_barrier_marks_a_prefix_of_heights() {
        let stock = StockLattice::new(4, 100.0, 1.1, 1.0 / 1.1).unwrap();
        let mask = BreachMask::classify(&stock, 85.0, BarrierDirection::Down);
        // Level 2 prices: [82.6, 100, 121]; only the bottom node is below 85.
        assert!(mask.is_breached(2, 0));
        assert!(!mask.is_breached(2, 1));
        assert!(!mask.is_breached(2, 2));
    }

    #[test]
    fn barrier_on_a_node_counts_as_breached() {
        // up = 1.25, down = 0.8: node (2, 2) is exactly 156.25
        let stock = StockLattice::new(3, 100.0, 1.25, 0.8).unwrap();
        let mask = BreachMask::classify(&stock, 156.25, BarrierDirection::Up);
        assert!(mask.is_breached(2, 2));
    }

    proptest! {
        /// The boundary representation agrees with checking every node, and
        /// breached heights are monotone: for an up barrier, breaching at
        /// `h` implies breaching at `h + 1`; for a down barrier, at `h − 1`.
        #[test]
        fn matches_brute_force_and_is_monotone(
            s0 in 10.0..200.0_f64,
            up in 1.02..1.6_f64,
            barrier_ratio in 0.4..2.5_f64,
            depth in 2..40_usize,
            up_direction in proptest::bool::ANY,
        ) {
            let stock = StockLattice::new(depth, s0, up, 1.0 / up).unwrap();
            let level = s0 * barrier_ratio;
            let direction = if up_direction {
                BarrierDirection::Up
            } else {
                BarrierDirection::Down
            };
            let mask = BreachMask::classify(&stock, level, direction);
            for d in 0..depth {
                for h in 0..=d {
                    prop_assert_eq!(
                        mask.is_breached(d, h),
                        brute_force(&stock, level, direction, d, h)
                    );
                    if mask.is_breached(d, h) {
                        match direction {
                            BarrierDirection::Up if h < d => {
                                prop_assert!(mask.is_breached(d, h + 1));
                            }
                            BarrierDirection::Down if h > 0 => {
                                prop_assert!(mask.is_breached(d, h - 1));
                            }
                            _ => {}
                        }
                    }
                }
            }
        }
    }
}
