//! The triangular lattice container.
//!
//! A recombining binomial tree stores one value per `(depth, height)`
//! coordinate, where level `i` holds `i + 1` values.  Node `(d, h)`
//! represents the state after `h` up-moves and `d − h` down-moves.

use crr_core::{ensure, errors::Result, Error, Real, Size, MAX_DEPTH};
use std::fmt;

/// A triangular lattice of real values.
///
/// Level `i` (for `i` in `0..depth`) holds exactly `i + 1` values, indexed
/// by height `0..=i`.  The triangular shape is established at construction
/// and never violated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    levels: Vec<Vec<Real>>,
}

impl Lattice {
    /// Create a zero-filled lattice with the given depth.
    ///
    /// Fails with [`Error::InvalidParameter`] unless `1 <= depth <= MAX_DEPTH`.
    pub fn new(depth: Size) -> Result<Self> {
        ensure!(
            (1..=MAX_DEPTH).contains(&depth),
            "depth must be in [1, {MAX_DEPTH}], got {depth}"
        );
        let levels = (0..depth).map(|i| vec![0.0; i + 1]).collect();
        Ok(Self { levels })
    }

    /// Create a lattice from pre-filled levels.
    ///
    /// The depth is `levels.len()`; level `i` must hold exactly `i + 1`
    /// values or construction fails with [`Error::ShapeMismatch`].
    pub fn from_levels(levels: Vec<Vec<Real>>) -> Result<Self> {
        ensure!(
            (1..=MAX_DEPTH).contains(&levels.len()),
            "depth must be in [1, {MAX_DEPTH}], got {}",
            levels.len()
        );
        for (i, level) in levels.iter().enumerate() {
            if level.len() != i + 1 {
                return Err(Error::ShapeMismatch {
                    level: i,
                    expected: i + 1,
                    actual: level.len(),
                });
            }
        }
        Ok(Self { levels })
    }

    /// Number of levels.
    pub fn depth(&self) -> Size {
        self.levels.len()
    }

    /// Value at node `(depth, height)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the triangle.
    pub fn node(&self, depth: Size, height: Size) -> Real {
        self.levels[depth][height]
    }

    /// Overwrite the value at node `(depth, height)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the triangle.
    pub fn set_node(&mut self, depth: Size, height: Size, value: Real) {
        self.levels[depth][height] = value;
    }

    /// All values at the given level, ordered by height.
    ///
    /// # Panics
    /// Panics if `depth` is out of range.
    pub fn level(&self, depth: Size) -> &[Real] {
        &self.levels[depth]
    }

    /// The terminal (deepest) level.
    pub fn terminal(&self) -> &[Real] {
        self.levels.last().expect("lattice has at least one level")
    }

    /// The root value, node `(0, 0)`.
    pub fn root(&self) -> Real {
        self.levels[0][0]
    }
}

impl fmt::Display for Lattice {
    /// Renders the triangle visually aligned, one level per line.
    ///
    /// Diagnostic output only; the format is not machine-parseable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.depth();
        for (i, level) in self.levels.iter().enumerate() {
            let indent = (depth - i - 1) * 4;
            write!(f, "{:indent$}", "")?;
            for value in level {
                write!(f, "{value:6.2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
