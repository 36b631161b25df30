//! Cell-centered parameter axis over `(0, 1)`.

use gb_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of `n` cell-center values discretizing `(0, 1)`.
///
/// Cell width is `1/n`; the first center sits at `1/(2n)` and the last at
/// `1 - 1/(2n)`, so the endpoints 0 and 1 are never evaluated. Values are
/// strictly increasing and symmetric about 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    values: Vec<f64>,
}

impl Axis {
    /// Build a cell-centered axis with `n` cells. Fails if `n < 1`.
    pub fn cell_centered(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(Error::Validation("grid resolution must be >= 1, got 0".into()));
        }
        let nf = n as f64;
        let values = (0..n).map(|i| (i as f64 + 0.5) / nf).collect();
        Ok(Self { values })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects `n < 1`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cell-center values, strictly increasing.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
