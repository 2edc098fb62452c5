use crate::optimization::Error;

use super::Config;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ = φ - 1
const INV_PHI: f64 = PHI - 1.0;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,

    /// Inner left point at `left + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds given in either order.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBracket` if a bound is non-finite or both bounds are equal.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = bracket;
        #[allow(clippy::float_cmp)]
        if !a.is_finite() || !b.is_finite() || a == b {
            return Err(Error::InvalidBracket { left: a, right: b });
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        let width = right - left;
        Ok(Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        })
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Shrinks to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`, and the new
    /// `inner_left` is the point to evaluate next.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Shrinks to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`, and the new
    /// `inner_right` is the point to evaluate next.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// Returns true once the interior points are within tolerance of each other.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = (self.inner_right - self.inner_left).abs();
        let mid = 0.5 * (self.inner_left + self.inner_right);
        gap <= config.x_abs_tol() + config.x_rel_tol() * mid.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn interior_points_divide_in_golden_ratio() {
        let bracket = GoldenBracket::new([0.0, 1.0]).unwrap();

        assert_relative_eq!(bracket.inner_left, 1.0 - INV_PHI);
        assert_relative_eq!(bracket.inner_right, INV_PHI);
        assert_relative_eq!(bracket.inner_left / (1.0 - bracket.inner_left), INV_PHI);
    }

    #[test]
    fn reversed_bounds_are_normalized() {
        let bracket = GoldenBracket::new([8.0, 2.0]).unwrap();

        assert_relative_eq!(bracket.left, 2.0);
        assert_relative_eq!(bracket.right, 8.0);
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(GoldenBracket::new([1.0, 1.0]).is_err());
        assert!(GoldenBracket::new([f64::NAN, 1.0]).is_err());
        assert!(GoldenBracket::new([0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn shrinking_reuses_an_interior_point() {
        let mut bracket = GoldenBracket::new([0.0, 1.0]).unwrap();
        let old_inner_left = bracket.inner_left;
        bracket.shrink_right();

        assert_relative_eq!(bracket.right, INV_PHI);
        assert_relative_eq!(bracket.inner_right, old_inner_left, epsilon = 1e-15);

        let old_inner_right = bracket.inner_right;
        bracket.shrink_left();

        assert_relative_eq!(bracket.inner_left, old_inner_right, epsilon = 1e-15);
        assert_relative_eq!(
            bracket.inner_right,
            bracket.left + INV_PHI * bracket.width(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn converges_once_interior_gap_is_small() {
        let config = Config::new(100, 1e-6, 0.0).unwrap();
        let mut bracket = GoldenBracket::new([0.0, 1.0]).unwrap();
        assert!(!bracket.is_converged(&config));

        for _ in 0..40 {
            bracket.shrink_right();
        }
        assert!(bracket.is_converged(&config));
    }
}
