use super::Evaluation;

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// The solver variables.
    pub x: [f64; N],

    /// The objective value at `x`.
    pub objective: f64,
}

impl<const N: usize> Point<N> {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: [f64; N], objective: f64) -> Self {
        Self { x, objective }
    }

    /// Creates a point that loses every comparison.
    #[must_use]
    pub fn worst_at(x: [f64; N]) -> Self {
        Self::new(x, f64::INFINITY)
    }

    /// Returns true if this point has a strictly lower objective than `other`.
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.objective < other.objective
    }
}

impl<I, O, const N: usize> From<&Evaluation<I, O, N>> for Point<N> {
    fn from(eval: &Evaluation<I, O, N>) -> Self {
        Self::new(eval.x, eval.objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_point_loses_to_any_finite_objective() {
        let worst = Point::worst_at([1.0, 2.0]);
        let finite = Point::new([3.0, 4.0], 1e300);

        assert!(finite.is_better_than(&worst));
        assert!(!worst.is_better_than(&finite));
    }

    #[test]
    fn equal_objectives_are_not_better() {
        let a = Point::new([1.0], 2.0);
        let b = Point::new([5.0], 2.0);

        assert!(!a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
    }
}
