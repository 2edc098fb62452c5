use crate::optimization::Point;

use super::Config;

/// Reflection coefficient.
pub(super) const REFLECTION: f64 = 1.0;

/// Expansion coefficient, applied to the reflected direction.
pub(super) const EXPANSION: f64 = 2.0;

/// Contraction coefficient.
pub(super) const CONTRACTION: f64 = 0.5;

/// Shrink coefficient toward the best vertex.
pub(super) const SHRINK: f64 = 0.5;

/// Displacement used for components of `x0` that are effectively zero.
const ZERO_COMPONENT_STEP: f64 = 2.5e-4;

/// Builds the initial vertices: `x0` followed by one displaced copy per axis.
pub(super) fn initial_vertices<const N: usize>(x0: &[f64; N], step: f64) -> Vec<[f64; N]> {
    let mut vertices = Vec::with_capacity(N + 1);
    vertices.push(*x0);
    for j in 0..N {
        let mut vertex = *x0;
        vertex[j] += if x0[j].abs() > f64::EPSILON {
            step * x0[j]
        } else {
            ZERO_COMPONENT_STEP
        };
        vertices.push(vertex);
    }
    vertices
}

/// Returns `from + t * (to - from)`.
pub(super) fn along<const N: usize>(from: &[f64; N], to: &[f64; N], t: f64) -> [f64; N] {
    std::array::from_fn(|j| from[j] + t * (to[j] - from[j]))
}

/// The working simplex, kept ordered from best to worst by [`Simplex::order`].
pub(super) struct Simplex<const N: usize> {
    vertices: Vec<Point<N>>,
}

impl<const N: usize> Simplex<N> {
    pub(super) fn new(vertices: Vec<Point<N>>) -> Self {
        debug_assert_eq!(vertices.len(), N + 1);
        Self { vertices }
    }

    /// Sorts vertices by ascending objective; `+∞` sorts last.
    pub(super) fn order(&mut self) {
        self.vertices
            .sort_by(|a, b| a.objective.total_cmp(&b.objective));
    }

    pub(super) fn best(&self) -> Point<N> {
        self.vertices[0]
    }

    pub(super) fn worst(&self) -> Point<N> {
        self.vertices[N]
    }

    pub(super) fn second_worst(&self) -> Point<N> {
        self.vertices[N.saturating_sub(1)]
    }

    pub(super) fn vertex(&self, index: usize) -> Point<N> {
        self.vertices[index]
    }

    pub(super) fn set(&mut self, index: usize, point: Point<N>) {
        self.vertices[index] = point;
    }

    pub(super) fn replace_worst(&mut self, point: Point<N>) {
        self.vertices[N] = point;
    }

    /// Centroid of every vertex except the worst.
    pub(super) fn centroid(&self) -> [f64; N] {
        #[allow(clippy::cast_precision_loss)]
        let count = N as f64;
        std::array::from_fn(|j| self.vertices[..N].iter().map(|v| v.x[j]).sum::<f64>() / count)
    }

    /// Returns true once the simplex has collapsed onto its best vertex.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let best = self.best();
        let worst = self.worst();

        if !worst.objective.is_finite() {
            return false;
        }

        let objective_spread = worst.objective - best.objective;
        let objective_ok = objective_spread
            <= config.objective_abs_tol() + config.objective_rel_tol() * best.objective.abs();

        let x_tol = |b: f64| config.x_abs_tol() + config.x_rel_tol() * b.abs();
        let x_ok = self.vertices[1..].iter().all(|v| {
            v.x.iter()
                .zip(best.x.iter())
                .all(|(a, b)| (a - b).abs() <= x_tol(*b))
        });

        objective_ok && x_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn initial_vertices_step_along_each_axis() {
        let vertices = initial_vertices(&[2.0, 0.0], 0.1);

        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0], [2.0, 0.0]);
        assert_relative_eq!(vertices[1][0], 2.2);
        assert_relative_eq!(vertices[1][1], 0.0);
        assert_relative_eq!(vertices[2][0], 2.0);
        assert_relative_eq!(vertices[2][1], ZERO_COMPONENT_STEP);
    }

    #[test]
    fn along_interpolates_and_reflects() {
        let from = [1.0, 1.0];
        let to = [3.0, -1.0];

        assert_eq!(along(&from, &to, 0.5), [2.0, 0.0]);
        assert_eq!(along(&from, &to, -1.0), [-1.0, 3.0]);
    }

    #[test]
    fn order_puts_infinite_objectives_last() {
        let mut simplex = Simplex::new(vec![
            Point::worst_at([0.0, 0.0]),
            Point::new([1.0, 0.0], 2.0),
            Point::new([0.0, 1.0], 1.0),
        ]);
        simplex.order();

        assert_relative_eq!(simplex.best().objective, 1.0);
        assert_relative_eq!(simplex.second_worst().objective, 2.0);
        assert!(simplex.worst().objective.is_infinite());
        assert_eq!(simplex.centroid(), [0.5, 0.5]);
    }

    #[test]
    fn collapsed_simplex_is_converged() {
        let config = Config::default();
        let tight = Simplex::new(vec![
            Point::new([1.0, 1.0], 3.0),
            Point::new([1.0 + 1e-10, 1.0], 3.0),
            Point::new([1.0, 1.0 - 1e-10], 3.0),
        ]);
        let loose = Simplex::new(vec![
            Point::new([1.0, 1.0], 3.0),
            Point::new([1.1, 1.0], 3.0),
            Point::new([1.0, 0.9], 3.0),
        ]);

        assert!(tight.is_converged(&config));
        assert!(!loose.is_converged(&config));
    }
}
