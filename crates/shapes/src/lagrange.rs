//! First-order optimality of a single equality-constrained minimum.
//!
//! At a constrained critical point the objective gradient is parallel to
//! the constraint gradient: `∇S = λ∇g`. Away from one, the least-squares
//! multiplier leaves a residual that measures how far from stationary the
//! point is.

/// The least-squares Lagrange multiplier and the relative stationarity residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stationarity {
    /// `λ = (∇S·∇g) / (∇g·∇g)`.
    pub multiplier: f64,

    /// `‖∇S − λ∇g‖ / ‖∇S‖`, zero at a constrained critical point.
    pub residual: f64,
}

/// Computes the multiplier and residual from the two gradients.
///
/// Each gradient is normalized by its largest component before any dot
/// product, so the result holds across the full range of finite volumes.
/// A vanishing constraint gradient gives an infinite residual.
#[must_use]
pub fn stationarity(grad_objective: &[f64], grad_constraint: &[f64]) -> Stationarity {
    let g_scale = max_abs(grad_constraint);
    if g_scale == 0.0 {
        return Stationarity {
            multiplier: f64::NAN,
            residual: f64::INFINITY,
        };
    }

    let s_scale = max_abs(grad_objective);
    if s_scale == 0.0 {
        return Stationarity {
            multiplier: 0.0,
            residual: 0.0,
        };
    }

    let s: Vec<f64> = grad_objective.iter().map(|v| v / s_scale).collect();
    let g: Vec<f64> = grad_constraint.iter().map(|v| v / g_scale).collect();

    let unit_multiplier = dot(&s, &g) / dot(&g, &g);
    let miss = s
        .iter()
        .zip(&g)
        .map(|(s, g)| (s - unit_multiplier * g).powi(2))
        .sum::<f64>()
        .sqrt();

    Stationarity {
        multiplier: unit_multiplier * (s_scale / g_scale),
        residual: miss / dot(&s, &s).sqrt(),
    }
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |m, x| m.max(x.abs()))
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parallel_gradients_are_stationary() {
        let s = stationarity(&[6.0, 3.0], &[2.0, 1.0]);

        assert_relative_eq!(s.multiplier, 3.0);
        assert_relative_eq!(s.residual, 0.0);
    }

    #[test]
    fn orthogonal_gradients_are_not() {
        let s = stationarity(&[0.0, 2.0], &[1.0, 0.0]);

        assert_relative_eq!(s.multiplier, 0.0);
        assert_relative_eq!(s.residual, 1.0);
    }

    #[test]
    fn vanishing_constraint_gradient() {
        let s = stationarity(&[1.0, 1.0], &[0.0, 0.0]);

        assert!(s.multiplier.is_nan());
        assert!(s.residual.is_infinite());
    }

    #[test]
    fn extreme_magnitudes_do_not_overflow() {
        let huge = stationarity(&[6e150, 3e150], &[2e200, 1e200]);
        assert_relative_eq!(huge.multiplier, 3e-50, max_relative = 1e-12);
        assert!(huge.residual < 1e-15);

        let tiny = stationarity(&[6e-150, 3e-150], &[2e-200, 1e-200]);
        assert_relative_eq!(tiny.multiplier, 3e50, max_relative = 1e-12);
        assert!(tiny.residual < 1e-15);
    }

    #[test]
    fn vanishing_objective_gradient_is_stationary() {
        let s = stationarity(&[0.0, 0.0], &[1.0, 2.0]);

        assert_eq!(s.multiplier, 0.0);
        assert_eq!(s.residual, 0.0);
    }
}
