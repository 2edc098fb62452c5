//! Numerical cross-check of the closed-form optima.
//!
//! Every shape runs the same policy. The search starts from volume-feasible
//! seeds around the analytical optimum, with the constraint eliminated by
//! solving it for one dimension. Candidates that hit the iteration cap are
//! discarded. Among converged candidates whose surface areas tie, the one
//! nearest the analytical dimensions wins. The winner must then satisfy the
//! volume constraint, be a constrained critical point, and match the
//! analytical dimensions and proportions. Nothing is retried.

use thiserror::Error;
use vessel_solvers::optimization::Solution;

use crate::{
    ConvergenceError, Error, Geometry, InconsistencyError, ShapeOptimizer, SolutionRecord,
    ShapeVariant, dimensions::relative_distance, lagrange::stationarity,
};

/// A proposed point that no container can have.
#[derive(Debug, Error)]
#[error("dimensions {0:?} must be positive and finite")]
pub(crate) struct Infeasible(pub(crate) Vec<f64>);

/// The outcome of one search from one seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate<D> {
    pub(crate) dimensions: D,
    pub(crate) surface_area: f64,
    pub(crate) converged: bool,
    pub(crate) iters: usize,
}

impl<D: Copy> Candidate<D> {
    pub(crate) fn from_solution<const N: usize>(solution: &Solution<D, f64, N>) -> Self {
        Self {
            dimensions: solution.snapshot.input,
            surface_area: solution.snapshot.output,
            converged: solution.is_converged(),
            iters: solution.iters,
        }
    }
}

/// The shape-specific half of the verification policy.
pub(crate) trait ReducedSearch: ShapeOptimizer {
    /// Volume-feasible starting points around `optimum`.
    fn seeds(&self, optimum: &Self::Dimensions) -> Vec<Self::Dimensions>;

    /// Minimizes surface area along the constraint, starting from `seed`.
    fn search_from(
        &self,
        seed: &Self::Dimensions,
        label: String,
    ) -> Result<Candidate<Self::Dimensions>, Error>;

    /// Objective and constraint gradients over every dimension.
    fn gradients(&self, dimensions: &Self::Dimensions) -> (Vec<f64>, Vec<f64>);

    /// `(name, expected, actual)` proportions the optimum must satisfy.
    fn proportions(&self, dimensions: &Self::Dimensions) -> Vec<(&'static str, f64, f64)>;
}

pub(crate) fn numerical_solution<S: ReducedSearch>(
    shape: &S,
) -> Result<SolutionRecord<S::Dimensions>, Error> {
    let variant = shape.variant();
    let config = shape.config();
    let analytical = *shape.analytical_solution()?.dimensions();

    log::debug!("{variant}: verifying at volume {}", shape.volume());

    let mut candidates = Vec::new();
    for (index, seed) in shape.seeds(&analytical).iter().enumerate() {
        let candidate = shape.search_from(seed, format!("{variant} seed {index}"))?;
        if candidate.converged {
            candidates.push(candidate);
        } else {
            log::warn!(
                "{variant}: seed {index} hit the iteration cap after {} iterations, discarding",
                candidate.iters
            );
        }
    }

    let Some(chosen) = select(candidates, &analytical, config.tie_rel_tol()) else {
        return Err(ConvergenceError::IterationLimit {
            variant,
            max_iters: config.max_iters(),
        }
        .into());
    };

    let record = SolutionRecord::new(
        chosen.dimensions,
        chosen.surface_area,
        shape.volume(),
        config.volume_rel_tol(),
    )?;

    let (grad_objective, grad_constraint) = shape.gradients(&chosen.dimensions);
    let residual = stationarity(&grad_objective, &grad_constraint).residual;
    if !(residual <= config.stationarity_tol()) {
        log::warn!("{variant}: stationarity residual {residual:e} exceeds tolerance");
        return Err(ConvergenceError::NotStationary {
            variant,
            residual,
            tolerance: config.stationarity_tol(),
        }
        .into());
    }

    check_agreement(
        variant,
        &analytical,
        &chosen.dimensions,
        config.dimension_rel_tol(),
    )?;

    for (proportion, expected, actual) in shape.proportions(&chosen.dimensions) {
        if !((actual - expected).abs() <= config.dimension_rel_tol() * expected.abs()) {
            log::warn!("{variant}: {proportion} is {actual}, expected {expected}");
            return Err(InconsistencyError::ProportionViolated {
                variant,
                proportion,
                expected,
                actual,
            }
            .into());
        }
    }

    log::debug!(
        "{variant}: verified {:?} with surface area {}",
        chosen.dimensions.components(),
        chosen.surface_area
    );
    Ok(record)
}

/// Picks the candidate to report.
///
/// Candidates within `tie_rel_tol` of the smallest surface area are tied;
/// the tie goes to the one nearest `analytical`.
fn select<D: Geometry>(
    candidates: Vec<Candidate<D>>,
    analytical: &D,
    tie_rel_tol: f64,
) -> Option<Candidate<D>> {
    let smallest = candidates
        .iter()
        .map(|c| c.surface_area)
        .min_by(f64::total_cmp)?;

    candidates
        .into_iter()
        .filter(|c| c.surface_area - smallest <= tie_rel_tol * smallest.abs())
        .min_by(|a, b| {
            relative_distance(&a.dimensions, analytical)
                .total_cmp(&relative_distance(&b.dimensions, analytical))
        })
}

/// Compares dimensions component by component, not just surface area.
fn check_agreement<D: Geometry>(
    variant: ShapeVariant,
    analytical: &D,
    numerical: &D,
    tol: f64,
) -> Result<(), InconsistencyError> {
    let numerical = numerical.components();
    for ((component, expected), (_, found)) in analytical.components().into_iter().zip(numerical) {
        let rel_error = (found - expected).abs() / expected.abs();
        if !(rel_error <= tol) {
            log::warn!("{variant}: {component} off by {rel_error:e}");
            return Err(InconsistencyError::DimensionMismatch {
                variant,
                component,
                analytical: expected,
                numerical: found,
                rel_error,
            });
        }
    }
    Ok(())
}
