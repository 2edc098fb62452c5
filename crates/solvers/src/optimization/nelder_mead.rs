//! Nelder–Mead simplex search for multi-variable minimization.
//!
//! # Algorithm
//!
//! The solver keeps `N + 1` vertices in `N` dimensions. Each iteration
//! orders them by objective and replaces the worst vertex with a point on
//! the line through the centroid of the others: a reflection, an expansion,
//! or a contraction. When none of those improve, the whole simplex shrinks
//! toward the best vertex.
//!
//! The initial simplex is `x0` plus one vertex per axis, displaced by
//! [`Config::initial_step`] times the magnitude of that component.
//!
//! # Convergence
//!
//! The solver converges when every vertex lies within the x tolerance of
//! the best vertex, component-wise, and the objective spread across the
//! simplex is within the objective tolerance. Otherwise it stops at
//! [`Config::max_iters`] with [`Status::MaxIters`](super::Status::MaxIters).
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per evaluation. Return [`Action::AssumeWorse`]
//! on a failed evaluation to push the simplex away from an infeasible
//! region, or [`Action::StopEarly`] to return the best point found so far.

mod config;
mod search;
mod simplex;


pub use config::{Config, ConfigError};

use vessel_core::{Model, Observer, OptimizationProblem};

use super::{Action, Error, Event, Solution};

/// Finds a minimum of the objective starting from `x0`.
///
/// # Errors
///
/// Returns an error if `x0` has a non-finite component, the objective is
/// NaN, or the model or problem fails during evaluation and the observer
/// does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search::search(model, problem, x0, config, observer)
}

/// Finds a minimum of the objective without observer support.
///
/// # Errors
///
/// Returns an error if `x0` is invalid or evaluation fails.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}
