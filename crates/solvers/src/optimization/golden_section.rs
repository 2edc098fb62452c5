//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum of a unimodal function on a
//! bounded interval. It maintains two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward
//! the better point. Each shrink reuses one interior point, so every
//! iteration costs exactly one evaluation.
//!
//! # When to Use
//!
//! - The objective is unimodal on the bracket, such as the surface area of a
//!   fixed-volume cylinder as a function of its radius
//! - Derivative information is unavailable or not worth deriving
//! - A bracket around the minimum is known
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation, including the two
//! initial interior points. Observers can return [`Action::StopEarly`] to
//! halt immediately, or [`Action::AssumeWorse`] to treat the point as worse
//! than any evaluated point.

mod bracket;
mod config;
mod search;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

use vessel_core::{Model, Observer, OptimizationProblem};

use super::{Action, Error, Event, Solution};

/// Finds the minimum of the objective within `bracket` using golden section search.
///
/// The bounds may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is not finite with distinct bounds, the
/// objective is NaN, or the model or problem fails during evaluation and the
/// observer does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, 1>, Action>,
{
    search::search(model, problem, bracket, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or evaluation fails.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}
