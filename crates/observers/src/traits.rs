//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver event and action types, enabling
//! observers to work generically across solvers and problem sizes.
//!
//! # Event traits
//!
//! - [`HasObjective`] - events that carry an objective value
//! - [`HasFailure`] - events that may describe a failed evaluation
//!
//! # Action traits
//!
//! - [`CanStopEarly`] - actions that can signal early termination
//! - [`CanAssumeWorse`] - actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use vessel_core::Observer;
//! use vessel_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use std::error::Error as StdError;

use vessel_core::{Model, OptimizationProblem};
use vessel_solvers::optimization::{Action, Event};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An event that may describe a failed evaluation.
pub trait HasFailure {
    /// Returns the evaluated variables.
    fn variables(&self) -> &[f64];

    /// Returns the error if the evaluation failed.
    fn failure(&self) -> Option<&(dyn StdError + 'static)>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than any other.
    fn assume_worse() -> Self;
}

impl<M, P, const N: usize> HasObjective for Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        Event::objective(self).unwrap_or(f64::NAN)
    }
}

impl<M, P, const N: usize> HasFailure for Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn variables(&self) -> &[f64] {
        self.x()
    }

    fn failure(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Event::Evaluated { .. } => None,
            Event::ModelFailed { error, .. } => Some(*error as &(dyn StdError + 'static)),
            Event::ProblemFailed { error, .. } => Some(*error as &(dyn StdError + 'static)),
        }
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
