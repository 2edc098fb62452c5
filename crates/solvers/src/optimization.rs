//! Solvers for optimization problems: minimizing an objective.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`golden_section`] - derivative-free search over a bracketed interval for
//!   unimodal functions of one variable
//! - [`nelder_mead`] - derivative-free simplex search over `N` variables from
//!   a starting point
//!
//! Both solvers share the same [`Event`], [`Action`], [`Solution`], and
//! [`Error`] types, so an observer written for one works with the other.
//!
//! [`OptimizationProblem`]: vessel_core::OptimizationProblem

mod action;
mod best;
mod error;
mod evaluate;
mod event;
mod point;
mod probe;
mod solution;

pub use action::Action;
pub use error::Error;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

pub mod golden_section;
pub mod nelder_mead;
