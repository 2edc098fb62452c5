//! Core traits and types shared by the Vessel crates.
//!
//! This crate defines the abstractions that solvers, observers, and container
//! models build on:
//!
//! - [`Model`] - a callable that maps a typed input to a typed output
//! - [`Snapshot`] - a captured input/output pair from a model call
//! - [`Observer`] - receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] - adapts solver variables to model inputs and
//!   extracts the objective to minimize from model outputs

mod model;
mod observer;
mod problem;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problem::OptimizationProblem;
