//! Reusable observers for the Vessel solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`vessel_solvers`].
//!
//! # Modules
//!
//! - [`traits`] - Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasFailure`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] - reports every evaluation through the `log` facade
//! - [`RecoverFailures`] - treats failed evaluations as infinitely bad
//! - [`Fanout`] - forwards each event to two observers
//!
//! [`Observer`]: vessel_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasFailure`]: traits::HasFailure
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod fanout;
mod logging;
mod recover;

pub use fanout::Fanout;
pub use logging::LogObserver;
pub use recover::RecoverFailures;
