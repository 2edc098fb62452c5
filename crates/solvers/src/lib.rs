//! Numerical solvers for the Vessel crates.
//!
//! Solvers operate on the problem traits from [`vessel_core`] and report
//! progress to an [`Observer`](vessel_core::Observer), which can stop a run
//! early or steer it away from regions where evaluation fails.
//!
//! # Modules
//!
//! - [`optimization`] - minimize a scalar objective over one or more variables

pub mod optimization;
