//! Container shapes with the least surface area for a fixed volume.
//!
//! Four shapes are supported: closed and open cylinders, and open-top and
//! closed rectangular boxes. Each optimizer produces the closed-form optimum
//! derived with Lagrange multipliers and, on request, an independent
//! numerical optimum that is checked against it dimension by dimension.
//!
//! # Example
//!
//! ```rust
//! use vessel_shapes::{CylinderOptimizer, ShapeOptimizer, compare_shapes};
//!
//! let can = CylinderOptimizer::new(1000.0, true)?;
//! let best = can.analytical_solution()?;
//! assert!((best.dimensions().height / best.dimensions().radius - 2.0).abs() < 1e-9);
//!
//! let report = compare_shapes(1000.0)?;
//! assert_eq!(report.most_efficient().map(|e| e.label()), Some("cylinder_open"));
//! # Ok::<(), vessel_shapes::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde-derive` (default) - derives `Serialize` for records and reports,
//!   and `Serialize`/`Deserialize` for volumes, dimensions and shape labels.

mod compare;
mod config;
mod cylinder;
mod dimensions;
mod error;
mod landscape;
mod rect_box;
mod shape;
mod solution;
mod verify;
mod volume;

pub mod lagrange;

pub use compare::{
    CompareOptions, ComparisonEntry, ComparisonReport, compare_shapes, compare_shapes_with,
};
pub use config::Config;
pub use cylinder::{CylinderOptimizer, CylinderVariant};
pub use dimensions::{BoxDimensions, CylinderDimensions, Dimensions, Geometry};
pub use error::{ConfigError, ConvergenceError, Error, ErrorKind, InconsistencyError, InputError};
pub use landscape::LandscapePoint;
pub use rect_box::{BoxVariant, RectangularBoxOptimizer};
pub use shape::{ShapeOptimizer, ShapeVariant};
pub use solution::SolutionRecord;
pub use volume::Volume;
