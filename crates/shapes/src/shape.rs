use std::{fmt, str::FromStr};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Config, Dimensions, Error, Geometry, InputError, SolutionRecord, Volume};

/// The four supported container shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ShapeVariant {
    CylinderClosed,
    CylinderOpen,
    #[cfg_attr(feature = "serde-derive", serde(rename = "box_open"))]
    BoxOpenTop,
    BoxClosed,
}

impl ShapeVariant {
    /// Every variant, in comparison order.
    pub const ALL: [Self; 4] = [
        Self::CylinderClosed,
        Self::CylinderOpen,
        Self::BoxOpenTop,
        Self::BoxClosed,
    ];

    /// Stable label used in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CylinderClosed => "cylinder_closed",
            Self::CylinderOpen => "cylinder_open",
            Self::BoxOpenTop => "box_open",
            Self::BoxClosed => "box_closed",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }

    #[must_use]
    pub fn is_cylinder(self) -> bool {
        matches!(self, Self::CylinderClosed | Self::CylinderOpen)
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeVariant {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_label(s) {
            Some(variant) => Ok(variant),
            None => Err(InputError::UnknownShape(s.to_owned())),
        }
    }
}

/// A container shape that can be optimized at a fixed volume.
///
/// Both solutions are pure functions of the optimizer's volume, variant and
/// config; calling either repeatedly returns identical results.
pub trait ShapeOptimizer {
    type Dimensions: Geometry + Copy + Into<Dimensions>;

    fn variant(&self) -> ShapeVariant;

    fn volume(&self) -> Volume;

    fn config(&self) -> &Config;

    /// Returns the closed-form surface-area minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula's dimensions miss the target volume.
    fn analytical_solution(&self) -> Result<SolutionRecord<Self::Dimensions>, Error>;

    /// Solves the same problem numerically and checks it against the
    /// closed-form result.
    ///
    /// # Errors
    ///
    /// Returns a convergence error if no search converges, the volume
    /// constraint or stationarity check fails, and an inconsistency error if
    /// the numerical dimensions disagree with the analytical ones.
    fn numerical_solution(&self) -> Result<SolutionRecord<Self::Dimensions>, Error>;
}
