use std::f64::consts::PI;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Measurements common to every container shape.
pub trait Geometry {
    /// Volume enclosed by these dimensions.
    fn enclosed_volume(&self) -> f64;

    /// Enclosed volume in units of `scale³`.
    ///
    /// Each length is divided by `scale` before multiplying, so the result
    /// stays finite when the volume itself sits near the top of the `f64`
    /// range.
    fn volume_in(&self, scale: f64) -> f64;

    /// Named components in a fixed order.
    fn components(&self) -> Vec<(&'static str, f64)>;

    /// The characteristic proportion of the shape.
    ///
    /// Height over radius for cylinders, length over height for boxes.
    fn aspect_ratio(&self) -> f64;
}

/// Radius and height of a circular cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct CylinderDimensions {
    pub radius: f64,
    pub height: f64,
}

/// Length, width and height of a rectangular box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Dimensions of any supported shape, for reports mixing shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(tag = "shape", rename_all = "snake_case")
)]
pub enum Dimensions {
    Cylinder(CylinderDimensions),
    Box(BoxDimensions),
}

impl CylinderDimensions {
    #[must_use]
    pub fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }
}

impl BoxDimensions {
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl Dimensions {
    #[must_use]
    pub fn as_cylinder(&self) -> Option<&CylinderDimensions> {
        match self {
            Self::Cylinder(d) => Some(d),
            Self::Box(_) => None,
        }
    }

    #[must_use]
    pub fn as_box(&self) -> Option<&BoxDimensions> {
        match self {
            Self::Box(d) => Some(d),
            Self::Cylinder(_) => None,
        }
    }
}

impl Geometry for CylinderDimensions {
    fn enclosed_volume(&self) -> f64 {
        PI * self.radius * self.radius * self.height
    }

    fn volume_in(&self, scale: f64) -> f64 {
        let r = self.radius / scale;
        PI * r * r * (self.height / scale)
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![("radius", self.radius), ("height", self.height)]
    }

    fn aspect_ratio(&self) -> f64 {
        self.height / self.radius
    }
}

impl Geometry for BoxDimensions {
    fn enclosed_volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    fn volume_in(&self, scale: f64) -> f64 {
        (self.length / scale) * (self.width / scale) * (self.height / scale)
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ]
    }

    fn aspect_ratio(&self) -> f64 {
        self.length / self.height
    }
}

impl Geometry for Dimensions {
    fn enclosed_volume(&self) -> f64 {
        match self {
            Self::Cylinder(d) => d.enclosed_volume(),
            Self::Box(d) => d.enclosed_volume(),
        }
    }

    fn volume_in(&self, scale: f64) -> f64 {
        match self {
            Self::Cylinder(d) => d.volume_in(scale),
            Self::Box(d) => d.volume_in(scale),
        }
    }

    fn components(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Cylinder(d) => d.components(),
            Self::Box(d) => d.components(),
        }
    }

    fn aspect_ratio(&self) -> f64 {
        match self {
            Self::Cylinder(d) => d.aspect_ratio(),
            Self::Box(d) => d.aspect_ratio(),
        }
    }
}

impl From<CylinderDimensions> for Dimensions {
    fn from(d: CylinderDimensions) -> Self {
        Self::Cylinder(d)
    }
}

impl From<BoxDimensions> for Dimensions {
    fn from(d: BoxDimensions) -> Self {
        Self::Box(d)
    }
}

/// Relative Euclidean distance from `to`, component by component.
pub(crate) fn relative_distance<D: Geometry>(from: &D, to: &D) -> f64 {
    from.components()
        .iter()
        .zip(to.components())
        .map(|((_, a), (_, b))| ((a - b) / b).powi(2))
        .sum::<f64>()
        .sqrt()
}
