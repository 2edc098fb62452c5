use std::fmt;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Geometry, InputError};

/// A validated container volume: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Volume(f64);

impl Volume {
    /// Creates a volume.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is non-finite or not positive.
    pub fn new(value: f64) -> Result<Self, InputError> {
        if !value.is_finite() {
            return Err(InputError::NonFiniteVolume(value));
        }
        if value <= 0.0 {
            return Err(InputError::NonPositiveVolume(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `V^(2/3)`, the area scale used for shape-efficiency ratios.
    #[must_use]
    pub fn area_scale(self) -> f64 {
        self.0.cbrt().powi(2)
    }

    /// Returns `|achieved − V| / V`.
    #[must_use]
    pub fn relative_error(self, achieved: f64) -> f64 {
        (achieved - self.0).abs() / self.0
    }

    /// Returns the relative volume error of `dimensions` against this volume.
    ///
    /// Lengths are measured in units of `V^(1/3)`, so the error is exact in
    /// scale even where `enclosed_volume` overflows.
    #[must_use]
    pub fn relative_error_of<D: Geometry>(self, dimensions: &D) -> f64 {
        let scale = self.0.cbrt();
        let unit = self.0 / scale / scale / scale;
        (dimensions.volume_in(scale) / unit - 1.0).abs()
    }
}

impl TryFrom<f64> for Volume {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::BoxDimensions;

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert_eq!(Volume::new(0.0), Err(InputError::NonPositiveVolume(0.0)));
        assert_eq!(Volume::new(-5.0), Err(InputError::NonPositiveVolume(-5.0)));
        assert_eq!(
            Volume::new(f64::INFINITY),
            Err(InputError::NonFiniteVolume(f64::INFINITY))
        );
        assert!(matches!(
            Volume::new(f64::NAN),
            Err(InputError::NonFiniteVolume(v)) if v.is_nan()
        ));
    }

    #[test]
    fn relative_error_and_area_scale() {
        let volume = Volume::new(8.0).unwrap();

        assert_relative_eq!(volume.area_scale(), 4.0, max_relative = 1e-15);
        assert_relative_eq!(volume.relative_error(8.8), 0.1, max_relative = 1e-12);
        assert_eq!(f64::from(volume), 8.0);
    }

    #[test]
    fn relative_error_of_dimensions_near_the_top_of_the_range() {
        let volume = Volume::new(f64::MAX).unwrap();
        let side = f64::MAX.cbrt();
        let cube = BoxDimensions::new(side, side, side);
        let long = BoxDimensions::new(1.1 * side, side, side);

        assert!(volume.relative_error_of(&cube) < 1e-12);
        assert_relative_eq!(volume.relative_error_of(&long), 0.1, max_relative = 1e-9);
    }
}
