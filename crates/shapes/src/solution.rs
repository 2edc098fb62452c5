#[cfg(feature = "serde-derive")]
use serde::Serialize;

use crate::{ConvergenceError, Dimensions, Geometry, Volume};

/// Solved dimensions with their surface area and the volume they enclose.
///
/// A record can only be built through [`SolutionRecord::new`], which checks
/// the achieved volume against the target. A record that fails the check
/// indicates a solver defect and is reported as an error instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct SolutionRecord<D> {
    dimensions: D,
    surface_area: f64,
    volume_achieved: f64,
}

impl<D: Geometry> SolutionRecord<D> {
    /// Creates a record after checking `|volume_achieved − V| ≤ volume_rel_tol·V`.
    ///
    /// The check is made in units of `V^(1/3)`. Near `f64::MAX` the stored
    /// `volume_achieved` may round to infinity while the check still passes.
    ///
    /// # Errors
    ///
    /// Returns [`ConvergenceError::VolumeViolated`] if the dimensions miss
    /// the target volume.
    pub fn new(
        dimensions: D,
        surface_area: f64,
        target: Volume,
        volume_rel_tol: f64,
    ) -> Result<Self, ConvergenceError> {
        let volume_achieved = dimensions.enclosed_volume();
        let rel_error = target.relative_error_of(&dimensions);

        // NaN fails this comparison.
        if !(rel_error <= volume_rel_tol) {
            return Err(ConvergenceError::VolumeViolated {
                achieved: volume_achieved,
                target: target.value(),
                rel_error,
                tolerance: volume_rel_tol,
            });
        }

        Ok(Self {
            dimensions,
            surface_area,
            volume_achieved,
        })
    }
}

impl<D> SolutionRecord<D> {
    #[must_use]
    pub fn dimensions(&self) -> &D {
        &self.dimensions
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    #[must_use]
    pub fn volume_achieved(&self) -> f64 {
        self.volume_achieved
    }

    /// Converts the dimensions into the tagged [`Dimensions`] form.
    #[must_use]
    pub fn into_tagged(self) -> SolutionRecord<Dimensions>
    where
        D: Into<Dimensions>,
    {
        SolutionRecord {
            dimensions: self.dimensions.into(),
            surface_area: self.surface_area,
            volume_achieved: self.volume_achieved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::CylinderDimensions;

    #[test]
    fn accepts_dimensions_on_the_constraint() {
        let volume = Volume::new(std::f64::consts::PI).unwrap();
        let dimensions = CylinderDimensions::new(1.0, 1.0);
        let record = SolutionRecord::new(dimensions, 3.0, volume, 1e-6).unwrap();

        assert_eq!(record.surface_area(), 3.0);
        assert_eq!(record.volume_achieved(), std::f64::consts::PI);
        let tagged = record.into_tagged();
        assert!(matches!(tagged.dimensions(), Dimensions::Cylinder(_)));
    }

    #[test]
    fn rejects_dimensions_off_the_constraint() {
        let volume = Volume::new(10.0).unwrap();
        let result = SolutionRecord::new(CylinderDimensions::new(1.0, 1.0), 3.0, volume, 1e-6);

        assert!(matches!(
            result,
            Err(ConvergenceError::VolumeViolated { target, .. }) if target == 10.0
        ));
    }

    #[test]
    fn rejects_nan_dimensions() {
        let volume = Volume::new(1.0).unwrap();
        let result = SolutionRecord::new(CylinderDimensions::new(f64::NAN, 1.0), 3.0, volume, 1e-6);

        assert!(result.is_err());
    }
}
