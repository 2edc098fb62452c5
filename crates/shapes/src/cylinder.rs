//! Circular cylinders, closed or open at the top.
//!
//! With `S = kπr² + 2πrh` (`k` bases) and `πr²h = V`, the Lagrange
//! conditions give `h = 2r` for a closed cylinder and `h = r` for an open
//! one. The numerical check eliminates the height through the constraint
//! and runs a golden section search over the radius.

use std::{convert::Infallible, f64::consts::PI};

use vessel_core::{Model, OptimizationProblem};
use vessel_observers::{Fanout, LogObserver, RecoverFailures};
use vessel_solvers::optimization::golden_section;

use crate::{
    Config, ConfigError, ConvergenceError, CylinderDimensions, Error, LandscapePoint,
    ShapeOptimizer, ShapeVariant, SolutionRecord, Volume,
    lagrange::{self, Stationarity},
    landscape::grid,
    verify::{self, Candidate, Infeasible, ReducedSearch},
};

/// Relative bracket width at which the radius search stops.
const RADIUS_REL_TOL: f64 = 1e-10;

/// Whether the cylinder has a lid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CylinderVariant {
    Closed,
    Open,
}

impl CylinderVariant {
    #[must_use]
    pub fn from_closed(closed: bool) -> Self {
        if closed { Self::Closed } else { Self::Open }
    }

    #[must_use]
    pub fn shape(self) -> ShapeVariant {
        match self {
            Self::Closed => ShapeVariant::CylinderClosed,
            Self::Open => ShapeVariant::CylinderOpen,
        }
    }

    /// Number of circular faces.
    fn bases(self) -> f64 {
        match self {
            Self::Closed => 2.0,
            Self::Open => 1.0,
        }
    }

    /// Optimal height over radius.
    #[must_use]
    pub fn height_ratio(self) -> f64 {
        match self {
            Self::Closed => 2.0,
            Self::Open => 1.0,
        }
    }

    /// Surface area of a cylinder with these dimensions.
    #[must_use]
    pub fn surface_area(self, radius: f64, height: f64) -> f64 {
        self.bases() * PI * radius * radius + 2.0 * PI * radius * height
    }
}

impl Model for CylinderVariant {
    type Input = CylinderDimensions;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, d: &CylinderDimensions) -> Result<f64, Self::Error> {
        Ok(self.surface_area(d.radius, d.height))
    }
}

/// Radius to dimensions on the constraint `πr²h = V`.
struct OnVolume {
    volume: f64,
}

impl OptimizationProblem<1> for OnVolume {
    type Input = CylinderDimensions;
    type Output = f64;
    type Error = Infeasible;

    fn input(&self, x: &[f64; 1]) -> Result<CylinderDimensions, Self::Error> {
        let radius = x[0];
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(Infeasible(x.to_vec()));
        }
        Ok(CylinderDimensions::new(
            radius,
            self.volume / (PI * radius * radius),
        ))
    }

    fn objective(&self, _input: &CylinderDimensions, area: &f64) -> Result<f64, Self::Error> {
        Ok(*area)
    }
}

/// Minimizes cylinder surface area at a fixed volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptimizer {
    volume: Volume,
    variant: CylinderVariant,
    config: Config,
}

impl CylinderOptimizer {
    /// Creates an optimizer with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `volume` is not positive and finite.
    pub fn new(volume: f64, closed: bool) -> Result<Self, Error> {
        Self::with_config(volume, closed, Config::default())
    }

    /// Creates an optimizer with an explicit [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `volume` is not positive and finite.
    pub fn with_config(volume: f64, closed: bool, config: Config) -> Result<Self, Error> {
        Ok(Self::from_parts(
            Volume::new(volume)?,
            CylinderVariant::from_closed(closed),
            config,
        ))
    }

    #[must_use]
    pub fn from_parts(volume: Volume, variant: CylinderVariant, config: Config) -> Self {
        Self {
            volume,
            variant,
            config,
        }
    }

    #[must_use]
    pub fn cylinder_variant(&self) -> CylinderVariant {
        self.variant
    }

    /// Surface area at `(r, h)`, on or off the constraint.
    #[must_use]
    pub fn objective(&self, radius: f64, height: f64) -> f64 {
        self.variant.surface_area(radius, height)
    }

    /// Volume residual `πr²h − V`; zero on the constraint.
    #[must_use]
    pub fn constraint(&self, radius: f64, height: f64) -> f64 {
        PI * radius * radius * height - self.volume.value()
    }

    /// Returns true if `(r, h)` encloses the target volume within tolerance.
    #[must_use]
    pub fn verify_volume(&self, radius: f64, height: f64) -> bool {
        let dimensions = CylinderDimensions::new(radius, height);
        self.volume.relative_error_of(&dimensions) <= self.config.volume_rel_tol()
    }

    /// The multiplier `λ` that best satisfies `∇S = λ∇g` at `(r, h)`.
    #[must_use]
    pub fn lagrange_multiplier(&self, radius: f64, height: f64) -> f64 {
        self.stationarity(radius, height).multiplier
    }

    /// The Lagrange multiplier and stationarity residual at `(r, h)`.
    #[must_use]
    pub fn stationarity(&self, radius: f64, height: f64) -> Stationarity {
        let (grad_objective, grad_constraint) =
            self.gradients(&CylinderDimensions::new(radius, height));
        lagrange::stationarity(&grad_objective, &grad_constraint)
    }

    /// Surface area along the constraint curve `h = V/(πr²)`.
    ///
    /// Radii are evenly spaced over `[r_max/30, r_max]` with
    /// `r_max = 3·(V/π)^(1/3)`, which brackets the optimum of both variants.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested.
    pub fn landscape(
        &self,
        samples: usize,
    ) -> Result<Vec<LandscapePoint<CylinderDimensions>>, Error> {
        let volume = self.volume.value();
        let r_max = 3.0 * (volume / PI).cbrt();

        Ok(grid(r_max / 30.0, r_max, samples)?
            .into_iter()
            .map(|radius| {
                let height = volume / (PI * radius * radius);
                LandscapePoint {
                    dimensions: CylinderDimensions::new(radius, height),
                    surface_area: self.objective(radius, height),
                }
            })
            .collect())
    }
}

impl ShapeOptimizer for CylinderOptimizer {
    type Dimensions = CylinderDimensions;

    fn variant(&self) -> ShapeVariant {
        self.variant.shape()
    }

    fn volume(&self) -> Volume {
        self.volume
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn analytical_solution(&self) -> Result<SolutionRecord<CylinderDimensions>, Error> {
        // V = πr²h with h = c·r gives r = (V/(cπ))^(1/3).
        let ratio = self.variant.height_ratio();
        let radius = (self.volume.value() / (ratio * PI)).cbrt();
        let height = ratio * radius;

        Ok(SolutionRecord::new(
            CylinderDimensions::new(radius, height),
            self.objective(radius, height),
            self.volume,
            self.config.volume_rel_tol(),
        )?)
    }

    fn numerical_solution(&self) -> Result<SolutionRecord<CylinderDimensions>, Error> {
        verify::numerical_solution(self)
    }
}

impl ReducedSearch for CylinderOptimizer {
    fn seeds(&self, optimum: &CylinderDimensions) -> Vec<CylinderDimensions> {
        let p = self.config.perturbation();
        [1.0 + p, 1.0 - p]
            .into_iter()
            .map(|factor| {
                let radius = optimum.radius * factor;
                CylinderDimensions::new(radius, self.volume.value() / (PI * radius * radius))
            })
            .collect()
    }

    fn search_from(
        &self,
        seed: &CylinderDimensions,
        label: String,
    ) -> Result<Candidate<CylinderDimensions>, Error> {
        let config = golden_section::Config::new(self.config.max_iters(), 0.0, RADIUS_REL_TOL)
            .map_err(ConfigError::from)?;
        let problem = OnVolume {
            volume: self.volume.value(),
        };
        let bracket = [seed.radius / 4.0, seed.radius * 4.0];

        let solution = golden_section::minimize(
            &self.variant,
            &problem,
            bracket,
            &config,
            Fanout(LogObserver::new(label), RecoverFailures::new()),
        )
        .map_err(|source| ConvergenceError::Solver {
            variant: self.variant(),
            source,
        })?;

        Ok(Candidate::from_solution(&solution))
    }

    fn gradients(&self, d: &CylinderDimensions) -> (Vec<f64>, Vec<f64>) {
        let (r, h) = (d.radius, d.height);
        let bases = self.variant.bases();
        let objective = vec![2.0 * bases * PI * r + 2.0 * PI * h, 2.0 * PI * r];
        let constraint = vec![2.0 * PI * r * h, PI * r * r];
        (objective, constraint)
    }

    fn proportions(&self, d: &CylinderDimensions) -> Vec<(&'static str, f64, f64)> {
        let expected = self.variant.height_ratio();
        vec![("height/radius", expected, d.height / d.radius)]
    }
}
