//! Rectangular boxes, closed or open at the top.
//!
//! With `S = k·lw + 2lh + 2wh` (`k` horizontal faces) and `lwh = V`, the
//! Lagrange conditions force a square base. The open-top box then has
//! `l = w = 2h` and the closed box is a cube. The numerical check eliminates
//! the height and runs a Nelder–Mead search over length and width, so the
//! square base is found rather than assumed.

use std::convert::Infallible;

use vessel_core::{Model, OptimizationProblem};
use vessel_observers::{Fanout, LogObserver, RecoverFailures};
use vessel_solvers::optimization::nelder_mead;

use crate::{
    BoxDimensions, Config, ConfigError, ConvergenceError, Error, LandscapePoint,
    ShapeOptimizer, ShapeVariant, SolutionRecord, Volume,
    lagrange::{self, Stationarity},
    landscape::grid,
    verify::{self, Candidate, Infeasible, ReducedSearch},
};

/// Component-wise relative simplex size at which the base search stops.
const BASE_REL_TOL: f64 = 1e-7;

/// Relative surface-area spread across the simplex at which the search stops.
const AREA_REL_TOL: f64 = 1e-12;

/// Whether the box has a lid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxVariant {
    OpenTop,
    Closed,
}

impl BoxVariant {
    #[must_use]
    pub fn from_open_top(open_top: bool) -> Self {
        if open_top {
            Self::OpenTop
        } else {
            Self::Closed
        }
    }

    #[must_use]
    pub fn shape(self) -> ShapeVariant {
        match self {
            Self::OpenTop => ShapeVariant::BoxOpenTop,
            Self::Closed => ShapeVariant::BoxClosed,
        }
    }

    /// Number of horizontal faces.
    fn lids(self) -> f64 {
        match self {
            Self::OpenTop => 1.0,
            Self::Closed => 2.0,
        }
    }

    /// Optimal length over height.
    #[must_use]
    pub fn length_ratio(self) -> f64 {
        match self {
            Self::OpenTop => 2.0,
            Self::Closed => 1.0,
        }
    }

    /// Surface area of a box with these dimensions.
    #[must_use]
    pub fn surface_area(self, length: f64, width: f64, height: f64) -> f64 {
        self.lids() * length * width + 2.0 * length * height + 2.0 * width * height
    }
}

impl Model for BoxVariant {
    type Input = BoxDimensions;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, d: &BoxDimensions) -> Result<f64, Self::Error> {
        Ok(self.surface_area(d.length, d.width, d.height))
    }
}

/// Base to dimensions on the constraint `lwh = V`.
struct OnVolume {
    volume: f64,
}

impl OptimizationProblem<2> for OnVolume {
    type Input = BoxDimensions;
    type Output = f64;
    type Error = Infeasible;

    fn input(&self, x: &[f64; 2]) -> Result<BoxDimensions, Self::Error> {
        let [length, width] = *x;
        let height = self.volume / (length * width);
        if !(length > 0.0 && width > 0.0 && height.is_finite()) {
            return Err(Infeasible(x.to_vec()));
        }
        Ok(BoxDimensions::new(length, width, height))
    }

    fn objective(&self, _input: &BoxDimensions, area: &f64) -> Result<f64, Self::Error> {
        Ok(*area)
    }
}

/// Minimizes rectangular box surface area at a fixed volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularBoxOptimizer {
    volume: Volume,
    variant: BoxVariant,
    config: Config,
}

impl RectangularBoxOptimizer {
    /// Creates an optimizer with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `volume` is not positive and finite.
    pub fn new(volume: f64, open_top: bool) -> Result<Self, Error> {
        Self::with_config(volume, open_top, Config::default())
    }

    /// Creates an optimizer with an explicit [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `volume` is not positive and finite.
    pub fn with_config(volume: f64, open_top: bool, config: Config) -> Result<Self, Error> {
        Ok(Self::from_parts(
            Volume::new(volume)?,
            BoxVariant::from_open_top(open_top),
            config,
        ))
    }

    #[must_use]
    pub fn from_parts(volume: Volume, variant: BoxVariant, config: Config) -> Self {
        Self {
            volume,
            variant,
            config,
        }
    }

    #[must_use]
    pub fn box_variant(&self) -> BoxVariant {
        self.variant
    }

    /// Surface area at `(l, w, h)`, on or off the constraint.
    #[must_use]
    pub fn objective(&self, length: f64, width: f64, height: f64) -> f64 {
        self.variant.surface_area(length, width, height)
    }

    /// Volume residual `lwh − V`; zero on the constraint.
    #[must_use]
    pub fn constraint(&self, length: f64, width: f64, height: f64) -> f64 {
        length * width * height - self.volume.value()
    }

    /// Returns true if `(l, w, h)` encloses the target volume within tolerance.
    #[must_use]
    pub fn verify_volume(&self, length: f64, width: f64, height: f64) -> bool {
        let dimensions = BoxDimensions::new(length, width, height);
        self.volume.relative_error_of(&dimensions) <= self.config.volume_rel_tol()
    }

    /// The multiplier `λ` that best satisfies `∇S = λ∇g` at `(l, w, h)`.
    #[must_use]
    pub fn lagrange_multiplier(&self, length: f64, width: f64, height: f64) -> f64 {
        self.stationarity(length, width, height).multiplier
    }

    /// The Lagrange multiplier and stationarity residual at `(l, w, h)`.
    #[must_use]
    pub fn stationarity(&self, length: f64, width: f64, height: f64) -> Stationarity {
        let (grad_objective, grad_constraint) =
            self.gradients(&BoxDimensions::new(length, width, height));
        lagrange::stationarity(&grad_objective, &grad_constraint)
    }

    /// Surface area along the square-base curve `w = l`, `h = V/l²`.
    ///
    /// Lengths are evenly spaced over `[l_max/30, l_max]` with
    /// `l_max = 3·V^(1/3)`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested.
    pub fn landscape(&self, samples: usize) -> Result<Vec<LandscapePoint<BoxDimensions>>, Error> {
        let volume = self.volume.value();
        let l_max = 3.0 * volume.cbrt();

        Ok(grid(l_max / 30.0, l_max, samples)?
            .into_iter()
            .map(|length| {
                let height = volume / (length * length);
                LandscapePoint {
                    dimensions: BoxDimensions::new(length, length, height),
                    surface_area: self.objective(length, length, height),
                }
            })
            .collect())
    }
}

impl ShapeOptimizer for RectangularBoxOptimizer {
    type Dimensions = BoxDimensions;

    fn variant(&self) -> ShapeVariant {
        self.variant.shape()
    }

    fn volume(&self) -> Volume {
        self.volume
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn analytical_solution(&self) -> Result<SolutionRecord<BoxDimensions>, Error> {
        // V = l²h with l = c·h gives h = (V/c²)^(1/3).
        let ratio = self.variant.length_ratio();
        let height = (self.volume.value() / (ratio * ratio)).cbrt();
        let side = ratio * height;

        Ok(SolutionRecord::new(
            BoxDimensions::new(side, side, height),
            self.objective(side, side, height),
            self.volume,
            self.config.volume_rel_tol(),
        )?)
    }

    fn numerical_solution(&self) -> Result<SolutionRecord<BoxDimensions>, Error> {
        verify::numerical_solution(self)
    }
}

impl ReducedSearch for RectangularBoxOptimizer {
    /// Skews the base in opposite directions so neither seed is square.
    fn seeds(&self, optimum: &BoxDimensions) -> Vec<BoxDimensions> {
        let p = self.config.perturbation();
        [(1.0 + p, 1.0 - p), (1.0 - p, 1.0 + p)]
            .into_iter()
            .map(|(fl, fw)| {
                let length = optimum.length * fl;
                let width = optimum.width * fw;
                BoxDimensions::new(length, width, self.volume.value() / (length * width))
            })
            .collect()
    }

    fn search_from(
        &self,
        seed: &BoxDimensions,
        label: String,
    ) -> Result<Candidate<BoxDimensions>, Error> {
        let config = nelder_mead::Config::new(self.config.max_iters(), 0.0, BASE_REL_TOL)
            .and_then(|c| c.with_objective_tol(0.0, AREA_REL_TOL))
            .map_err(ConfigError::from)?;
        let problem = OnVolume {
            volume: self.volume.value(),
        };

        let solution = nelder_mead::minimize(
            &self.variant,
            &problem,
            [seed.length, seed.width],
            &config,
            Fanout(LogObserver::new(label), RecoverFailures::new()),
        )
        .map_err(|source| ConvergenceError::Solver {
            variant: self.variant(),
            source,
        })?;

        Ok(Candidate::from_solution(&solution))
    }

    fn gradients(&self, d: &BoxDimensions) -> (Vec<f64>, Vec<f64>) {
        let (l, w, h) = (d.length, d.width, d.height);
        let k = self.variant.lids();
        let objective = vec![k * w + 2.0 * h, k * l + 2.0 * h, 2.0 * (l + w)];
        let constraint = vec![w * h, l * h, l * w];
        (objective, constraint)
    }

    fn proportions(&self, d: &BoxDimensions) -> Vec<(&'static str, f64, f64)> {
        let expected = self.variant.length_ratio();
        vec![
            ("width/length", 1.0, d.width / d.length),
            ("length/height", expected, d.length / d.height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{ErrorKind, Geometry, InputError};

    #[test]
    fn closed_box_is_a_cube() {
        let optimizer = RectangularBoxOptimizer::new(27.0, false).unwrap();

        let record = optimizer.analytical_solution().unwrap();
        let d = record.dimensions();

        assert_relative_eq!(d.length, 3.0, max_relative = 1e-12);
        assert_relative_eq!(d.width, 3.0, max_relative = 1e-12);
        assert_relative_eq!(d.height, 3.0, max_relative = 1e-12);
        assert_relative_eq!(record.surface_area(), 54.0, max_relative = 1e-12);
    }

    #[test]
    fn open_top_box_is_twice_as_wide_as_tall() {
        let optimizer = RectangularBoxOptimizer::new(32.0, true).unwrap();

        let record = optimizer.analytical_solution().unwrap();
        let d = record.dimensions();

        assert_relative_eq!(d.height, 2.0, max_relative = 1e-12);
        assert_relative_eq!(d.length, 4.0, max_relative = 1e-12);
        assert_relative_eq!(d.width, 4.0, max_relative = 1e-12);
        assert_relative_eq!(record.surface_area(), 48.0, max_relative = 1e-12);
    }

    #[test]
    fn rejects_invalid_volume() {
        for volume in [0.0, f64::NAN, f64::NEG_INFINITY] {
            let err = RectangularBoxOptimizer::new(volume, true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn objective_and_constraint_off_the_optimum() {
        let optimizer = RectangularBoxOptimizer::new(8.0, true).unwrap();

        assert_relative_eq!(optimizer.objective(1.0, 2.0, 3.0), 2.0 + 6.0 + 12.0);
        assert_relative_eq!(optimizer.constraint(1.0, 2.0, 3.0), -2.0);
        assert!(!optimizer.verify_volume(1.0, 2.0, 3.0));
        assert!(optimizer.verify_volume(1.0, 2.0, 4.0));
    }

    #[test]
    fn multiplier_at_the_optimum() {
        let open = RectangularBoxOptimizer::new(32.0, true).unwrap();
        let closed = RectangularBoxOptimizer::new(27.0, false).unwrap();

        // 2/h for the open-top box, 4/a for the cube.
        assert_relative_eq!(open.lagrange_multiplier(4.0, 4.0, 2.0), 1.0);
        assert_relative_eq!(closed.lagrange_multiplier(3.0, 3.0, 3.0), 4.0 / 3.0);
        assert!(open.stationarity(4.0, 4.0, 2.0).residual < 1e-12);
        assert!(open.stationarity(5.0, 3.2, 2.0).residual > 1e-3);
    }

    #[test]
    fn numerical_finds_the_square_base() {
        for open_top in [true, false] {
            let optimizer = RectangularBoxOptimizer::new(1000.0, open_top).unwrap();

            let analytical = optimizer.analytical_solution().unwrap();
            let numerical = optimizer.numerical_solution().unwrap();
            let (a, n) = (analytical.dimensions(), numerical.dimensions());

            assert_relative_eq!(n.length, a.length, max_relative = 1e-4);
            assert_relative_eq!(n.width, a.width, max_relative = 1e-4);
            assert_relative_eq!(n.height, a.height, max_relative = 1e-4);
            assert_relative_eq!(n.width / n.length, 1.0, max_relative = 1e-4);
        }
    }

    #[test]
    fn seeds_are_feasible_and_not_square() {
        let optimizer = RectangularBoxOptimizer::new(250.0, true).unwrap();
        let optimum = *optimizer.analytical_solution().unwrap().dimensions();

        for seed in optimizer.seeds(&optimum) {
            assert_relative_eq!(seed.enclosed_volume(), 250.0, max_relative = 1e-12);
            assert!((seed.length - seed.width).abs() > 0.1 * optimum.length);
        }
    }

    #[test]
    fn base_search_rejects_non_positive_sides() {
        let problem = OnVolume { volume: 1.0 };

        assert!(problem.input(&[-1.0, 2.0]).is_err());
        assert!(problem.input(&[1.0, 0.0]).is_err());
        assert_relative_eq!(problem.input(&[0.5, 4.0]).unwrap().height, 0.5);
    }

    #[test]
    fn landscape_bottoms_out_near_the_optimum() {
        let optimizer = RectangularBoxOptimizer::new(1000.0, true).unwrap();
        let optimum = *optimizer.analytical_solution().unwrap().dimensions();

        let points = optimizer.landscape(300).unwrap();
        let lowest = points
            .iter()
            .min_by(|a, b| a.surface_area.total_cmp(&b.surface_area))
            .unwrap();
        let spacing = points[1].dimensions.length - points[0].dimensions.length;

        assert!((lowest.dimensions.length - optimum.length).abs() <= spacing);
        assert!(matches!(
            optimizer.landscape(0),
            Err(Error::InvalidInput(InputError::TooFewSamples(0)))
        ));
    }
}
