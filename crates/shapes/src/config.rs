use crate::ConfigError;

/// Tolerances and limits for solving and verifying container shapes.
///
/// Each optimizer owns a copy, so tests and callers can vary tolerances
/// without affecting one another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    volume_rel_tol: f64,
    dimension_rel_tol: f64,
    stationarity_tol: f64,
    tie_rel_tol: f64,
    perturbation: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume_rel_tol: 1e-6,
            dimension_rel_tol: 1e-4,
            stationarity_tol: 1e-5,
            tie_rel_tol: 1e-9,
            perturbation: 0.1,
            max_iters: 1000,
        }
    }
}

fn tolerance(value: f64, err: ConfigError) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(err)
    }
}

impl Config {
    /// Sets the relative tolerance on the achieved volume of every record.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_volume_rel_tol(self, tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            volume_rel_tol: tolerance(tol, ConfigError::VolumeTol)?,
            ..self
        })
    }

    /// Sets the relative tolerance for numerical/analytical dimension agreement.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_dimension_rel_tol(self, tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            dimension_rel_tol: tolerance(tol, ConfigError::DimensionTol)?,
            ..self
        })
    }

    /// Sets the tolerance on the Lagrange stationarity residual.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_stationarity_tol(self, tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            stationarity_tol: tolerance(tol, ConfigError::StationarityTol)?,
            ..self
        })
    }

    /// Sets the relative objective window in which candidates count as tied.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_tie_rel_tol(self, tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            tie_rel_tol: tolerance(tol, ConfigError::TieTol)?,
            ..self
        })
    }

    /// Sets the relative perturbation applied to the analytical optimum to
    /// seed the numerical searches.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < perturbation < 1`.
    pub fn with_perturbation(self, perturbation: f64) -> Result<Self, ConfigError> {
        if !(perturbation > 0.0 && perturbation < 1.0) {
            return Err(ConfigError::Perturbation);
        }
        Ok(Self {
            perturbation,
            ..self
        })
    }

    /// Sets the iteration cap for each numerical search.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters, ..self })
    }

    #[must_use]
    pub fn volume_rel_tol(&self) -> f64 {
        self.volume_rel_tol
    }

    #[must_use]
    pub fn dimension_rel_tol(&self) -> f64 {
        self.dimension_rel_tol
    }

    #[must_use]
    pub fn stationarity_tol(&self) -> f64 {
        self.stationarity_tol
    }

    #[must_use]
    pub fn tie_rel_tol(&self) -> f64 {
        self.tie_rel_tol
    }

    #[must_use]
    pub fn perturbation(&self) -> f64 {
        self.perturbation
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
