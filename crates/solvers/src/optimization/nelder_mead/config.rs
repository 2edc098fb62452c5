use thiserror::Error;

/// Configuration for the Nelder–Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
    objective_abs_tol: f64,
    objective_rel_tol: f64,
    initial_step: f64,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("objective_abs_tol must be finite and non-negative")]
    ObjectiveAbs,

    #[error("objective_rel_tol must be finite and non-negative")]
    ObjectiveRel,

    #[error("initial_step must be finite and positive")]
    InitialStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-8,
            objective_abs_tol: 1e-12,
            objective_rel_tol: 1e-12,
            initial_step: 0.05,
        }
    }
}

fn is_tolerance(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl Config {
    /// Creates a new config with validated x tolerances.
    ///
    /// Objective tolerances and the initial step keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !is_tolerance(x_abs_tol) {
            return Err(ConfigError::XAbs);
        }
        if !is_tolerance(x_rel_tol) {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
            ..Self::default()
        })
    }

    /// Sets the objective spread tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn with_objective_tol(self, abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if !is_tolerance(abs_tol) {
            return Err(ConfigError::ObjectiveAbs);
        }
        if !is_tolerance(rel_tol) {
            return Err(ConfigError::ObjectiveRel);
        }

        Ok(Self {
            objective_abs_tol: abs_tol,
            objective_rel_tol: rel_tol,
            ..self
        })
    }

    /// Sets the relative displacement used to build the initial simplex.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive.
    pub fn with_initial_step(self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }

        Ok(Self {
            initial_step: step,
            ..self
        })
    }

    /// Returns the maximum number of simplex iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the absolute tolerance for the objective spread.
    #[must_use]
    pub fn objective_abs_tol(&self) -> f64 {
        self.objective_abs_tol
    }

    /// Returns the relative tolerance for the objective spread.
    #[must_use]
    pub fn objective_rel_tol(&self) -> f64 {
        self.objective_rel_tol
    }

    /// Returns the relative displacement of the initial simplex vertices.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_each_setting() {
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 0.0, -1e-3), Err(ConfigError::XRel));

        let config = Config::default();
        assert_eq!(
            config.with_objective_tol(-1.0, 0.0),
            Err(ConfigError::ObjectiveAbs)
        );
        assert_eq!(
            config.with_objective_tol(0.0, f64::INFINITY),
            Err(ConfigError::ObjectiveRel)
        );
        assert_eq!(config.with_initial_step(0.0), Err(ConfigError::InitialStep));
    }

    #[test]
    fn builders_keep_other_settings() {
        let config = Config::new(42, 1e-10, 1e-6)
            .and_then(|c| c.with_initial_step(0.2))
            .unwrap();

        assert_eq!(config.max_iters(), 42);
        assert_eq!(config.x_rel_tol(), 1e-6);
        assert_eq!(config.initial_step(), 0.2);
        assert_eq!(
            config.objective_rel_tol(),
            Config::default().objective_rel_tol()
        );
    }
}
