use std::fmt;

use thiserror::Error;
use vessel_solvers::optimization::{self, golden_section, nelder_mead};

use crate::ShapeVariant;

/// Errors returned by the shape optimizers and the comparator.
///
/// Every error is raised at the call that detects it and nothing is retried.
/// A caller presenting results should show [`Error::kind`] and refuse to
/// render a partially computed or unverified value.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error(transparent)]
    Convergence(#[from] ConvergenceError),

    #[error(transparent)]
    Inconsistency(#[from] InconsistencyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    Convergence,
    Inconsistency,
    Config,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Convergence(_) => ErrorKind::Convergence,
            Self::Inconsistency(_) => ErrorKind::Inconsistency,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "invalid input",
            Self::Convergence => "convergence failure",
            Self::Inconsistency => "analytical/numerical inconsistency",
            Self::Config => "invalid configuration",
        })
    }
}

/// Caller-supplied values that cannot be solved for.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("volume must be finite, got {0}")]
    NonFiniteVolume(f64),

    #[error("volume must be positive, got {0}")]
    NonPositiveVolume(f64),

    #[error("a landscape needs at least 2 samples, got {0}")]
    TooFewSamples(usize),

    #[error("unknown shape label {0:?}")]
    UnknownShape(String),
}

/// The numerical verifier did not reach a trustworthy constrained minimum.
#[derive(Debug, Error)]
pub enum ConvergenceError {
    #[error("{variant}: no search converged within {max_iters} iterations")]
    IterationLimit {
        variant: ShapeVariant,
        max_iters: usize,
    },

    #[error("{variant}: solver failed")]
    Solver {
        variant: ShapeVariant,
        #[source]
        source: optimization::Error,
    },

    #[error(
        "achieved volume {achieved} misses target {target} (relative error {rel_error:e} > {tolerance:e})"
    )]
    VolumeViolated {
        achieved: f64,
        target: f64,
        rel_error: f64,
        tolerance: f64,
    },

    #[error(
        "{variant}: objective gradient is not parallel to the constraint gradient (residual {residual:e} > {tolerance:e})"
    )]
    NotStationary {
        variant: ShapeVariant,
        residual: f64,
        tolerance: f64,
    },
}

/// The numerical and analytical solutions disagree.
///
/// This signals a defect in either the closed-form formula or the solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InconsistencyError {
    #[error(
        "{variant}: {component} is {numerical} numerically but {analytical} analytically (relative error {rel_error:e})"
    )]
    DimensionMismatch {
        variant: ShapeVariant,
        component: &'static str,
        analytical: f64,
        numerical: f64,
        rel_error: f64,
    },

    #[error("{variant}: expected {proportion} = {expected}, found {actual}")]
    ProportionViolated {
        variant: ShapeVariant,
        proportion: &'static str,
        expected: f64,
        actual: f64,
    },
}

/// Errors that can occur when validating a [`Config`](crate::Config).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("volume_rel_tol must be finite and non-negative")]
    VolumeTol,

    #[error("dimension_rel_tol must be finite and non-negative")]
    DimensionTol,

    #[error("stationarity_tol must be finite and non-negative")]
    StationarityTol,

    #[error("tie_rel_tol must be finite and non-negative")]
    TieTol,

    #[error("perturbation must lie strictly between 0 and 1")]
    Perturbation,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("golden section config: {0}")]
    GoldenSection(#[from] golden_section::ConfigError),

    #[error("Nelder-Mead config: {0}")]
    NelderMead(#[from] nelder_mead::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let input: Error = InputError::NonPositiveVolume(-1.0).into();
        let config: Error = ConfigError::Perturbation.into();
        let convergence: Error = ConvergenceError::IterationLimit {
            variant: ShapeVariant::BoxClosed,
            max_iters: 10,
        }
        .into();

        assert_eq!(input.kind(), ErrorKind::InvalidInput);
        assert_eq!(config.kind(), ErrorKind::Config);
        assert_eq!(convergence.kind(), ErrorKind::Convergence);
        assert_eq!(
            ErrorKind::Inconsistency.to_string(),
            "analytical/numerical inconsistency"
        );
    }

    #[test]
    fn messages_name_the_shape() {
        let err = InconsistencyError::ProportionViolated {
            variant: ShapeVariant::BoxOpenTop,
            proportion: "length/height",
            expected: 2.0,
            actual: 1.5,
        };

        assert_eq!(
            err.to_string(),
            "box_open: expected length/height = 2, found 1.5"
        );
    }
}
