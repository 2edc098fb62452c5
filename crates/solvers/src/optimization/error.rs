use std::error::Error as StdError;

use super::EvalError;

/// Errors that can occur during an optimization solve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("objective is NaN at x = {x:?}")]
    NonFiniteObjective { x: Vec<f64> },

    #[error("invalid bracket [{left}, {right}]: bounds must be finite and distinct")]
    InvalidBracket { left: f64, right: f64 },

    #[error("invalid starting point {x:?}: all components must be finite")]
    InvalidStart { x: Vec<f64> },

    #[error("no evaluation succeeded")]
    NoSuccessfulEvaluation,
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
