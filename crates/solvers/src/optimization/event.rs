use vessel_core::{Model, OptimizationProblem};

use super::Point;

/// Events emitted by the optimization solvers, one per evaluation.
///
/// Each event carries the `incumbent`: the best successfully evaluated point
/// seen before this evaluation, or `None` if there is none yet. Observers can
/// compare against it to decide whether to stop early or steer the search
/// with [`Action::AssumeWorse`](super::Action::AssumeWorse).
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation.
    Evaluated {
        /// The evaluated point (x and objective).
        point: Point<N>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The best point before this evaluation.
        incumbent: Option<Point<N>>,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The x value where evaluation failed.
        x: [f64; N],

        /// The best point before this evaluation.
        incumbent: Option<Point<N>>,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// The x value where evaluation failed.
        x: [f64; N],

        /// The best point before this evaluation.
        incumbent: Option<Point<N>>,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> &[f64; N] {
        match self {
            Self::Evaluated { point, .. } => &point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => x,
        }
    }

    /// Returns the objective, or `None` if evaluation failed.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } => Some(point.objective),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Returns the best point before this evaluation.
    #[must_use]
    pub fn incumbent(&self) -> Option<Point<N>> {
        match self {
            Self::Evaluated { incumbent, .. }
            | Self::ModelFailed { incumbent, .. }
            | Self::ProblemFailed { incumbent, .. } => *incumbent,
        }
    }

    /// Returns true if the model or problem failed at this point.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Evaluated { .. })
    }
}
