use vessel_core::{Model, Observer, OptimizationProblem, Snapshot};

use super::{Action, Error, EvalError, Event, Point, best::Best, evaluate};

/// Outcome of a single observed evaluation.
pub(super) enum Probe<I, O, const N: usize> {
    /// The evaluation succeeded and the observer let it stand.
    Evaluated {
        point: Point<N>,
        snapshot: Snapshot<I, O>,
    },

    /// The observer asked to treat the point as infinitely bad.
    AssumedWorse { point: Point<N> },

    /// The observer asked to stop.
    StopEarly,
}

/// Evaluates at `x`, emits an event, and applies the observer's action.
///
/// # Errors
///
/// Returns an error if the objective is NaN, or if evaluation fails and the
/// observer does not answer with an action.
pub(super) fn probe<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    incumbent: Option<Point<N>>,
    observer: &mut Obs,
) -> Result<Probe<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let action = match evaluate(model, problem, x) {
        Ok(eval) => {
            if eval.objective.is_nan() {
                return Err(Error::NonFiniteObjective { x: x.to_vec() });
            }
            let point = Point::from(&eval);
            let event = Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                incumbent,
            };
            match observer.observe(&event) {
                Some(action) => action,
                None => {
                    return Ok(Probe::Evaluated {
                        point,
                        snapshot: eval.snapshot,
                    });
                }
            }
        }
        Err(err) => {
            let action = match &err {
                EvalError::Model(error) => observer.observe(&Event::ModelFailed {
                    x,
                    incumbent,
                    error,
                }),
                EvalError::Problem(error) => observer.observe(&Event::ProblemFailed {
                    x,
                    incumbent,
                    error,
                }),
            };
            match action {
                Some(action) => action,
                None => return Err(err.into()),
            }
        }
    };

    Ok(match action {
        Action::StopEarly => Probe::StopEarly,
        Action::AssumeWorse => Probe::AssumedWorse {
            point: Point::worst_at(x),
        },
    })
}

/// Probes `x`, records a successful evaluation in `best`, and returns the
/// point the solver should use, or `None` if the observer stopped the run.
///
/// # Errors
///
/// Propagates errors from [`probe`].
pub(super) fn sample<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    best: &mut Best<M::Input, M::Output, N>,
    observer: &mut Obs,
) -> Result<Option<Point<N>>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    match probe(model, problem, x, best.point(), observer)? {
        Probe::Evaluated { point, snapshot } => {
            best.update(point, snapshot);
            Ok(Some(point))
        }
        Probe::AssumedWorse { point } => Ok(Some(point)),
        Probe::StopEarly => Ok(None),
    }
}
