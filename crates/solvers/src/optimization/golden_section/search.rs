use vessel_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Action, Error, Event, Solution, Status, best::Best, probe::sample};

use super::{Config, bracket::GoldenBracket};

/// Core golden section search implementation.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, 1>, Action>,
{
    let mut bracket = GoldenBracket::new(bracket)?;
    let mut best = Best::empty();
    let obs = &mut observer;

    let Some(mut left) = sample(model, problem, [bracket.inner_left], &mut best, obs)? else {
        return best.finish(Status::StoppedByObserver, 0);
    };
    let Some(mut right) = sample(model, problem, [bracket.inner_right], &mut best, obs)? else {
        return best.finish(Status::StoppedByObserver, 0);
    };

    for iter in 1..=config.max_iters() {
        if bracket.is_converged(config) {
            return best.finish(Status::Converged, iter - 1);
        }

        if right.is_better_than(&left) {
            // Minimum lies in [inner_left, right].
            bracket.shrink_left();
            left = right;
            let Some(point) = sample(model, problem, [bracket.inner_right], &mut best, obs)? else {
                return best.finish(Status::StoppedByObserver, iter);
            };
            right = point;
        } else {
            // Minimum lies in [left, inner_right]; ties land here too.
            bracket.shrink_right();
            right = left;
            let Some(point) = sample(model, problem, [bracket.inner_left], &mut best, obs)? else {
                return best.finish(Status::StoppedByObserver, iter);
            };
            left = point;
        }
    }

    let status = if bracket.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    best.finish(status, config.max_iters())
}
