use vessel_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Action, Error, Event, Solution, Status, best::Best, probe::sample};

use super::{
    Config,
    simplex::{CONTRACTION, EXPANSION, REFLECTION, SHRINK, Simplex, along, initial_vertices},
};

/// Core Nelder–Mead implementation.
pub(super) fn search<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    if x0.iter().any(|v| !v.is_finite()) {
        return Err(Error::InvalidStart { x: x0.to_vec() });
    }

    let mut best = Best::empty();

    let mut vertices = Vec::with_capacity(N + 1);
    for x in initial_vertices(&x0, config.initial_step()) {
        let Some(point) = sample(model, problem, x, &mut best, &mut observer)? else {
            return best.finish(Status::StoppedByObserver, 0);
        };
        vertices.push(point);
    }
    let mut simplex = Simplex::new(vertices);

    for iter in 1..=config.max_iters() {
        simplex.order();
        if simplex.is_converged(config) {
            return best.finish(Status::Converged, iter - 1);
        }

        let centroid = simplex.centroid();
        let worst = simplex.worst();

        let Some(reflected) = sample(
            model,
            problem,
            along(&centroid, &worst.x, -REFLECTION),
            &mut best,
            &mut observer,
        )?
        else {
            return best.finish(Status::StoppedByObserver, iter);
        };

        if reflected.is_better_than(&simplex.best()) {
            let Some(expanded) = sample(
                model,
                problem,
                along(&centroid, &worst.x, -REFLECTION * EXPANSION),
                &mut best,
                &mut observer,
            )?
            else {
                return best.finish(Status::StoppedByObserver, iter);
            };
            simplex.replace_worst(if expanded.is_better_than(&reflected) {
                expanded
            } else {
                reflected
            });
            continue;
        }

        if reflected.is_better_than(&simplex.second_worst()) {
            simplex.replace_worst(reflected);
            continue;
        }

        // Contract on the side of whichever of the reflected and worst
        // points is better.
        let outside = reflected.is_better_than(&worst);
        let t = if outside {
            -REFLECTION * CONTRACTION
        } else {
            CONTRACTION
        };
        let Some(contracted) = sample(
            model,
            problem,
            along(&centroid, &worst.x, t),
            &mut best,
            &mut observer,
        )?
        else {
            return best.finish(Status::StoppedByObserver, iter);
        };

        let accepted = if outside {
            contracted.objective <= reflected.objective
        } else {
            contracted.is_better_than(&worst)
        };
        if accepted {
            simplex.replace_worst(contracted);
            continue;
        }

        let anchor = simplex.best().x;
        for index in 1..=N {
            let x = along(&anchor, &simplex.vertex(index).x, SHRINK);
            let Some(point) = sample(model, problem, x, &mut best, &mut observer)? else {
                return best.finish(Status::StoppedByObserver, iter);
            };
            simplex.set(index, point);
        }
    }

    simplex.order();
    let status = if simplex.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    best.finish(status, config.max_iters())
}
