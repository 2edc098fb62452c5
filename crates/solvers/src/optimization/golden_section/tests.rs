use std::{convert::Infallible, f64::consts::PI};

use approx::assert_relative_eq;
use thiserror::Error;

use vessel_core::{Model, OptimizationProblem};

use super::{Action, Config, Error, Event, minimize, minimize_unobserved};
use crate::optimization::Status;

/// Surface area of a closed cylinder with volume 2π, as a function of radius.
///
/// S(r) = 2πr² + 2V/r, minimized at r = 1.
struct ClosedCylinderArea;

impl Model for ClosedCylinderArea {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, r: &f64) -> Result<f64, Self::Error> {
        let volume = 2.0 * PI;
        Ok(2.0 * PI * r * r + 2.0 * volume / r)
    }
}

/// Objective: use the model output as the objective.
struct ObjectiveOutput;

impl OptimizationProblem<1> for ObjectiveOutput {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn minimizes_cylinder_surface_area() {
    let solution = minimize_unobserved(
        &ClosedCylinderArea,
        &ObjectiveOutput,
        [0.1, 5.0],
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-7);
    assert_relative_eq!(solution.objective, 6.0 * PI, max_relative = 1e-12);
}

#[test]
fn accepts_reversed_bracket() {
    let solution = minimize_unobserved(
        &ClosedCylinderArea,
        &ObjectiveOutput,
        [5.0, 0.1],
        &Config::default(),
    )
    .expect("should converge");

    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-7);
}

#[test]
fn rejects_invalid_bracket() {
    let result = minimize_unobserved(
        &ClosedCylinderArea,
        &ObjectiveOutput,
        [1.0, 1.0],
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::InvalidBracket { .. })));
}

#[test]
fn reports_iteration_limit() {
    let config = Config::new(3, 0.0, 0.0).unwrap();

    let solution = minimize_unobserved(&ClosedCylinderArea, &ObjectiveOutput, [0.1, 5.0], &config)
        .expect("should return best so far");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
}

#[test]
fn observer_sees_every_evaluation_and_can_stop() {
    let mut events = 0;
    let observer = |_event: &Event<'_, _, _, 1>| {
        events += 1;
        (events >= 3).then_some(Action::StopEarly)
    };

    let solution = minimize(
        &ClosedCylinderArea,
        &ObjectiveOutput,
        [0.1, 5.0],
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    // Two initial interior points, then one evaluation in the first iteration.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_eq!(events, 3);
}

/// Identity model: f(x) = x.
struct Identity;

impl Model for Identity {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(*x)
    }
}

#[test]
fn assume_worse_keeps_points_out_of_best() {
    // For f(x) = x on [0, 10] the true minimum is at 0, but every point below
    // 5 is marked as worse, so the search settles on the boundary at 5.
    let observer = |event: &Event<'_, _, _, 1>| (event.x()[0] < 5.0).then_some(Action::AssumeWorse);

    let config = Config::default();

    let solution = minimize(&Identity, &ObjectiveOutput, [0.0, 10.0], &config, observer)
        .expect("should complete");

    assert!(solution.x[0] >= 5.0);
    assert_relative_eq!(solution.x[0], 5.0, epsilon = 1e-6);
}

#[derive(Debug, Clone, Error)]
#[error("model fails above {threshold}, got {x}")]
struct ThresholdError {
    x: f64,
    threshold: f64,
}

/// f(x) = (x - 2)², failing above a threshold.
struct FailsAbove {
    threshold: f64,
}

impl Model for FailsAbove {
    type Input = f64;
    type Output = f64;
    type Error = ThresholdError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x > self.threshold {
            Err(ThresholdError {
                x: *x,
                threshold: self.threshold,
            })
        } else {
            Ok((x - 2.0).powi(2))
        }
    }
}

#[test]
fn model_failure_is_an_error_without_recovery() {
    let model = FailsAbove { threshold: 6.0 };

    let config = Config::default();

    let result = minimize_unobserved(&model, &ObjectiveOutput, [0.0, 10.0], &config);

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn assume_worse_recovers_from_model_failure() {
    let model = FailsAbove { threshold: 6.0 };
    let observer = |event: &Event<'_, _, _, 1>| {
        let failed = matches!(event, Event::ModelFailed { .. });
        failed.then_some(Action::AssumeWorse)
    };

    let config = Config::default();

    let solution = minimize(&model, &ObjectiveOutput, [0.0, 10.0], &config, observer)
        .expect("should recover");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 2.0, epsilon = 1e-6);
}

#[test]
fn no_successful_evaluation_is_an_error() {
    let model = FailsAbove { threshold: -1.0 };
    let observer = |event: &Event<'_, _, _, 1>| event.is_failure().then_some(Action::AssumeWorse);

    let config = Config::default();

    let result = minimize(&model, &ObjectiveOutput, [0.0, 10.0], &config, observer);

    assert!(matches!(result, Err(Error::NoSuccessfulEvaluation)));
}

/// Model returning NaN everywhere.
struct NotANumber;

impl Model for NotANumber {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, _x: &f64) -> Result<f64, Self::Error> {
        Ok(f64::NAN)
    }
}

#[test]
fn nan_objective_is_an_error() {
    let config = Config::default();

    let result = minimize_unobserved(&NotANumber, &ObjectiveOutput, [0.0, 1.0], &config);

    assert!(matches!(result, Err(Error::NonFiniteObjective { .. })));
}
