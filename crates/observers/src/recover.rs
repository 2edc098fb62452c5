use vessel_core::Observer;

use crate::traits::{CanAssumeWorse, HasFailure};

/// Answers every failed evaluation with an "assume worse" action.
///
/// A simplex can propose points outside the feasible region, such as a
/// negative side length. With this observer the solver treats those points
/// as infinitely bad and keeps searching instead of returning an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoverFailures {
    recovered: usize,
}

impl RecoverFailures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failures answered so far.
    #[must_use]
    pub fn recovered(&self) -> usize {
        self.recovered
    }
}

impl<E, A> Observer<E, A> for RecoverFailures
where
    E: HasFailure,
    A: CanAssumeWorse,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        event.failure()?;
        self.recovered += 1;
        Some(A::assume_worse())
    }
}
