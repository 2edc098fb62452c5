use log::Level;
use vessel_core::Observer;

use crate::traits::{HasFailure, HasObjective};

/// Reports every solver evaluation through the [`log`] facade.
///
/// Each record carries the observer's label and a running evaluation count.
/// The observer never returns an action, so it can be combined with a
/// steering observer through [`Fanout`](crate::Fanout).
///
/// No logger backend is installed here; records are dropped unless the
/// application sets one up.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    level: Level,
    evaluations: usize,
    failures: usize,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Trace`].
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Trace,
            evaluations: 0,
            failures: 0,
        }
    }

    /// Sets the level used for each record.
    #[must_use]
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Number of events observed so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Number of observed events that were failed evaluations.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasObjective + HasFailure,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evaluations += 1;

        if let Some(error) = event.failure() {
            self.failures += 1;
            log::log!(
                self.level,
                "{} #{}: x = {:?} failed: {error}",
                self.label,
                self.evaluations,
                event.variables(),
            );
        } else {
            log::log!(
                self.level,
                "{} #{}: x = {:?}, objective = {:.12e}",
                self.label,
                self.evaluations,
                event.variables(),
                event.objective(),
            );
        }

        None
    }
}
