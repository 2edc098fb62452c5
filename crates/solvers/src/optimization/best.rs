use vessel_core::Snapshot;

use super::{Error, Point, Solution, Status};

/// Tracks the best successful evaluation encountered so far.
///
/// Points the observer marked with `AssumeWorse` never reach this tracker.
/// The `Option` represents the state before any successful evaluation.
pub(super) struct Best<I, O, const N: usize> {
    entry: Option<(Point<N>, Snapshot<I, O>)>,
}

impl<I, O, const N: usize> Best<I, O, N> {
    /// Creates an empty best tracker.
    pub(super) fn empty() -> Self {
        Self { entry: None }
    }

    /// Returns the best point, if any.
    pub(super) fn point(&self) -> Option<Point<N>> {
        self.entry.as_ref().map(|(point, _)| *point)
    }

    /// Replaces the stored entry if `point` has a strictly lower objective.
    pub(super) fn update(&mut self, point: Point<N>, snapshot: Snapshot<I, O>) {
        if let Some((best, _)) = self.entry.as_ref()
            && !point.is_better_than(best)
        {
            return;
        }
        self.entry = Some((point, snapshot));
    }

    /// Finalizes the solve using the best available evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if nothing was stored.
    pub(super) fn finish(self, status: Status, iters: usize) -> Result<Solution<I, O, N>, Error> {
        let (point, snapshot) = self.entry.ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(Solution {
            status,
            x: point.x,
            objective: point.objective,
            snapshot,
            iters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn snap(x: f64) -> Snapshot<f64, f64> {
        Snapshot::new(x, x * x)
    }

    #[test]
    fn keeps_lowest_objective() {
        let mut best = Best::empty();
        best.update(Point::new([2.0], 4.0), snap(2.0));
        best.update(Point::new([1.0], 1.0), snap(1.0));
        best.update(Point::new([3.0], 9.0), snap(3.0));

        let solution = best.finish(Status::Converged, 7).unwrap();

        assert_relative_eq!(solution.x[0], 1.0);
        assert_relative_eq!(solution.snapshot.output, 1.0);
        assert_eq!(solution.iters, 7);
    }

    #[test]
    fn first_of_equal_objectives_wins() {
        let mut best = Best::empty();
        best.update(Point::new([-1.0], 1.0), snap(-1.0));
        best.update(Point::new([1.0], 1.0), snap(1.0));

        assert_relative_eq!(best.point().unwrap().x[0], -1.0);
    }

    #[test]
    fn empty_tracker_cannot_finish() {
        let best: Best<f64, f64, 1> = Best::empty();

        assert!(matches!(
            best.finish(Status::MaxIters, 0),
            Err(Error::NoSuccessfulEvaluation)
        ));
    }
}
