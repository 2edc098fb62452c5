/// Actions an observer can take during an optimization solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,

    /// Treat this point as having an infinitely bad objective.
    ///
    /// The solver moves away from the point, and a successful evaluation
    /// marked this way is not considered for the best solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors, such as a simplex vertex
    ///   that proposes a negative dimension.
    /// - Steering the search away from a region even when evaluation succeeded.
    AssumeWorse,
}
